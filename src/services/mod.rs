//! Services Layer
//!
//! Business rules on top of the repository traits. Services receive their
//! repositories through the constructor, so any `CrudRepository`
//! implementation can stand in for the SeaORM one.

pub mod crud_service;
pub mod order_service;

use crate::domain::{Category, CrudRepository, OrderAddress, OrderItem, Product, Table};

pub use crud_service::CrudService;
pub use order_service::OrderService;

pub type CategoryService = CrudService<dyn CrudRepository<Entity = Category>>;
pub type ProductService = CrudService<dyn CrudRepository<Entity = Product>>;
pub type TableService = CrudService<dyn CrudRepository<Entity = Table>>;
pub type OrderAddressService = CrudService<dyn CrudRepository<Entity = OrderAddress>>;
pub type OrderItemService = CrudService<dyn CrudRepository<Entity = OrderItem>>;
