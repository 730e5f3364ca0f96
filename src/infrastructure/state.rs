//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    Category, CrudRepository, OrderAddress, OrderItem, OrderRepository, Product, Table,
};
use crate::infrastructure::{
    SeaOrmCategoryRepository, SeaOrmOrderAddressRepository, SeaOrmOrderItemRepository,
    SeaOrmOrderRepository, SeaOrmProductRepository, SeaOrmTableRepository,
};
use crate::services::{
    CategoryService, CrudService, OrderAddressService, OrderItemService, OrderService,
    ProductService, TableService,
};

/// Application state: every repository built once over the same connection
#[derive(Clone)]
pub struct AppState {
    pub category_repo: Arc<dyn CrudRepository<Entity = Category>>,
    pub product_repo: Arc<dyn CrudRepository<Entity = Product>>,
    pub table_repo: Arc<dyn CrudRepository<Entity = Table>>,
    pub order_address_repo: Arc<dyn CrudRepository<Entity = OrderAddress>>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub order_item_repo: Arc<dyn CrudRepository<Entity = OrderItem>>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            category_repo: Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            product_repo: Arc::new(SeaOrmProductRepository::new(db.clone())),
            table_repo: Arc::new(SeaOrmTableRepository::new(db.clone())),
            order_address_repo: Arc::new(SeaOrmOrderAddressRepository::new(db.clone())),
            order_repo: Arc::new(SeaOrmOrderRepository::new(db.clone())),
            order_item_repo: Arc::new(SeaOrmOrderItemRepository::new(db)),
        }
    }

    pub fn category_service(&self) -> CategoryService {
        CrudService::new(Arc::clone(&self.category_repo))
    }

    pub fn product_service(&self) -> ProductService {
        CrudService::new(Arc::clone(&self.product_repo))
    }

    pub fn table_service(&self) -> TableService {
        CrudService::new(Arc::clone(&self.table_repo))
    }

    pub fn order_address_service(&self) -> OrderAddressService {
        CrudService::new(Arc::clone(&self.order_address_repo))
    }

    pub fn order_service(&self) -> OrderService {
        OrderService::new(Arc::clone(&self.order_repo))
    }

    pub fn order_item_service(&self) -> OrderItemService {
        CrudService::new(Arc::clone(&self.order_item_repo))
    }
}
