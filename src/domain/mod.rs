//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies besides the `DbErr`
//! conversion. Only domain records, code enums, trait definitions and
//! domain error types.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod repositories;

pub use entities::*;
pub use enums::{OrderStatus, OrderType};
pub use errors::DomainError;
pub use repositories::*;
