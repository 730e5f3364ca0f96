//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::entities::{Identifiable, Order, ReportDto};
use super::DomainError;

/// CRUD contract shared by every entity repository
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Entity: Identifiable;

    /// Persist a new row and return the entity carrying its assigned id.
    /// Missing required fields and dangling references fail with
    /// `DomainError::Database`.
    async fn insert(&self, entity: Self::Entity) -> Result<Self::Entity, DomainError>;

    /// Insert each entity in turn; stops at the first failure.
    async fn insert_all(
        &self,
        entities: Vec<Self::Entity>,
    ) -> Result<Vec<Self::Entity>, DomainError> {
        let mut inserted = Vec::with_capacity(entities.len());
        for entity in entities {
            inserted.push(self.insert(entity).await?);
        }
        Ok(inserted)
    }

    async fn find_by_id(
        &self,
        id: <Self::Entity as Identifiable>::Id,
    ) -> Result<Option<Self::Entity>, DomainError>;

    /// All rows ordered by id; empty when the table is empty.
    async fn find_all(&self) -> Result<Vec<Self::Entity>, DomainError>;

    /// Replace the row with the entity's id. Returns `false` when no such row
    /// exists, but an invalid entity fails before the store is touched.
    async fn update(&self, entity: Self::Entity) -> Result<bool, DomainError>;

    /// Returns `true` iff a row was removed.
    async fn delete_by_id(&self, id: <Self::Entity as Identifiable>::Id)
    -> Result<bool, DomainError>;
}

/// Repository trait for Order entity
#[async_trait]
pub trait OrderRepository: CrudRepository<Entity = Order> {
    /// Orders whose status is neither COMPLETE nor CANCELED
    async fn find_pending_orders(&self) -> Result<Vec<Order>, DomainError>;

    /// Per-day revenue of COMPLETE orders placed within `[start, end]`
    async fn report(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<ReportDto>, DomainError>;
}
