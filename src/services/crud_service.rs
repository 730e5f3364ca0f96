//! Generic CRUD service
//!
//! Wraps any `CrudRepository` and adds the existence checks the presentation
//! layer relies on: lookups, updates and deletes of unknown ids fail with
//! `DomainError::NotFound` instead of returning `None`/`false`.

use std::sync::Arc;

use crate::domain::{CrudRepository, DomainError, Identifiable};

type Id<R> = <<R as CrudRepository>::Entity as Identifiable>::Id;

fn entity_name<R: CrudRepository + ?Sized>() -> &'static str {
    <R::Entity as Identifiable>::NAME
}

pub struct CrudService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> CrudService<R>
where
    R: CrudRepository + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn find_by_id(&self, id: Id<R>) -> Result<R::Entity, DomainError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!("{} {} not found", entity_name::<R>(), id);
            DomainError::not_found(entity_name::<R>(), id)
        })
    }

    /// An empty table is reported as `NotFound`, not as an empty list.
    pub async fn find_all(&self) -> Result<Vec<R::Entity>, DomainError> {
        let entities = self.repo.find_all().await?;

        if entities.is_empty() {
            tracing::warn!("No {} rows found", entity_name::<R>());
            return Err(DomainError::NotFound(format!(
                "no {} found",
                entity_name::<R>()
            )));
        }

        Ok(entities)
    }

    pub async fn insert(&self, entity: R::Entity) -> Result<R::Entity, DomainError> {
        self.repo.insert(entity).await
    }

    pub async fn update(&self, entity: R::Entity) -> Result<bool, DomainError> {
        let Some(id) = entity.id() else {
            return Err(DomainError::NotFound(format!(
                "{} without id cannot be updated",
                entity_name::<R>()
            )));
        };

        self.find_by_id(id).await?;
        self.repo.update(entity).await
    }

    pub async fn delete_by_id(&self, id: Id<R>) -> Result<bool, DomainError> {
        self.find_by_id(id).await?;
        self.repo.delete_by_id(id).await
    }
}
