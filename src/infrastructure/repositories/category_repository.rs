//! SeaORM implementation of the Category repository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{Category, CrudRepository, DomainError};
use crate::models::category::{ActiveModel, Column, Entity as CategoryEntity, Model};

/// SeaORM-based implementation of the Category repository
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> Category {
    Category {
        id: Some(model.id),
        name: model.name,
    }
}

fn to_active_model(category: &Category) -> Result<ActiveModel, DomainError> {
    if category.name.trim().is_empty() {
        return Err(DomainError::missing_field("category", "name"));
    }

    Ok(ActiveModel {
        id: NotSet,
        name: Set(category.name.clone()),
    })
}

#[async_trait]
impl CrudRepository for SeaOrmCategoryRepository {
    type Entity = Category;

    async fn insert(&self, category: Category) -> Result<Category, DomainError> {
        let result = to_active_model(&category)?.insert(&self.db).await?;
        tracing::debug!("Inserted category {} ({})", result.id, result.name);

        Ok(to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DomainError> {
        let category = CategoryEntity::find_by_id(id).one(&self.db).await?;

        Ok(category.map(to_domain))
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let categories = CategoryEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(categories.into_iter().map(to_domain).collect())
    }

    async fn update(&self, category: Category) -> Result<bool, DomainError> {
        let active = to_active_model(&category)?;
        let Some(id) = category.id else {
            return Ok(false);
        };

        let result = CategoryEntity::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DomainError> {
        let result = CategoryEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
