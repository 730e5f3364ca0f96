//! SeaORM implementation of the Product repository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{CrudRepository, DomainError, Product};
use crate::models::product::{ActiveModel, Column, Entity as ProductEntity, Model};

/// SeaORM-based implementation of the Product repository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> Product {
    Product {
        id: Some(model.id),
        name: model.name,
        price: Some(model.price),
        category_id: Some(model.category_id),
    }
}

fn to_active_model(product: &Product) -> Result<ActiveModel, DomainError> {
    let price = product
        .price
        .ok_or_else(|| DomainError::missing_field("product", "price"))?;
    let category_id = product
        .category_id
        .ok_or_else(|| DomainError::missing_field("product", "category"))?;

    Ok(ActiveModel {
        id: NotSet,
        name: Set(product.name.clone()),
        price: Set(price),
        category_id: Set(category_id),
    })
}

#[async_trait]
impl CrudRepository for SeaOrmProductRepository {
    type Entity = Product;

    async fn insert(&self, product: Product) -> Result<Product, DomainError> {
        let result = to_active_model(&product)?.insert(&self.db).await?;
        tracing::debug!(
            "Inserted product {} ({}) in category {}",
            result.id,
            result.name,
            result.category_id
        );

        Ok(to_domain(result))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let product = ProductEntity::find_by_id(id).one(&self.db).await?;

        Ok(product.map(to_domain))
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = ProductEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(products.into_iter().map(to_domain).collect())
    }

    async fn update(&self, product: Product) -> Result<bool, DomainError> {
        let active = to_active_model(&product)?;
        let Some(id) = product.id else {
            return Ok(false);
        };

        let result = ProductEntity::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = ProductEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
