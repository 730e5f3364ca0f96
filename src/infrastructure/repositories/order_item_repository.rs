//! SeaORM implementation of the OrderItem repository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{CrudRepository, DomainError, OrderItem};
use crate::models::order_item::{ActiveModel, Column, Entity as OrderItemEntity, Model};

/// SeaORM-based implementation of the OrderItem repository
pub struct SeaOrmOrderItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> OrderItem {
    OrderItem {
        id: Some(model.id),
        product_id: Some(model.product_id),
        order_id: Some(model.order_id),
        quantity: Some(model.quantity),
        value: Some(model.value),
    }
}

fn to_active_model(item: &OrderItem) -> Result<ActiveModel, DomainError> {
    let product_id = item
        .product_id
        .ok_or_else(|| DomainError::missing_field("order_item", "product"))?;
    let order_id = item
        .order_id
        .ok_or_else(|| DomainError::missing_field("order_item", "order"))?;
    let quantity = item
        .quantity
        .ok_or_else(|| DomainError::missing_field("order_item", "quantity"))?;
    let value = item
        .value
        .ok_or_else(|| DomainError::missing_field("order_item", "value"))?;

    Ok(ActiveModel {
        id: NotSet,
        product_id: Set(product_id),
        order_id: Set(order_id),
        quantity: Set(quantity),
        value: Set(value),
    })
}

#[async_trait]
impl CrudRepository for SeaOrmOrderItemRepository {
    type Entity = OrderItem;

    async fn insert(&self, item: OrderItem) -> Result<OrderItem, DomainError> {
        let result = to_active_model(&item)?.insert(&self.db).await?;
        tracing::debug!(
            "Inserted order item {} (product {} x{}) on order {}",
            result.id,
            result.product_id,
            result.quantity,
            result.order_id
        );

        Ok(to_domain(result))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderItem>, DomainError> {
        let item = OrderItemEntity::find_by_id(id).one(&self.db).await?;

        Ok(item.map(to_domain))
    }

    async fn find_all(&self) -> Result<Vec<OrderItem>, DomainError> {
        let items = OrderItemEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(items.into_iter().map(to_domain).collect())
    }

    async fn update(&self, item: OrderItem) -> Result<bool, DomainError> {
        let active = to_active_model(&item)?;
        let Some(id) = item.id else {
            return Ok(false);
        };

        let result = OrderItemEntity::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = OrderItemEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
