//! SeaORM implementation of the Order repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{
    CrudRepository, DomainError, Order, OrderRepository, OrderStatus, OrderType, ReportDto,
};
use crate::models::order::{ActiveModel, Column, Entity as OrderEntity, Model};

/// SeaORM-based implementation of OrderRepository
pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// Status and type columns are decoded on every read
impl TryFrom<Model> for Order {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Order {
            id: Some(model.id),
            date: model.date,
            value: Some(model.value),
            delivery_value: Some(model.delivery_value),
            table_id: model.table_id,
            status: Some(OrderStatus::from_code(model.order_status)?),
            order_type: Some(OrderType::from_code(model.order_type)?),
            address_id: model.order_address_id,
        })
    }
}

fn to_active_model(order: &Order) -> Result<ActiveModel, DomainError> {
    let value = order
        .value
        .ok_or_else(|| DomainError::missing_field("order", "value"))?;
    let delivery_value = order
        .delivery_value
        .ok_or_else(|| DomainError::missing_field("order", "delivery_value"))?;
    let status = order
        .status
        .ok_or_else(|| DomainError::missing_field("order", "status"))?;
    let order_type = order
        .order_type
        .ok_or_else(|| DomainError::missing_field("order", "type"))?;

    if order_type == OrderType::Delivery && order.address_id.is_none() {
        return Err(DomainError::Database(
            "a DELIVERY order requires an address".to_string(),
        ));
    }

    Ok(ActiveModel {
        id: NotSet,
        date: Set(order.date),
        value: Set(value),
        delivery_value: Set(delivery_value),
        table_id: Set(order.table_id),
        order_status: Set(status.code()),
        order_type: Set(order_type.code()),
        order_address_id: Set(order.address_id),
    })
}

fn to_domain_all(models: Vec<Model>) -> Result<Vec<Order>, DomainError> {
    models.into_iter().map(Order::try_from).collect()
}

#[async_trait]
impl CrudRepository for SeaOrmOrderRepository {
    type Entity = Order;

    async fn insert(&self, order: Order) -> Result<Order, DomainError> {
        let result = to_active_model(&order)?.insert(&self.db).await?;
        tracing::debug!(
            "Inserted order {} (status {}, type {})",
            result.id,
            result.order_status,
            result.order_type
        );

        Order::try_from(result)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        OrderEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Order::try_from)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let orders = OrderEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        to_domain_all(orders)
    }

    async fn update(&self, order: Order) -> Result<bool, DomainError> {
        let active = to_active_model(&order)?;
        let Some(id) = order.id else {
            return Ok(false);
        };

        let result = OrderEntity::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = OrderEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_pending_orders(&self) -> Result<Vec<Order>, DomainError> {
        let terminal: Vec<i32> = OrderStatus::ALL
            .into_iter()
            .filter(|status| status.is_terminal())
            .map(OrderStatus::code)
            .collect();

        let orders = OrderEntity::find()
            .filter(Column::OrderStatus.is_not_in(terminal))
            .order_by_asc(Column::Date)
            .all(&self.db)
            .await?;

        to_domain_all(orders)
    }

    async fn report(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<ReportDto>, DomainError> {
        if start > end {
            return Ok(Vec::new());
        }

        // [start 00:00, end + 1 day 00:00)
        let from = start.and_time(NaiveTime::MIN);
        let until = end
            .checked_add_days(Days::new(1))
            .map(|day| day.and_time(NaiveTime::MIN));

        let mut query = OrderEntity::find()
            .filter(Column::OrderStatus.eq(OrderStatus::Complete.code()))
            .filter(Column::Date.gte(from));
        if let Some(until) = until {
            query = query.filter(Column::Date.lt(until));
        }

        let orders = query.order_by_asc(Column::Date).all(&self.db).await?;

        let mut per_day: BTreeMap<NaiveDate, (i64, f64)> = BTreeMap::new();
        for order in orders {
            let entry = per_day.entry(order.date.date()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += order.value + order.delivery_value;
        }

        tracing::debug!(
            "Report {}..={}: {} day(s) with completed orders",
            start,
            end,
            per_day.len()
        );

        Ok(per_day
            .into_iter()
            .map(|(date, (orders, total_value))| ReportDto {
                date,
                orders,
                total_value,
            })
            .collect())
    }
}
