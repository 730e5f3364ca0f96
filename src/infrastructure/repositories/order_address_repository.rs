//! SeaORM implementation of the OrderAddress repository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{CrudRepository, DomainError, OrderAddress};
use crate::models::order_address::{ActiveModel, Column, Entity as OrderAddressEntity, Model};

/// SeaORM-based implementation of the OrderAddress repository
pub struct SeaOrmOrderAddressRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> OrderAddress {
    OrderAddress {
        id: Some(model.id),
        client_name: model.client_name,
        street: model.street,
        number: model.number,
        district: model.district,
        city: model.city,
        state: model.state,
    }
}

fn to_active_model(address: OrderAddress) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        client_name: Set(address.client_name),
        street: Set(address.street),
        number: Set(address.number),
        district: Set(address.district),
        city: Set(address.city),
        state: Set(address.state),
    }
}

#[async_trait]
impl CrudRepository for SeaOrmOrderAddressRepository {
    type Entity = OrderAddress;

    async fn insert(&self, address: OrderAddress) -> Result<OrderAddress, DomainError> {
        let result = to_active_model(address).insert(&self.db).await?;
        tracing::debug!("Inserted order address {} for {}", result.id, result.client_name);

        Ok(to_domain(result))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderAddress>, DomainError> {
        let address = OrderAddressEntity::find_by_id(id).one(&self.db).await?;

        Ok(address.map(to_domain))
    }

    async fn find_all(&self) -> Result<Vec<OrderAddress>, DomainError> {
        let addresses = OrderAddressEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(addresses.into_iter().map(to_domain).collect())
    }

    async fn update(&self, address: OrderAddress) -> Result<bool, DomainError> {
        let Some(id) = address.id else {
            return Ok(false);
        };

        let result = OrderAddressEntity::update_many()
            .set(to_active_model(address))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = OrderAddressEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
