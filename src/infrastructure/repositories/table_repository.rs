//! SeaORM implementation of the Table repository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{CrudRepository, DomainError, Table};
use crate::models::dining_table::{ActiveModel, Column, Entity as TableEntity, Model};

/// SeaORM-based implementation of the Table repository
pub struct SeaOrmTableRepository {
    db: DatabaseConnection,
}

impl SeaOrmTableRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: Model) -> Table {
    Table {
        id: Some(model.id),
        name: model.name,
    }
}

#[async_trait]
impl CrudRepository for SeaOrmTableRepository {
    type Entity = Table;

    async fn insert(&self, table: Table) -> Result<Table, DomainError> {
        // Table numbers are kept when given; otherwise the store picks one
        let id: ActiveValue<i32> = match table.id {
            Some(id) if id <= 0 => {
                return Err(DomainError::Database(format!(
                    "table number must be positive, got {}",
                    id
                )));
            }
            Some(id) => Set(id),
            None => NotSet,
        };

        let new_table = ActiveModel {
            id,
            name: Set(table.name),
        };

        let result = new_table.insert(&self.db).await?;
        tracing::debug!("Inserted table {} ({})", result.id, result.name);

        Ok(to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Table>, DomainError> {
        let table = TableEntity::find_by_id(id).one(&self.db).await?;

        Ok(table.map(to_domain))
    }

    async fn find_all(&self) -> Result<Vec<Table>, DomainError> {
        let tables = TableEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(tables.into_iter().map(to_domain).collect())
    }

    async fn update(&self, table: Table) -> Result<bool, DomainError> {
        let Some(id) = table.id else {
            return Ok(false);
        };

        let result = TableEntity::update_many()
            .set(ActiveModel {
                id: NotSet,
                name: Set(table.name),
            })
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DomainError> {
        let result = TableEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
