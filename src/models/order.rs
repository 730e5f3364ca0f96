use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: DateTime,
    pub value: f64,
    pub delivery_value: f64,
    pub table_id: Option<i32>,
    /// `OrderStatus` code: 1 COMPLETE, 2 DOING, 3 CANCELED
    pub order_status: i32,
    /// `OrderType` code: 1 TABLE, 2 DESK, 3 DELIVERY
    pub order_type: i32,
    pub order_address_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dining_table::Entity",
        from = "Column::TableId",
        to = "super::dining_table::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Table,
    #[sea_orm(
        belongs_to = "super::order_address::Entity",
        from = "Column::OrderAddressId",
        to = "super::order_address::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    OrderAddress,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::dining_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Table.def()
    }
}

impl Related<super::order_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderAddress.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
