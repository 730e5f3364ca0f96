//! Domain records
//!
//! Plain data with identity. References to other entities are carried as ids.
//! Fields the store requires but callers may leave out are `Option`, so the
//! repositories can reject them as database errors instead of the type system
//! hiding the case.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, OrderType};

/// A persisted record with a store-assigned (or caller-assigned) id.
pub trait Identifiable: Clone + Send + Sync + 'static {
    type Id: Copy + PartialEq + std::fmt::Display + std::fmt::Debug + Send + Sync + 'static;

    /// Human-readable entity name used in error messages and logs.
    const NAME: &'static str;

    fn id(&self) -> Option<Self::Id>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i32>,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: Option<f64>,
    pub category_id: Option<i32>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category_id: Option<i32>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price: Some(price),
            category_id,
        }
    }
}

/// A dining table. Restaurants number their own tables, so the id may be
/// chosen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: Option<i32>,
    pub name: String,
}

impl Table {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub id: Option<i64>,
    pub client_name: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<i64>,
    pub date: NaiveDateTime,
    pub value: Option<f64>,
    pub delivery_value: Option<f64>,
    pub table_id: Option<i32>,
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub address_id: Option<i64>,
}

impl Order {
    /// New order placed now with no delivery fee and no table or address.
    pub fn new(value: f64, status: OrderStatus, order_type: OrderType) -> Self {
        Self {
            id: None,
            date: chrono::Local::now().naive_local(),
            value: Some(value),
            delivery_value: Some(0.0),
            table_id: None,
            status: Some(status),
            order_type: Some(order_type),
            address_id: None,
        }
    }

    pub fn at_table(mut self, table_id: i32) -> Self {
        self.table_id = Some(table_id);
        self
    }

    pub fn delivered_to(mut self, address_id: i64, delivery_value: f64) -> Self {
        self.address_id = Some(address_id);
        self.delivery_value = Some(delivery_value);
        self
    }

    pub fn placed_at(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub order_id: Option<i64>,
    pub quantity: Option<i32>,
    pub value: Option<f64>,
}

impl OrderItem {
    pub fn new(product_id: i64, order_id: i64, quantity: i32, value: f64) -> Self {
        Self {
            id: None,
            product_id: Some(product_id),
            order_id: Some(order_id),
            quantity: Some(quantity),
            value: Some(value),
        }
    }
}

/// Revenue of completed orders for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDto {
    pub date: NaiveDate,
    pub orders: i64,
    pub total_value: f64,
}

impl Identifiable for Category {
    type Id = i32;
    const NAME: &'static str = "Category";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl Identifiable for Product {
    type Id = i64;
    const NAME: &'static str = "Product";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Identifiable for Table {
    type Id = i32;
    const NAME: &'static str = "Table";

    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl Identifiable for OrderAddress {
    type Id = i64;
    const NAME: &'static str = "OrderAddress";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Identifiable for Order {
    type Id = i64;
    const NAME: &'static str = "Order";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Identifiable for OrderItem {
    type Id = i64;
    const NAME: &'static str = "OrderItem";

    fn id(&self) -> Option<i64> {
        self.id
    }
}
