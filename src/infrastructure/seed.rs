use chrono::{Days, Local};

use crate::domain::{
    Category, DomainError, Identifiable, Order, OrderAddress, OrderItem,
    OrderStatus, OrderType, Product, Table,
};
use crate::infrastructure::AppState;

fn assigned_id<T: Identifiable>(entity: &T) -> Result<T::Id, DomainError> {
    entity.id().ok_or_else(|| {
        DomainError::Database(format!("seeded {} was not assigned an id", T::NAME))
    })
}

/// Fills an empty store with a small menu, two tables and a few orders.
/// Returns `false` without touching anything when categories already exist.
pub async fn seed_demo_data(state: &AppState) -> Result<bool, DomainError> {
    if !state.category_repo.find_all().await?.is_empty() {
        tracing::info!("Store already has categories, skipping demo seed");
        return Ok(false);
    }

    // 1. Menu
    let food = state.category_repo.insert(Category::new("Food")).await?;
    let drink = state.category_repo.insert(Category::new("Drink")).await?;
    let (food, drink) = (assigned_id(&food)?, assigned_id(&drink)?);

    let products = state
        .product_repo
        .insert_all(vec![
            Product::new("Feijoada", 25.0, Some(food)),
            Product::new("Baiao de 2", 22.0, Some(food)),
            Product::new("Beer", 9.5, Some(drink)),
        ])
        .await?;

    // 2. Tables
    state
        .table_repo
        .insert_all(vec![Table::new(1, "Table 1"), Table::new(2, "Table 2")])
        .await?;

    // 3. Orders
    let address = state
        .order_address_repo
        .insert(OrderAddress {
            id: None,
            client_name: "Client A".to_owned(),
            street: "Rua A".to_owned(),
            number: "123".to_owned(),
            district: "Centro".to_owned(),
            city: "Sao Paulo".to_owned(),
            state: "Sao Paulo".to_owned(),
        })
        .await?;

    let now = Local::now().naive_local();
    let yesterday = now.checked_sub_days(Days::new(1)).unwrap_or(now);

    let orders = state
        .order_repo
        .insert_all(vec![
            Order::new(56.5, OrderStatus::Complete, OrderType::Table)
                .at_table(1)
                .placed_at(yesterday),
            Order::new(25.0, OrderStatus::Doing, OrderType::Desk),
            Order::new(47.0, OrderStatus::Doing, OrderType::Delivery)
                .delivered_to(assigned_id(&address)?, 5.0),
        ])
        .await?;

    // 4. One line per product on the first order
    if let Some(first_order) = orders.first() {
        let order_id = assigned_id(first_order)?;
        let mut items = Vec::with_capacity(products.len());
        for product in &products {
            items.push(OrderItem::new(
                assigned_id(product)?,
                order_id,
                1,
                product.price.unwrap_or_default(),
            ));
        }
        state.order_item_repo.insert_all(items).await?;
    }

    tracing::info!(
        "Seeded {} products and {} orders",
        products.len(),
        orders.len()
    );

    Ok(true)
}
