//! Category, Product, Table and OrderAddress repository tests

use bezerras::db;
use bezerras::domain::{Category, DomainError, OrderAddress, Product, Table};
use bezerras::infrastructure::AppState;

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

#[tokio::test]
async fn test_category_crud() {
    let state = setup_test_state().await;

    let mut food = state.category_repo.insert(Category::new("Food")).await.unwrap();
    assert!(food.id.unwrap() > 0);

    food.name = "Meals".to_string();
    assert!(state.category_repo.update(food.clone()).await.unwrap());
    let stored = state.category_repo.find_by_id(food.id.unwrap()).await.unwrap();
    assert_eq!(stored, Some(food.clone()));

    assert!(state.category_repo.delete_by_id(food.id.unwrap()).await.unwrap());
    assert!(state.category_repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_category_name_required() {
    let state = setup_test_state().await;

    let result = state.category_repo.insert(Category::new("  ")).await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}

#[tokio::test]
async fn test_category_update_without_id_returns_false() {
    let state = setup_test_state().await;

    assert!(!state.category_repo.update(Category::new("Food")).await.unwrap());
}

#[tokio::test]
async fn test_product_requires_existing_category() {
    let state = setup_test_state().await;

    let result = state
        .product_repo
        .insert(Product::new("Feijoada", 25.0, None))
        .await;
    assert!(matches!(result, Err(DomainError::Database(_))));

    let result = state
        .product_repo
        .insert(Product::new("Feijoada", 25.0, Some(77)))
        .await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}

#[tokio::test]
async fn test_product_insert_all_and_update() {
    let state = setup_test_state().await;
    let categories = state
        .category_repo
        .insert_all(vec![Category::new("Food"), Category::new("Drink")])
        .await
        .unwrap();
    let (food, drink) = (categories[0].id, categories[1].id);

    let products = state
        .product_repo
        .insert_all(vec![
            Product::new("Feijoada", 25.0, food),
            Product::new("Beer", 25.0, drink),
            Product::new("Baiao de 2", 25.0, food),
        ])
        .await
        .unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p.id.unwrap() > 0));

    let mut beer = products[1].clone();
    beer.price = Some(9.5);
    assert!(state.product_repo.update(beer.clone()).await.unwrap());
    let stored = state
        .product_repo
        .find_by_id(beer.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.price, Some(9.5));

    beer.price = None;
    let result = state.product_repo.update(beer).await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}

#[tokio::test]
async fn test_insert_all_stops_at_first_failure() {
    let state = setup_test_state().await;

    let result = state
        .category_repo
        .insert_all(vec![Category::new("Food"), Category::new(""), Category::new("Drink")])
        .await;
    assert!(matches!(result, Err(DomainError::Database(_))));

    let stored = state.category_repo.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Food");
}

#[tokio::test]
async fn test_table_keeps_given_number() {
    let state = setup_test_state().await;

    let table = state.table_repo.insert(Table::new(7, "Table 7")).await.unwrap();
    assert_eq!(table.id, Some(7));

    let generated = state
        .table_repo
        .insert(Table {
            id: None,
            name: "Terrace".to_string(),
        })
        .await
        .unwrap();
    assert!(generated.id.unwrap() > 0);

    // same number twice
    let result = state.table_repo.insert(Table::new(7, "Again")).await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}

#[tokio::test]
async fn test_table_number_must_be_positive() {
    let state = setup_test_state().await;

    for number in [0, -5] {
        let result = state.table_repo.insert(Table::new(number, "Nowhere")).await;
        assert!(matches!(result, Err(DomainError::Database(_))));
    }
    assert!(state.table_repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_table_update_and_delete() {
    let state = setup_test_state().await;
    state.table_repo.insert(Table::new(1, "Table 1")).await.unwrap();

    assert!(state.table_repo.update(Table::new(1, "Window")).await.unwrap());
    assert!(!state.table_repo.update(Table::new(2, "Missing")).await.unwrap());
    assert_eq!(
        state.table_repo.find_by_id(1).await.unwrap().map(|t| t.name),
        Some("Window".to_string())
    );

    assert!(state.table_repo.delete_by_id(1).await.unwrap());
    assert!(!state.table_repo.delete_by_id(1).await.unwrap());
}

#[tokio::test]
async fn test_order_address_crud() {
    let state = setup_test_state().await;

    let mut address = state
        .order_address_repo
        .insert(OrderAddress {
            id: None,
            client_name: "Client B".to_string(),
            street: "Rua B".to_string(),
            number: "123".to_string(),
            district: "Centro".to_string(),
            city: "Sao Paulo".to_string(),
            state: "Sao Paulo".to_string(),
        })
        .await
        .unwrap();
    assert!(address.id.unwrap() > 0);

    address.number = "456".to_string();
    assert!(state.order_address_repo.update(address.clone()).await.unwrap());
    assert_eq!(state.order_address_repo.find_all().await.unwrap(), vec![address.clone()]);

    assert!(state.order_address_repo.delete_by_id(address.id.unwrap()).await.unwrap());
}
