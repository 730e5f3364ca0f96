//! OrderService and demo seed tests against an in-memory SQLite store

use std::sync::Arc;

use async_trait::async_trait;
use bezerras::db;
use bezerras::domain::{
    CrudRepository, DomainError, Order, OrderRepository, OrderStatus, OrderType, ReportDto,
};
use bezerras::infrastructure::AppState;
use bezerras::seed;
use bezerras::services::OrderService;
use chrono::{Days, Local, NaiveDate};

async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

async fn insert_desk_order(state: &AppState, status: OrderStatus) -> i64 {
    state
        .order_service()
        .insert(Order::new(20.0, status, OrderType::Desk))
        .await
        .expect("Failed to insert order")
        .id
        .unwrap()
}

#[tokio::test]
async fn test_update_status_moves_order() {
    let state = setup_test_state().await;
    let service = state.order_service();
    let id = insert_desk_order(&state, OrderStatus::Doing).await;

    let order = service.update_status(id, 1).await.unwrap();
    assert_eq!(order.status, Some(OrderStatus::Complete));

    let stored = service.find_by_id(id).await.unwrap();
    assert_eq!(stored.status, Some(OrderStatus::Complete));

    // terminal statuses are not locked
    let order = service.update_status(id, 2).await.unwrap();
    assert_eq!(order.status, Some(OrderStatus::Doing));
}

#[tokio::test]
async fn test_update_status_rejects_bad_codes() {
    let state = setup_test_state().await;
    let service = state.order_service();
    let id = insert_desk_order(&state, OrderStatus::Doing).await;

    for code in [0, -1, 4] {
        let result = service.update_status(id, code).await;
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    let stored = service.find_by_id(id).await.unwrap();
    assert_eq!(stored.status, Some(OrderStatus::Doing));
}

#[tokio::test]
async fn test_update_status_missing_order_is_not_found() {
    let state = setup_test_state().await;

    let result = state.order_service().update_status(999, 1).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_pending_and_report_are_not_errors_when_empty() {
    let state = setup_test_state().await;
    let service = state.order_service();

    assert!(service.find_pending_orders().await.unwrap().is_empty());

    let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    assert!(service.report(day, day).await.unwrap().is_empty());

    // the CRUD listing treats the same empty table as missing
    assert!(matches!(
        service.find_all().await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_service_delete_checks_existence() {
    let state = setup_test_state().await;
    let service = state.order_service();

    assert!(matches!(
        service.delete_by_id(999).await,
        Err(DomainError::NotFound(_))
    ));

    let id = insert_desk_order(&state, OrderStatus::Canceled).await;
    assert!(service.delete_by_id(id).await.unwrap());
}

#[tokio::test]
async fn test_seed_demo_data_runs_once() {
    let state = setup_test_state().await;

    assert!(seed::seed_demo_data(&state).await.unwrap());
    assert!(!seed::seed_demo_data(&state).await.unwrap());

    assert_eq!(state.category_service().find_all().await.unwrap().len(), 2);
    assert_eq!(state.product_service().find_all().await.unwrap().len(), 3);
    assert_eq!(state.table_service().find_all().await.unwrap().len(), 2);
    assert_eq!(state.order_item_service().find_all().await.unwrap().len(), 3);

    let orders = state.order_service();
    assert_eq!(orders.find_all().await.unwrap().len(), 3);
    assert_eq!(orders.find_pending_orders().await.unwrap().len(), 2);

    let today = Local::now().date_naive();
    let week_ago = today.checked_sub_days(Days::new(7)).unwrap();
    let report = orders.report(week_ago, today).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].orders, 1);
    assert_eq!(report[0].total_value, 56.5);
}

/// Finds order 1 but loses it before any write lands
struct VanishingOrderRepository;

#[async_trait]
impl CrudRepository for VanishingOrderRepository {
    type Entity = Order;

    async fn insert(&self, order: Order) -> Result<Order, DomainError> {
        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok((id == 1).then(|| Order {
            id: Some(1),
            ..Order::new(20.0, OrderStatus::Doing, OrderType::Desk)
        }))
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(Vec::new())
    }

    async fn update(&self, _order: Order) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, DomainError> {
        Ok(false)
    }
}

#[async_trait]
impl OrderRepository for VanishingOrderRepository {
    async fn find_pending_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(Vec::new())
    }

    async fn report(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<ReportDto>, DomainError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_update_status_on_vanished_order_is_not_found() {
    let service = OrderService::new(Arc::new(VanishingOrderRepository));

    let result = service.update_status(1, 1).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}
