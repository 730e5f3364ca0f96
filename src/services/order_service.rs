//! Order Service - CRUD plus pending-order and revenue queries

use std::ops::Deref;
use std::sync::Arc;

use chrono::NaiveDate;

use super::CrudService;
use crate::domain::{DomainError, Order, OrderRepository, OrderStatus, ReportDto};

#[derive(Clone)]
pub struct OrderService {
    crud: CrudService<dyn OrderRepository>,
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self {
            crud: CrudService::new(Arc::clone(&repo)),
            repo,
        }
    }

    /// Unlike `find_all`, an empty result is not an error here.
    pub async fn find_pending_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.find_pending_orders().await
    }

    pub async fn report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ReportDto>, DomainError> {
        self.repo.report(start, end).await
    }

    /// Moves an order to the status with the given code. Any valid code is
    /// accepted from any current status.
    pub async fn update_status(&self, id: i64, status_code: i32) -> Result<Order, DomainError> {
        let status = OrderStatus::from_code(status_code)?;
        let mut order = self.crud.find_by_id(id).await?;

        if order.status == Some(status) {
            return Ok(order);
        }

        tracing::info!(
            "Order {} status {} -> {}",
            id,
            order
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "NONE".to_string()),
            status
        );

        order.status = Some(status);
        if !self.repo.update(order.clone()).await? {
            return Err(DomainError::not_found("Order", id));
        }

        Ok(order)
    }
}

// find_by_id, find_all, insert, update and delete_by_id come from the CRUD layer
impl Deref for OrderService {
    type Target = CrudService<dyn OrderRepository>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}
