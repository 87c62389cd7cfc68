use shared::{Company, FoodItem, Order, StudentReport};
use tracing::info;

use crate::storage::{CatalogRepository, GatewayError};

/// Read-only listings for companies, orders, food items and student reports
#[derive(Clone)]
pub struct CatalogService {
    repository: CatalogRepository,
}

impl CatalogService {
    pub fn new(repository: CatalogRepository) -> Self {
        Self { repository }
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, GatewayError> {
        let companies = self.repository.list_companies().await?;
        info!("Found {} companies", companies.len());
        Ok(companies)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        let orders = self.repository.list_orders().await?;
        info!("Found {} orders", orders.len());
        Ok(orders)
    }

    pub async fn list_food_items(&self) -> Result<Vec<FoodItem>, GatewayError> {
        let foods = self.repository.list_food_items().await?;
        info!("Found {} food items", foods.len());
        Ok(foods)
    }

    pub async fn list_student_reports(&self) -> Result<Vec<StudentReport>, GatewayError> {
        let reports = self.repository.list_student_reports().await?;
        info!("Found {} student reports", reports.len());
        Ok(reports)
    }
}
