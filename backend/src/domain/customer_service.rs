use shared::{Customer, UpdateCustomerRequest};
use tracing::info;

use crate::storage::{CustomerRepository, GatewayError};

/// Service for listing, updating and deleting customers by code.
///
/// Updates and deletes report the number of matched rows but do not treat
/// zero as an error.
#[derive(Clone)]
pub struct CustomerService {
    repository: CustomerRepository,
}

impl CustomerService {
    pub fn new(repository: CustomerRepository) -> Self {
        Self { repository }
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        let customers = self.repository.list_customers().await?;
        info!("Found {} customers", customers.len());
        Ok(customers)
    }

    pub async fn update_customer(
        &self,
        customer_code: &str,
        request: UpdateCustomerRequest,
    ) -> Result<u64, GatewayError> {
        let matched = self.repository.update_customer(customer_code, &request).await?;
        info!("Updated customer {}: {} row(s) matched", customer_code, matched);
        Ok(matched)
    }

    pub async fn delete_customer(&self, customer_code: &str) -> Result<u64, GatewayError> {
        let deleted = self.repository.delete_customer(customer_code).await?;
        info!("Deleted customer {}: {} row(s) removed", customer_code, deleted);
        Ok(deleted)
    }
}
