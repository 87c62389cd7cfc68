use shared::{Customer, UpdateCustomerRequest};
use std::sync::Arc;

use crate::storage::gateway::{Gateway, GatewayError, Row, Statement};

/// Repository for the `customer` table
#[derive(Clone)]
pub struct CustomerRepository {
    gateway: Arc<dyn Gateway>,
}

impl CustomerRepository {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// List every customer
    pub async fn list_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        let statement = Statement::query(
            r#"
            SELECT trim(CUST_CODE) AS CUSTOMER_CODE, trim(CUST_NAME) AS CUSTOMER_NAME,
                   trim(CUST_CITY) AS CUSTOMER_CITY, trim(WORKING_AREA) AS WORKING_AREA,
                   trim(CUST_COUNTRY) AS CUSTOMER_COUNTRY, trim(GRADE) AS GRADE,
                   trim(OPENING_AMT) AS OPENING_AMT, trim(RECEIVE_AMT) AS RECEIVE_AMT,
                   trim(PAYMENT_AMT) AS PAYMENT_AMT, trim(OUTSTANDING_AMT) AS OUTSTANDING_AMT,
                   trim(PHONE_NO) AS PHONE_NO, trim(AGENT_CODE) AS AGENT_CODE
            FROM customer
            "#,
        );

        let rows = self.gateway.execute(statement).await?.into_rows();
        Ok(rows.iter().map(customer_from_row).collect())
    }

    /// Update name, city and country of a customer.
    ///
    /// Returns the number of rows the update matched.
    pub async fn update_customer(
        &self,
        customer_code: &str,
        changes: &UpdateCustomerRequest,
    ) -> Result<u64, GatewayError> {
        let statement = Statement::command(
            "UPDATE customer SET CUST_NAME = ?, CUST_CITY = ?, CUST_COUNTRY = ? WHERE CUST_CODE = ?",
        )
        .bind(changes.customer_name.as_str())
        .bind(changes.customer_city.as_str())
        .bind(changes.customer_country.as_str())
        .bind(customer_code);

        let outcome = self.gateway.execute(statement).await?;
        Ok(outcome.affected_rows())
    }

    /// Delete a customer by code, returning the number of rows removed
    pub async fn delete_customer(&self, customer_code: &str) -> Result<u64, GatewayError> {
        let statement =
            Statement::command("DELETE FROM customer WHERE CUST_CODE = ?").bind(customer_code);

        let outcome = self.gateway.execute(statement).await?;
        Ok(outcome.affected_rows())
    }
}

fn customer_from_row(row: &Row) -> Customer {
    Customer {
        customer_code: row.trimmed("CUSTOMER_CODE"),
        customer_name: row.trimmed("CUSTOMER_NAME"),
        customer_city: row.trimmed("CUSTOMER_CITY"),
        working_area: row.trimmed("WORKING_AREA"),
        customer_country: row.trimmed("CUSTOMER_COUNTRY"),
        grade: row.trimmed("GRADE"),
        opening_amt: row.trimmed("OPENING_AMT"),
        receive_amt: row.trimmed("RECEIVE_AMT"),
        payment_amt: row.trimmed("PAYMENT_AMT"),
        outstanding_amt: row.trimmed("OUTSTANDING_AMT"),
        phone_no: row.trimmed("PHONE_NO"),
        agent_code: row.trimmed("AGENT_CODE"),
    }
}
