use shared::{Company, FoodItem, Order, StudentReport};
use std::sync::Arc;

use crate::storage::gateway::{Gateway, GatewayError, Row, Statement};

/// Read-only access to companies, orders, food items and student reports
#[derive(Clone)]
pub struct CatalogRepository {
    gateway: Arc<dyn Gateway>,
}

impl CatalogRepository {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    async fn fetch<T>(&self, sql: &'static str, map: fn(&Row) -> T) -> Result<Vec<T>, GatewayError> {
        let rows = self.gateway.execute(Statement::query(sql)).await?.into_rows();
        Ok(rows.iter().map(map).collect())
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, GatewayError> {
        self.fetch(
            r#"
            SELECT trim(COMPANY_ID) AS COMPANY_ID, trim(COMPANY_NAME) AS COMPANY_NAME,
                   trim(COMPANY_CITY) AS COMPANY_CITY
            FROM company
            "#,
            |row| Company {
                company_id: row.trimmed("COMPANY_ID"),
                company_name: row.trimmed("COMPANY_NAME"),
                company_city: row.trimmed("COMPANY_CITY"),
            },
        )
        .await
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        self.fetch(
            r#"
            SELECT trim(ORD_NUM) AS ORD_NUM, trim(ORD_AMOUNT) AS ORD_AMOUNT,
                   trim(ADVANCE_AMOUNT) AS ADVANCE_AMOUNT, trim(ORD_DATE) AS ORD_DATE,
                   trim(CUST_CODE) AS CUST_CODE, trim(AGENT_CODE) AS AGENT_CODE,
                   trim(ORD_DESCRIPTION) AS ORD_DESCRIPTION
            FROM daysorder
            "#,
            |row| Order {
                ord_num: row.trimmed("ORD_NUM"),
                ord_amount: row.trimmed("ORD_AMOUNT"),
                advance_amount: row.trimmed("ADVANCE_AMOUNT"),
                ord_date: row.trimmed("ORD_DATE"),
                cust_code: row.trimmed("CUST_CODE"),
                agent_code: row.trimmed("AGENT_CODE"),
                ord_description: row.trimmed("ORD_DESCRIPTION"),
            },
        )
        .await
    }

    pub async fn list_food_items(&self) -> Result<Vec<FoodItem>, GatewayError> {
        self.fetch(
            r#"
            SELECT trim(ITEM_ID) AS ITEM_ID, trim(ITEM_NAME) AS ITEM_NAME,
                   trim(ITEM_UNIT) AS ITEM_UNIT, trim(COMPANY_ID) AS COMPANY_ID
            FROM foods
            "#,
            |row| FoodItem {
                item_id: row.trimmed("ITEM_ID"),
                item_name: row.trimmed("ITEM_NAME"),
                item_unit: row.trimmed("ITEM_UNIT"),
                company_id: row.trimmed("COMPANY_ID"),
            },
        )
        .await
    }

    /// Students joined with their report on roll id; students without a
    /// report are left out
    pub async fn list_student_reports(&self) -> Result<Vec<StudentReport>, GatewayError> {
        self.fetch(
            r#"
            SELECT trim(a.NAME) AS NAME, trim(a.TITLE) AS TITLE, trim(a.CLASS) AS CLASS,
                   trim(a.SECTION) AS SECTION, trim(a.ROLLID) AS ROLL_ID, trim(b.GRADE) AS GRADE,
                   trim(b.SEMISTER) AS SEMESTER, trim(b.CLASS_ATTENDED) AS CLASS_ATTENDED
            FROM student a, studentreport b
            WHERE trim(a.ROLLID) = trim(b.ROLLID)
            "#,
            |row| StudentReport {
                name: row.trimmed("NAME"),
                title: row.trimmed("TITLE"),
                class: row.trimmed("CLASS"),
                section: row.trimmed("SECTION"),
                roll_id: row.trimmed("ROLL_ID"),
                grade: row.trimmed("GRADE"),
                semester: row.trimmed("SEMESTER"),
                class_attended: row.trimmed("CLASS_ATTENDED"),
            },
        )
        .await
    }
}
