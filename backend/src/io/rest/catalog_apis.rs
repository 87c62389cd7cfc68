//! # REST API for read-only listings
//!
//! Companies, orders, food items and student reports. Each endpoint returns
//! every row with string fields trimmed.

use axum::{extract::State, routing::get, Json, Router};
use shared::{Company, FoodItem, Order, StudentReport};
use tracing::info;

use crate::io::rest::errors::ApiError;
use crate::AppState;

/// Create a router for the listing APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/company", get(list_companies))
        .route("/order", get(list_orders))
        .route("/food", get(list_food_items))
        .route("/student", get(list_student_reports))
}

/// Get all companies
#[utoipa::path(
    get,
    path = "/api/company",
    tag = "companies",
    responses(
        (status = 200, description = "Successful operation", body = [Company]),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    info!("GET /api/company");
    Ok(Json(state.catalog_service.list_companies().await?))
}

/// Get all orders
#[utoipa::path(
    get,
    path = "/api/order",
    tag = "orders",
    responses(
        (status = 200, description = "Successful operation", body = [Order]),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    info!("GET /api/order");
    Ok(Json(state.catalog_service.list_orders().await?))
}

/// Get all food items
#[utoipa::path(
    get,
    path = "/api/food",
    tag = "foods",
    responses(
        (status = 200, description = "Successful operation", body = [FoodItem]),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn list_food_items(State(state): State<AppState>) -> Result<Json<Vec<FoodItem>>, ApiError> {
    info!("GET /api/food");
    Ok(Json(state.catalog_service.list_food_items().await?))
}

/// Get every student that has a report, joined with the report
#[utoipa::path(
    get,
    path = "/api/student",
    tag = "students",
    responses(
        (status = 200, description = "Successful operation", body = [StudentReport]),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn list_student_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentReport>>, ApiError> {
    info!("GET /api/student");
    Ok(Json(state.catalog_service.list_student_reports().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::RecordingGateway;
    use crate::storage::DbConnection;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn setup_test_app() -> Router {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        router().with_state(AppState::from_gateway(Arc::new(db)))
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn assert_all_trimmed(records: &Value) {
        for record in records.as_array().unwrap() {
            for (key, value) in record.as_object().unwrap() {
                if let Some(s) = value.as_str() {
                    assert_eq!(s, s.trim(), "{} should be trimmed", key);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_every_listing_is_trimmed() {
        let app = setup_test_app().await;

        for uri in ["/company", "/order", "/food", "/student"] {
            let (status, records) = get_json(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(!records.as_array().unwrap().is_empty(), "{}", uri);
            assert_all_trimmed(&records);
        }
    }

    #[tokio::test]
    async fn test_list_orders() {
        let app = setup_test_app().await;

        let (_, orders) = get_json(&app, "/order").await;
        let first = orders
            .as_array()
            .unwrap()
            .iter()
            .find(|o| o["ORD_NUM"] == "200100")
            .unwrap();
        assert_eq!(first["ORD_DATE"], "08/01/2008");
        assert_eq!(first["AGENT_CODE"], "A003");
        assert_eq!(first["ORD_DESCRIPTION"], "SOD");
    }

    #[tokio::test]
    async fn test_list_food_items() {
        let app = setup_test_app().await;

        let (_, foods) = get_json(&app, "/food").await;
        let foods = foods.as_array().unwrap();
        assert_eq!(foods.len(), 2);
        assert!(foods.iter().any(|f| f["ITEM_NAME"] == "Chex Mix" && f["ITEM_UNIT"] == "Pcs"));
    }

    #[tokio::test]
    async fn test_null_columns_are_listed_as_null() {
        let app = setup_test_app().await;

        let (status, foods) = get_json(&app, "/food").await;
        assert_eq!(status, StatusCode::OK);
        let cheez = foods
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["ITEM_ID"] == "6")
            .unwrap();
        assert_eq!(cheez["ITEM_NAME"], "Cheez-It");
        assert!(cheez["ITEM_UNIT"].is_null());
        assert!(cheez["COMPANY_ID"].is_null());
    }

    #[tokio::test]
    async fn test_student_listing_joins_reports() {
        let app = setup_test_app().await;

        let (_, students) = get_json(&app, "/student").await;
        let students = students.as_array().unwrap();

        // The student without a report is not listed
        assert_eq!(students.len(), 2);
        let ann = students.iter().find(|s| s["NAME"] == "Ann").unwrap();
        assert_eq!(ann["TITLE"], "Miss");
        assert_eq!(ann["SEMESTER"], "1st");
        assert_eq!(ann["CLASS_ATTENDED"], "90");
    }

    #[tokio::test]
    async fn test_listing_database_failure_is_server_error() {
        let app = router().with_state(AppState::from_gateway(Arc::new(RecordingGateway::failing())));

        for uri in ["/company", "/order", "/food", "/student"] {
            let (status, body) = get_json(&app, uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
            assert_eq!(body["error"], "Internal server error");
        }
    }
}
