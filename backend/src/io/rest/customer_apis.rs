//! # REST API for Customers
//!
//! Customers are listed in full and changed one at a time by
//! `customerCode`. The code comes from the query string and is checked
//! before anything else, so a request without one never reaches the
//! database.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use shared::{Customer, MessageResponse, UpdateCustomerRequest};
use std::collections::HashMap;
use tracing::info;

use crate::domain::sanitizer::FieldSanitizer;
use crate::domain::validation::{FieldRule, Rule};
use crate::io::rest::errors::ApiError;
use crate::io::rest::input::{prepare_body, required_param, RecordBody};
use crate::AppState;

const CUSTOMER_CODE_REQUIRED: &str = "Customer Code is required";

const CUSTOMER_SANITIZERS: &[FieldSanitizer] = &[
    FieldSanitizer::text("customerCode"),
    FieldSanitizer::text("customerName"),
    FieldSanitizer::text("customerCity"),
    FieldSanitizer::text("workingArea"),
    FieldSanitizer::text("customerCountry"),
    FieldSanitizer::text("grade"),
    FieldSanitizer::text("agentCode"),
    FieldSanitizer::flag("completed"),
];

const UPDATE_CUSTOMER_RULES: &[FieldRule] = &[
    FieldRule::body("customerName", Rule::RequiredString),
    FieldRule::body("customerCity", Rule::RequiredString),
    FieldRule::body("customerCountry", Rule::RequiredString),
];

/// Create a router for customer related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer", get(list_customers))
        .route(
            "/customerByCustomerCode",
            axum::routing::patch(update_customer).delete(delete_customer),
        )
}

/// Get all customers
#[utoipa::path(
    get,
    path = "/api/customer",
    tag = "customers",
    responses(
        (status = 200, description = "Successful operation", body = [Customer]),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    info!("GET /api/customer");
    let customers = state.customer_service.list_customers().await?;
    Ok(Json(customers))
}

/// Update a customer's name, city and country
#[utoipa::path(
    patch,
    path = "/api/customerByCustomerCode",
    tag = "customers",
    params(
        ("customerCode" = String, Query, description = "Code of the customer to update")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated successfully", body = MessageResponse),
        (status = 400, description = "Missing customer code or invalid input", body = shared::ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: RecordBody,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("PATCH /api/customerByCustomerCode - query: {:?}", params);

    let customer_code = required_param(params, "customerCode", CUSTOMER_CODE_REQUIRED)?;
    let request: UpdateCustomerRequest = prepare_body(body, CUSTOMER_SANITIZERS, UPDATE_CUSTOMER_RULES)?;

    state.customer_service.update_customer(&customer_code, request).await?;
    Ok(Json(MessageResponse::new("Customer updated successfully")))
}

/// Delete a customer by code
#[utoipa::path(
    delete,
    path = "/api/customerByCustomerCode",
    tag = "customers",
    params(
        ("customerCode" = String, Query, description = "Code of the customer to delete")
    ),
    responses(
        (status = 200, description = "Customer deleted successfully", body = MessageResponse),
        (status = 400, description = "Missing customer code", body = shared::ErrorResponse),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /api/customerByCustomerCode - query: {:?}", params);

    let customer_code = required_param(params, "customerCode", CUSTOMER_CODE_REQUIRED)?;
    state.customer_service.delete_customer(&customer_code).await?;

    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}
