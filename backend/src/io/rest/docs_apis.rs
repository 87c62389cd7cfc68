//! # Service documentation
//!
//! The welcome route, the generated OpenAPI document and a Swagger UI page
//! that renders it. These routes live outside `/api`.

use axum::{response::Html, routing::get, Json, Router};
use shared::{
    Agent, Company, CreateAgentRequest, Customer, ErrorResponse, FieldLocation, FieldViolation, FoodItem,
    MessageResponse, Order, StudentReport, UpdateAgentRequest, UpdateCustomerRequest, ValidationErrorResponse,
};
use utoipa::OpenApi;

use crate::io::rest::{agent_apis, catalog_apis, customer_apis};
use crate::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample Records API",
        version = "3.0.0",
        description = "CRUD access to the agents, customers, companies, orders, foods and students sample tables"
    ),
    paths(
        agent_apis::list_agents,
        agent_apis::create_agent,
        agent_apis::update_agent,
        customer_apis::list_customers,
        customer_apis::update_customer,
        customer_apis::delete_customer,
        catalog_apis::list_companies,
        catalog_apis::list_orders,
        catalog_apis::list_food_items,
        catalog_apis::list_student_reports,
    ),
    components(schemas(
        Agent,
        Company,
        Customer,
        Order,
        FoodItem,
        StudentReport,
        CreateAgentRequest,
        UpdateAgentRequest,
        UpdateCustomerRequest,
        MessageResponse,
        ErrorResponse,
        FieldLocation,
        FieldViolation,
        ValidationErrorResponse,
    )),
    tags(
        (name = "agents", description = "Sales agents"),
        (name = "customers", description = "Customers served by agents"),
        (name = "companies", description = "Food companies"),
        (name = "orders", description = "Orders of the day"),
        (name = "foods", description = "Food items"),
        (name = "students", description = "Students and their report cards"),
    )
)]
pub struct ApiDoc;

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Sample Records API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Create a router for the documentation routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route(OPENAPI_PATH, get(openapi_document))
        .route("/docs", get(swagger_page))
}

async fn welcome() -> &'static str {
    "Welcome to the Sample Records API. Documentation is served at /docs."
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_page() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}
