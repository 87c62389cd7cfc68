//! # Sample Records API Backend
//!
//! An HTTP service exposing the tables of a relational `sample` database
//! (agents, customers, companies, orders, food items and student reports)
//! as JSON.
//!
//! ## Architecture
//!
//! ```text
//! HTTP client
//!     ↓
//! IO Layer (REST routers, sanitize + validate, error mapping)
//!     ↓
//! Domain Layer (per-resource services)
//!     ↓
//! Storage Layer (repositories over the Gateway trait, sqlx pool)
//! ```
//!
//! The storage layer is reached only through the [`Gateway`] trait, so tests
//! can swap the pooled database for an in-memory one or a recording fake.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::{AgentService, CatalogService, CustomerService};
use crate::storage::{AgentRepository, CatalogRepository, CustomerRepository, DbConnection, Gateway};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub agent_service: AgentService,
    pub customer_service: CustomerService,
    pub catalog_service: CatalogService,
}

impl AppState {
    /// Build every service on top of one shared gateway
    pub fn from_gateway(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            agent_service: AgentService::new(AgentRepository::new(gateway.clone())),
            customer_service: CustomerService::new(CustomerRepository::new(gateway.clone())),
            catalog_service: CatalogService::new(CatalogRepository::new(gateway)),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::init(config).await?;

    info!("Setting up application state");
    Ok(AppState::from_gateway(Arc::new(db_conn)))
}

/// Create the Axum router with all routes configured.
///
/// `cors_origin` restricts cross-origin requests to one origin; without it
/// any origin is allowed.
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let cors = match cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{}'", origin))?;
            cors.allow_origin(origin)
        }
        None => cors.allow_origin(Any),
    };

    let router = Router::new()
        .nest("/api", io::rest::api_router())
        .merge(io::rest::docs_apis::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    Ok(router)
}
