//! # REST API Interface Layer
//!
//! One `*_apis` module per resource, each exposing a `router()` that is
//! nested under `/api`. Documentation routes are merged at the root.
//!
//! ## Request flow
//!
//! 1. Required query parameters are checked first (`input::required_param`)
//! 2. The body is sanitized, then validated against the endpoint's rules
//! 3. The service issues a single statement
//! 4. [`ApiError`] maps any failure to a status code and JSON body

pub mod agent_apis;
pub mod catalog_apis;
pub mod customer_apis;
pub mod docs_apis;
pub mod errors;
pub mod input;

pub use docs_apis::ApiDoc;
pub use errors::ApiError;

use axum::Router;

use crate::AppState;

/// All resource routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(agent_apis::router())
        .merge(customer_apis::router())
        .merge(catalog_apis::router())
}
