//! # Domain Module
//!
//! Input normalization and the per-resource services the REST layer calls.
//!
//! - **sanitizer** - trims/escapes text fields, coerces flags
//! - **validation** - declarative field rules and the generic validator
//! - **agent_service**, **customer_service**, **catalog_service** - one
//!   statement per operation through the storage repositories

pub mod agent_service;
pub mod catalog_service;
pub mod customer_service;
pub mod sanitizer;
pub mod validation;

pub use agent_service::{AgentService, AgentUpdate};
pub use catalog_service::CatalogService;
pub use customer_service::CustomerService;
