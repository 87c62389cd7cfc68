//! # Storage Module
//!
//! Everything that talks to the relational database.
//!
//! ## Components
//!
//! - **gateway.rs** - the `Gateway` trait: one parameterized statement per call
//! - **connection.rs** - `DbConnection`, the pooled `sqlx` implementation
//! - **repositories/** - SQL for each resource and row-to-record mapping
//! - **schema.rs** - optional creation of the sample tables
//!
//! The schema itself belongs to the database; this module only issues the
//! statements the REST layer needs.

pub mod connection;
pub mod gateway;
pub mod repositories;
pub mod schema;

#[cfg(test)]
pub mod test_utils;

pub use connection::DbConnection;
pub use gateway::{Gateway, GatewayError, Outcome, Row, Statement, StatementKind};
pub use repositories::{AgentRepository, CatalogRepository, CustomerRepository};
