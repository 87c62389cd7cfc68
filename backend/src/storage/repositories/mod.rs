//! Repositories translate record-level operations into single statements on
//! the [`Gateway`](crate::storage::Gateway).

pub mod agent_repository;
pub mod catalog_repository;
pub mod customer_repository;

pub use agent_repository::AgentRepository;
pub use catalog_repository::CatalogRepository;
pub use customer_repository::CustomerRepository;
