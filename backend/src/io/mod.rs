//! # IO Module
//!
//! The interface layer between HTTP clients and the domain services.
//!
//! Requests are turned into sanitized, validated records and handed to the
//! services carried in [`AppState`](crate::AppState); service results and
//! failures are turned back into JSON responses with the matching status
//! codes.
//!
//! ## Supported Operations
//!
//! - **GET /api/{agent,customer,company,order,food,student}**: full listings
//! - **POST /api/agent**: add an agent
//! - **PUT /api/agent?agentCode=**: update an agent
//! - **PATCH /api/customerByCustomerCode?customerCode=**: update a customer
//! - **DELETE /api/customerByCustomerCode?customerCode=**: delete a customer
//! - **GET /docs**, **GET /api-docs/openapi.json**: documentation

pub mod rest;
