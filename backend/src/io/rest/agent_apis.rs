//! # REST API for Agents
//!
//! `GET`, `POST` and `PUT` on `/api/agent`.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use shared::{Agent, CreateAgentRequest, MessageResponse, UpdateAgentRequest};
use std::collections::HashMap;
use tracing::info;

use crate::domain::sanitizer::FieldSanitizer;
use crate::domain::validation::{FieldRule, Rule};
use crate::domain::AgentUpdate;
use crate::io::rest::errors::ApiError;
use crate::io::rest::input::{prepare_body, required_param, RecordBody};
use crate::AppState;

const AGENT_SANITIZERS: &[FieldSanitizer] = &[
    FieldSanitizer::text("agentCode"),
    FieldSanitizer::text("agentName"),
    FieldSanitizer::text("workingArea"),
    FieldSanitizer::text("commission"),
    FieldSanitizer::text("phoneNo"),
    FieldSanitizer::text("country"),
];

const CREATE_AGENT_RULES: &[FieldRule] = &[
    FieldRule::body("agentCode", Rule::RequiredString),
    FieldRule::body("agentName", Rule::RequiredString),
    FieldRule::body("workingArea", Rule::RequiredString),
    FieldRule::body("commission", Rule::RequiredString),
    FieldRule::body("phoneNo", Rule::RequiredString),
    FieldRule::body("country", Rule::RequiredString),
];

const UPDATE_AGENT_RULES: &[FieldRule] = &[
    FieldRule::body("agentName", Rule::NonEmptyWhenPresent),
    FieldRule::body("workingArea", Rule::NonEmptyWhenPresent),
    FieldRule::body("commission", Rule::NonEmptyWhenPresent),
    FieldRule::body("phoneNo", Rule::NonEmptyWhenPresent),
    FieldRule::body("country", Rule::NonEmptyWhenPresent),
];

/// Create a router for agent related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/agent", get(list_agents).post(create_agent).put(update_agent))
        .route("/agent/", axum::routing::put(update_agent))
}

/// Get all agents
#[utoipa::path(
    get,
    path = "/api/agent",
    tag = "agents",
    responses(
        (status = 200, description = "Successful operation", body = [Agent]),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn list_agents(State(state): State<AppState>) -> Result<Json<Vec<Agent>>, ApiError> {
    info!("GET /api/agent");
    let agents = state.agent_service.list_agents().await?;
    Ok(Json(agents))
}

/// Add a new agent
#[utoipa::path(
    post,
    path = "/api/agent",
    tag = "agents",
    request_body = CreateAgentRequest,
    responses(
        (status = 200, description = "Agent added successfully", body = MessageResponse),
        (status = 400, description = "Bad request, validation failed", body = shared::ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn create_agent(
    State(state): State<AppState>,
    body: RecordBody,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("POST /api/agent");

    let request: CreateAgentRequest = prepare_body(body, AGENT_SANITIZERS, CREATE_AGENT_RULES)?;
    state.agent_service.create_agent(request).await?;

    Ok(Json(MessageResponse::new("Agent added successfully")))
}

/// Update an agent by code; omitted fields keep their value
#[utoipa::path(
    put,
    path = "/api/agent",
    tag = "agents",
    params(
        ("agentCode" = String, Query, description = "Agent code of the agent to update")
    ),
    request_body = UpdateAgentRequest,
    responses(
        (status = 200, description = "Agent updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid input", body = shared::ErrorResponse),
        (status = 404, description = "Agent not found", body = shared::ErrorResponse),
        (status = 500, description = "Internal server error", body = shared::ErrorResponse)
    )
)]
pub async fn update_agent(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: RecordBody,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("PUT /api/agent - query: {:?}", params);

    let agent_code = required_param(params, "agentCode", "Agent Code is required")?;
    let request: UpdateAgentRequest = prepare_body(body, AGENT_SANITIZERS, UPDATE_AGENT_RULES)?;

    match state.agent_service.update_agent(&agent_code, request).await? {
        AgentUpdate::Updated => Ok(Json(MessageResponse::new("Agent updated successfully"))),
        AgentUpdate::NotFound => Err(ApiError::NotFound("Agent not found")),
    }
}
