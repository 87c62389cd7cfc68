use shared::{Agent, CreateAgentRequest, UpdateAgentRequest};
use tracing::{info, warn};

use crate::storage::{AgentRepository, GatewayError};

/// Result of updating an agent by code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentUpdate {
    Updated,
    NotFound,
}

/// Service for listing, adding and updating agents
#[derive(Clone)]
pub struct AgentService {
    repository: AgentRepository,
}

impl AgentService {
    pub fn new(repository: AgentRepository) -> Self {
        Self { repository }
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>, GatewayError> {
        let agents = self.repository.list_agents().await?;
        info!("Found {} agents", agents.len());
        Ok(agents)
    }

    pub async fn create_agent(&self, request: CreateAgentRequest) -> Result<(), GatewayError> {
        info!("Creating agent: code={}", request.agent_code);
        self.repository.store_agent(&request).await
    }

    /// Update an agent, reporting `NotFound` when no row matched the code
    pub async fn update_agent(
        &self,
        agent_code: &str,
        request: UpdateAgentRequest,
    ) -> Result<AgentUpdate, GatewayError> {
        info!("Updating agent: code={}", agent_code);

        let matched = self.repository.update_agent(agent_code, &request).await?;
        if matched == 0 {
            warn!("Agent not found: {}", agent_code);
            return Ok(AgentUpdate::NotFound);
        }

        Ok(AgentUpdate::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use std::sync::Arc;

    async fn create_test_service() -> AgentService {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        AgentService::new(AgentRepository::new(Arc::new(db)))
    }

    #[tokio::test]
    async fn test_update_existing_agent() {
        let service = create_test_service().await;

        let request = UpdateAgentRequest {
            working_area: Some("Chennai".to_string()),
            ..Default::default()
        };
        let result = service.update_agent("A007", request).await.unwrap();
        assert_eq!(result, AgentUpdate::Updated);
    }

    #[tokio::test]
    async fn test_update_missing_agent_is_not_found() {
        let service = create_test_service().await;

        let result = service
            .update_agent("ZZZ", UpdateAgentRequest::default())
            .await
            .unwrap();
        assert_eq!(result, AgentUpdate::NotFound);
    }

    #[tokio::test]
    async fn test_repeated_update_is_idempotent() {
        let service = create_test_service().await;
        let request = UpdateAgentRequest {
            agent_name: Some("Alex B".to_string()),
            commission: Some("0.2".to_string()),
            ..Default::default()
        };

        let first = service.update_agent("A003", request.clone()).await.unwrap();
        let after_first = service.list_agents().await.unwrap();
        let second = service.update_agent("A003", request).await.unwrap();
        let after_second = service.list_agents().await.unwrap();

        assert_eq!(first, AgentUpdate::Updated);
        assert_eq!(second, AgentUpdate::Updated);
        assert_eq!(after_first, after_second);
    }

    #[tokio::test]
    async fn test_create_agent_then_list() {
        let service = create_test_service().await;

        service
            .create_agent(CreateAgentRequest {
                agent_code: "A011".to_string(),
                agent_name: "Ravi Kumar".to_string(),
                working_area: "Bangalore".to_string(),
                commission: "0.15".to_string(),
                phone_no: "077-45625874".to_string(),
                country: "India".to_string(),
            })
            .await
            .unwrap();

        let agents = service.list_agents().await.unwrap();
        assert_eq!(agents.len(), 4);
    }
}
