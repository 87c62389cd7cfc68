use shared::{Agent, CreateAgentRequest, UpdateAgentRequest};
use std::sync::Arc;

use crate::storage::gateway::{Gateway, GatewayError, Row, Statement};

/// Repository for the `agents` table
#[derive(Clone)]
pub struct AgentRepository {
    gateway: Arc<dyn Gateway>,
}

impl AgentRepository {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// List every agent
    pub async fn list_agents(&self) -> Result<Vec<Agent>, GatewayError> {
        let statement = Statement::query(
            r#"
            SELECT trim(AGENT_CODE) AS AGENT_CODE, trim(AGENT_NAME) AS AGENT_NAME,
                   trim(WORKING_AREA) AS WORKING_AREA, trim(COMMISSION) AS COMMISSION,
                   trim(PHONE_NO) AS PHONE_NO, trim(COUNTRY) AS COUNTRY
            FROM agents
            "#,
        );

        let rows = self.gateway.execute(statement).await?.into_rows();
        Ok(rows.iter().map(agent_from_row).collect())
    }

    /// Insert a new agent
    pub async fn store_agent(&self, agent: &CreateAgentRequest) -> Result<(), GatewayError> {
        let statement = Statement::command(
            r#"
            INSERT INTO agents (AGENT_CODE, AGENT_NAME, WORKING_AREA, COMMISSION, PHONE_NO, COUNTRY)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(agent.agent_code.as_str())
        .bind(agent.agent_name.as_str())
        .bind(agent.working_area.as_str())
        .bind(agent.commission.as_str())
        .bind(agent.phone_no.as_str())
        .bind(agent.country.as_str());

        self.gateway.execute(statement).await?;
        Ok(())
    }

    /// Update an agent by code, keeping the stored value of omitted fields.
    ///
    /// Returns the number of rows the update matched.
    pub async fn update_agent(
        &self,
        agent_code: &str,
        changes: &UpdateAgentRequest,
    ) -> Result<u64, GatewayError> {
        let statement = Statement::command(
            r#"
            UPDATE agents
            SET AGENT_NAME = COALESCE(?, AGENT_NAME),
                WORKING_AREA = COALESCE(?, WORKING_AREA),
                COMMISSION = COALESCE(?, COMMISSION),
                PHONE_NO = COALESCE(?, PHONE_NO),
                COUNTRY = COALESCE(?, COUNTRY)
            WHERE AGENT_CODE = ?
            "#,
        )
        .bind_optional(changes.agent_name.clone())
        .bind_optional(changes.working_area.clone())
        .bind_optional(changes.commission.clone())
        .bind_optional(changes.phone_no.clone())
        .bind_optional(changes.country.clone())
        .bind(agent_code);

        let outcome = self.gateway.execute(statement).await?;
        Ok(outcome.affected_rows())
    }
}

fn agent_from_row(row: &Row) -> Agent {
    Agent {
        agent_code: row.trimmed("AGENT_CODE"),
        agent_name: row.trimmed("AGENT_NAME"),
        working_area: row.trimmed("WORKING_AREA"),
        commission: row.trimmed("COMMISSION"),
        phone_no: row.trimmed("PHONE_NO"),
        country: row.trimmed("COUNTRY"),
    }
}
