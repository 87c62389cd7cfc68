/// Test utilities shared by storage, domain and REST tests
///
/// Provides fixture rows for the in-memory SQLite database and a fake gateway
/// that records statements instead of running them.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::AnyPool;
use std::sync::Mutex;

use crate::storage::gateway::{Gateway, GatewayError, Outcome, Statement};

/// Fixture rows. Text columns carry trailing padding the way fixed-width
/// `CHAR` columns do, so every read path has something to trim. Some nullable
/// columns are left NULL.
const SAMPLE_ROWS: &[&str] = &[
    "INSERT INTO agents VALUES ('A007', 'Ramasundar    ', 'Bangalore   ', 0.15, '077-25814763  ', '  ')",
    "INSERT INTO agents VALUES ('A003', 'Alex  ', 'London    ', 0.13, '075-12458969', '')",
    "INSERT INTO agents VALUES ('A008', 'Alford', '  New York', 0.12, '044-25874365', NULL)",
    "INSERT INTO company VALUES ('18', 'Order All  ', 'Boston ')",
    "INSERT INTO company VALUES ('15', 'Jack Hill Ltd', 'London')",
    "INSERT INTO customer VALUES ('C00013', 'Holmes   ', 'London  ', 'London', 'UK', 2, 6000, 5000, 7000, 4000, 'BBBBBBB', 'A003  ')",
    "INSERT INTO customer VALUES ('C00001', 'Micheal', 'New York', 'New York', 'USA', 2, 3000, 5000, 2000, 6000, 'CCCCCCC', 'A008')",
    "INSERT INTO customer VALUES ('C00020', 'Albert', 'New York   ', 'New York', 'USA', 3, 5000, 7000, 6000, 6000, 'BBBBSBB', 'A008')",
    "INSERT INTO daysorder VALUES (200100, 1000, 600, '08/01/2008  ', 'C00013', 'A003  ', 'SOD ')",
    "INSERT INTO daysorder VALUES (200110, 3000, 500, '04/15/2008', 'C00020', 'A008', 'SOD')",
    "INSERT INTO foods VALUES ('1', 'Chex Mix   ', 'Pcs  ', '16')",
    "INSERT INTO foods VALUES ('6', 'Cheez-It', NULL, NULL)",
    "INSERT INTO student VALUES ('Ann   ', 'Miss ', 'V', 'A', 12)",
    "INSERT INTO student VALUES ('Ravi', 'Mr', 'V', 'B', 13)",
    "INSERT INTO student VALUES ('Nobody', 'Mr', 'VI', 'A', 99)",
    "INSERT INTO studentreport VALUES ('V', 'A', 12, 'A', '1st  ', 90)",
    "INSERT INTO studentreport VALUES ('V', 'B', 13, 'B', '1st', 75)",
];

/// Insert the fixture rows into freshly created sample tables
pub async fn seed_sample_rows(pool: &AnyPool) -> Result<()> {
    for insert in SAMPLE_ROWS {
        sqlx::query(*insert).execute(pool).await?;
    }
    Ok(())
}

/// Gateway fake that records every statement and answers with a fixed outcome
pub struct RecordingGateway {
    statements: Mutex<Vec<Statement>>,
    outcome: Option<Outcome>,
}

impl RecordingGateway {
    /// Answer every statement with `outcome`
    pub fn returning(outcome: Outcome) -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            outcome: Some(outcome),
        }
    }

    /// Fail every statement as if the pool timed out
    pub fn failing() -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            outcome: None,
        }
    }

    /// Statements received so far, in order
    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().expect("statement log poisoned").clone()
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn execute(&self, statement: Statement) -> Result<Outcome, GatewayError> {
        self.statements
            .lock()
            .expect("statement log poisoned")
            .push(statement);

        match &self.outcome {
            Some(outcome) => Ok(outcome.clone()),
            None => Err(GatewayError::Database(sqlx::Error::PoolTimedOut)),
        }
    }
}
