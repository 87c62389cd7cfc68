//! # Database Gateway
//!
//! The single seam between the service and the database. A [`Gateway`] runs
//! exactly one parameterized [`Statement`] per call and hands back either the
//! fetched rows or the affected-row count.
//!
//! Handlers never see a connection. They hold an `Arc<dyn Gateway>` so tests
//! can substitute a recording fake for the pooled implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Any failure reported by the database driver.
///
/// Connectivity problems, constraint violations and timeouts are all passed
/// through unchanged; callers only need to know the statement failed.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Whether a statement returns rows or only an affected-row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Query,
    Command,
}

/// Static SQL text plus its positional bind parameters.
///
/// Placeholders are `?`. A `None` parameter binds SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<Option<String>>,
    pub kind: StatementKind,
}

impl Statement {
    /// A statement that returns rows
    pub fn query(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
            kind: StatementKind::Query,
        }
    }

    /// A statement that modifies rows
    pub fn command(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
            kind: StatementKind::Command,
        }
    }

    pub fn bind(mut self, value: impl Into<String>) -> Self {
        self.params.push(Some(value.into()));
        self
    }

    pub fn bind_optional(mut self, value: Option<String>) -> Self {
        self.params.push(value);
        self
    }
}

/// One result row as ordered `(column, value)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(String, Option<String>)>,
}

impl Row {
    pub fn new(columns: Vec<(String, Option<String>)>) -> Self {
        Self { columns }
    }

    /// Build a row from literal pairs, mostly for fakes and tests
    pub fn from_pairs(pairs: &[(&str, Option<&str>)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
                .collect(),
        )
    }

    /// Value of a column with surrounding whitespace removed.
    ///
    /// Missing columns and SQL `NULL` both read as `None`.
    pub fn trimmed(&self, column: &str) -> Option<String> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .and_then(|(_, value)| value.as_deref())
            .map(|value| value.trim().to_string())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// What a statement produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rows(Vec<Row>),
    Affected(u64),
}

impl Outcome {
    /// Rows of a query; a command yields none
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Outcome::Rows(rows) => rows,
            Outcome::Affected(_) => Vec::new(),
        }
    }

    /// Affected-row count of a command; a query reports how many rows it read
    pub fn affected_rows(&self) -> u64 {
        match self {
            Outcome::Rows(rows) => rows.len() as u64,
            Outcome::Affected(count) => *count,
        }
    }
}

/// Executes one parameterized statement on a pooled connection
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn execute(&self, statement: Statement) -> Result<Outcome, GatewayError>;
}
