use anyhow::Result;
use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::migrate::MigrateDatabase;
use sqlx::{AnyPool, Column, Row as _, Sqlite, ValueRef};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::storage::gateway::{Gateway, GatewayError, Outcome, Row, Statement, StatementKind};
use crate::storage::schema;

/// DbConnection owns the bounded connection pool shared by all handlers
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<AnyPool>,
}

impl DbConnection {
    /// Open a pool of at most `pool_size` connections to `url`.
    ///
    /// The URL scheme picks the driver (`mysql://`, `mariadb://`, `sqlite:`).
    /// A missing SQLite file is created; other databases must already exist.
    pub async fn new(url: &str, pool_size: u32) -> Result<Self> {
        sqlx::any::install_default_drivers();

        // Create the SQLite file if it doesn't exist
        if url.starts_with("sqlite:") && !Sqlite::database_exists(url).await? {
            info!("Creating SQLite database {}", url);
            Sqlite::create_database(url).await?;
        }

        let pool = AnyPoolOptions::new()
            .max_connections(pool_size)
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the database described by the configuration
    pub async fn init(config: &Config) -> Result<Self> {
        info!("Connecting to database with a pool of {} connections", config.pool_size);
        let db = Self::new(&config.database_url, config.pool_size).await?;

        if config.bootstrap_schema {
            info!("Creating sample tables if they are missing");
            schema::create_sample_tables(db.pool()).await?;
        }

        Ok(db)
    }

    /// Initialize a seeded in-memory SQLite database.
    ///
    /// A single connection keeps every statement on the same in-memory database.
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let db = Self::new("sqlite::memory:", 1).await?;
        schema::create_sample_tables(db.pool()).await?;
        crate::storage::test_utils::seed_sample_rows(db.pool()).await?;
        Ok(db)
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl Gateway for DbConnection {
    async fn execute(&self, statement: Statement) -> Result<Outcome, GatewayError> {
        // Returned to the pool when dropped, on every path out of this function
        let mut conn = self.pool.acquire().await?;

        debug!(
            sql = statement.sql,
            params = statement.params.len(),
            "Executing statement"
        );

        let kind = statement.kind;
        let mut query = sqlx::query(statement.sql);
        for param in statement.params {
            query = query.bind(param);
        }

        let outcome = match kind {
            StatementKind::Query => {
                let rows = query.fetch_all(&mut *conn).await?;
                let rows = rows.iter().map(to_row).collect::<Result<Vec<_>, _>>()?;
                Outcome::Rows(rows)
            }
            StatementKind::Command => {
                let result = query.execute(&mut *conn).await?;
                Outcome::Affected(result.rows_affected())
            }
        };

        Ok(outcome)
    }
}

/// Read every column of a driver row as optional text.
///
/// The Any driver types a NULL cell as SQL `NULL`, which no Rust type decodes
/// from, so nulls are detected on the raw value first.
fn to_row(row: &AnyRow) -> Result<Row, sqlx::Error> {
    let columns = row
        .columns()
        .iter()
        .map(|column| {
            let ordinal = column.ordinal();
            let value = if row.try_get_raw(ordinal)?.is_null() {
                None
            } else {
                Some(row.try_get::<String, _>(ordinal)?)
            };
            Ok((column.name().to_string(), value))
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()?;

    Ok(Row::new(columns))
}
