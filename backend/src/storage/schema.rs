//! Sample schema for local runs.
//!
//! Production databases own their schema; these statements only exist so the
//! service can be pointed at a new or empty SQLite file (`BOOTSTRAP_SCHEMA=true`) and
//! so tests have tables to work against. Column types are accepted by both
//! MariaDB and SQLite.

use anyhow::Result;
use sqlx::AnyPool;

const SAMPLE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS agents (
        AGENT_CODE CHAR(6) NOT NULL PRIMARY KEY,
        AGENT_NAME CHAR(40),
        WORKING_AREA CHAR(35),
        COMMISSION DECIMAL(10,2),
        PHONE_NO CHAR(15),
        COUNTRY VARCHAR(25)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS company (
        COMPANY_ID VARCHAR(6) NOT NULL PRIMARY KEY,
        COMPANY_NAME VARCHAR(25),
        COMPANY_CITY VARCHAR(25)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer (
        CUST_CODE VARCHAR(6) NOT NULL PRIMARY KEY,
        CUST_NAME VARCHAR(40) NOT NULL,
        CUST_CITY CHAR(35),
        WORKING_AREA VARCHAR(35) NOT NULL,
        CUST_COUNTRY VARCHAR(20) NOT NULL,
        GRADE DECIMAL(10,0),
        OPENING_AMT DECIMAL(12,2) NOT NULL,
        RECEIVE_AMT DECIMAL(12,2) NOT NULL,
        PAYMENT_AMT DECIMAL(12,2) NOT NULL,
        OUTSTANDING_AMT DECIMAL(12,2) NOT NULL,
        PHONE_NO VARCHAR(17) NOT NULL,
        AGENT_CODE CHAR(6) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS daysorder (
        ORD_NUM DECIMAL(6,0) NOT NULL PRIMARY KEY,
        ORD_AMOUNT DECIMAL(12,2) NOT NULL,
        ADVANCE_AMOUNT DECIMAL(12,2) NOT NULL,
        ORD_DATE VARCHAR(20) NOT NULL,
        CUST_CODE VARCHAR(6) NOT NULL,
        AGENT_CODE CHAR(6) NOT NULL,
        ORD_DESCRIPTION VARCHAR(60) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS foods (
        ITEM_ID VARCHAR(6) NOT NULL PRIMARY KEY,
        ITEM_NAME VARCHAR(25),
        ITEM_UNIT VARCHAR(5),
        COMPANY_ID VARCHAR(6)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS student (
        NAME VARCHAR(30) NOT NULL,
        TITLE VARCHAR(25),
        CLASS VARCHAR(5),
        SECTION VARCHAR(1),
        ROLLID DECIMAL(3,0)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS studentreport (
        CLASS VARCHAR(5),
        SECTION VARCHAR(1),
        ROLLID DECIMAL(3,0),
        GRADE VARCHAR(1),
        SEMISTER VARCHAR(5),
        CLASS_ATTENDED DECIMAL(3,0)
    )
    "#,
];

/// Create every sample table that does not exist yet
pub async fn create_sample_tables(pool: &AnyPool) -> Result<()> {
    for ddl in SAMPLE_TABLES {
        sqlx::query(*ddl).execute(pool).await?;
    }
    Ok(())
}
