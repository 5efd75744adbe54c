//! Relational sink: the external simulation database.
//!
//! Column names and order are reproduced exactly; booleans are written
//! tri-state. Each entity group commits in its own transaction, in
//! dependency order, so a failure leaves no half-written group.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

use rosterforge_core::record::{Company, Contract, Wrestler};
use rosterforge_core::schema::{
    COMPANY_COLUMNS, CONTRACT_COLUMNS, SKILL_NAMES, WORKER_COLUMNS, popularity_columns,
};
use rosterforge_core::{BoolEncoding, EntityClass, IdSource, Value};

use crate::error::Result;
use crate::rows;
use crate::writer::RecordSink;

pub struct SqliteSink {
    pool: SqlitePool,
}

impl SqliteSink {
    /// Open (or create) the database file and make sure every table
    /// the external schema names exists.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let sink = Self { pool };
        sink.ensure_schema().await?;
        Ok(sink)
    }

    async fn ensure_schema(&self) -> Result<()> {
        let statements = [
            create_table("tblFed", &COMPANY_COLUMNS),
            "CREATE TABLE IF NOT EXISTS tblFedSchedule (FedUID, Strategy)".to_string(),
            "CREATE TABLE IF NOT EXISTS tblFedBio (UID, Profile)".to_string(),
            create_table("tblWorker", &WORKER_COLUMNS),
            "CREATE TABLE IF NOT EXISTS tblWorkerBio (UID, Profile)".to_string(),
            create_skills_table(),
            create_table("tblContract", &CONTRACT_COLUMNS),
            create_popularity_table(),
        ];
        for statement in statements {
            sqlx::query(&statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn insert_row(
        tx: &mut Transaction<'_, Sqlite>,
        table: &str,
        columns: &[&str],
        row: Vec<Value>,
    ) -> Result<()> {
        debug_assert_eq!(columns.len(), row.len());
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders})",
            columns.join(", ")
        );
        let mut query = sqlx::query(&sql);
        for value in row {
            query = match value {
                Value::Int(v) => query.bind(v),
                Value::Bool(v) => query.bind(v),
                Value::Text(v) => query.bind(v),
                Value::Date(v) => query.bind(v),
            };
        }
        query.execute(&mut **tx).await?;
        Ok(())
    }

    async fn write_companies(&self, companies: &[Company]) -> Result<()> {
        if companies.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        for company in companies {
            let row = rows::company_row(company, BoolEncoding::TriState);
            Self::insert_row(&mut tx, "tblFed", &COMPANY_COLUMNS, row).await?;
            sqlx::query("INSERT INTO tblFedSchedule (FedUID, Strategy) VALUES (?, ?)")
                .bind(company.uid)
                .bind("5")
                .execute(&mut *tx)
                .await?;
            sqlx::query("INSERT INTO tblFedBio (UID, Profile) VALUES (?, ?)")
                .bind(company.uid)
                .bind(&company.bio)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        debug!(count = companies.len(), "companies committed");
        Ok(())
    }

    async fn write_wrestlers(&self, wrestlers: &[Wrestler]) -> Result<()> {
        if wrestlers.is_empty() {
            return Ok(());
        }
        let skill_columns = skills_columns();
        let skill_refs: Vec<&str> = skill_columns.iter().map(String::as_str).collect();
        let pop_columns = popularity_columns();
        let pop_refs: Vec<&str> = pop_columns.iter().map(String::as_str).collect();

        let mut tx = self.pool.begin().await?;
        for wrestler in wrestlers {
            let row = rows::worker_row(wrestler, BoolEncoding::TriState);
            Self::insert_row(&mut tx, "tblWorker", &WORKER_COLUMNS, row).await?;
            sqlx::query("INSERT INTO tblWorkerBio (UID, Profile) VALUES (?, ?)")
                .bind(wrestler.uid)
                .bind(&wrestler.bio)
                .execute(&mut *tx)
                .await?;
            let skills = rows::skills_row(wrestler.uid, &wrestler.skills);
            Self::insert_row(&mut tx, "tblWorkerSkill", &skill_refs, skills).await?;
            let popularity = rows::popularity_row(wrestler.uid, &wrestler.popularity.values);
            Self::insert_row(&mut tx, "tblWorkerOver", &pop_refs, popularity).await?;
        }
        tx.commit().await?;
        debug!(count = wrestlers.len(), "workers committed");
        Ok(())
    }

    async fn write_contracts(&self, contracts: &[Contract]) -> Result<()> {
        if contracts.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        for contract in contracts {
            let row = rows::contract_row(contract, BoolEncoding::TriState);
            Self::insert_row(&mut tx, "tblContract", &CONTRACT_COLUMNS, row).await?;
        }
        tx.commit().await?;
        debug!(count = contracts.len(), "contracts committed");
        Ok(())
    }
}

fn create_table(table: &str, columns: &[&str]) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} ({})",
        columns.join(", ")
    )
}

fn skills_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(SKILL_NAMES.len() + 1);
    columns.push("WorkerUID".to_string());
    columns.extend(SKILL_NAMES.iter().map(|name| name.to_string()));
    columns
}

fn create_skills_table() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS tblWorkerSkill ({})",
        skills_columns().join(", ")
    )
}

fn create_popularity_table() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS tblWorkerOver ({})",
        popularity_columns().join(", ")
    )
}

#[async_trait::async_trait]
impl RecordSink for SqliteSink {
    fn name(&self) -> &'static str {
        "relational"
    }

    async fn commit(
        &self,
        companies: &[Company],
        wrestlers: &[Wrestler],
        contracts: &[Contract],
    ) -> Result<()> {
        self.write_companies(companies).await?;
        self.write_wrestlers(wrestlers).await?;
        self.write_contracts(contracts).await?;
        info!(
            companies = companies.len(),
            wrestlers = wrestlers.len(),
            contracts = contracts.len(),
            "relational sink committed"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl IdSource for SqliteSink {
    async fn max_id(&self, class: EntityClass) -> rosterforge_core::Result<i64> {
        let table = match class {
            EntityClass::Worker => "tblWorker",
            EntityClass::Company => "tblFed",
            EntityClass::Contract => "tblContract",
        };
        let max: Option<i64> = sqlx::query_scalar(&format!("SELECT MAX(UID) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .map_err(|err| rosterforge_core::Error::IdSource(err.to_string()))?;
        Ok(max.unwrap_or(0))
    }
}

impl std::fmt::Debug for SqliteSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSink").finish_non_exhaustive()
    }
}
