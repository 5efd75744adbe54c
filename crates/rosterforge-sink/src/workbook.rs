//! Workbook sink: one CSV sheet per entity group inside a directory.
//!
//! Re-runs append: an existing sheet is read in full and the new rows
//! are concatenated before the combined table is rewritten, so the
//! workbook behaves as an append-only ledger across runs. Booleans are
//! written natively.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use rosterforge_core::record::{Company, Contract, Wrestler};
use rosterforge_core::schema::{
    COMPANY_COLUMNS, CONTRACT_COLUMNS, SKILL_NAMES, WORKER_COLUMNS, popularity_columns,
};
use rosterforge_core::{BoolEncoding, EntityClass, IdSource, Value};

use crate::error::Result;
use crate::rows;
use crate::writer::RecordSink;

const COMPANIES_SHEET: &str = "companies.csv";
const COMPANY_BIOS_SHEET: &str = "company_bios.csv";
const COMPANY_NOTES_SHEET: &str = "company_notes.csv";
const WORKERS_SHEET: &str = "workers.csv";
const WORKER_BIOS_SHEET: &str = "worker_bios.csv";
const WORKER_SKILLS_SHEET: &str = "worker_skills.csv";
const WORKER_NOTES_SHEET: &str = "worker_notes.csv";
const WORKER_POPULARITY_SHEET: &str = "worker_popularity.csv";
const CONTRACTS_SHEET: &str = "contracts.csv";

#[derive(Debug, Clone)]
pub struct WorkbookSink {
    dir: PathBuf,
}

impl WorkbookSink {
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(sheet)
    }

    /// Read any existing sheet, concatenate the new rows, rewrite.
    fn append_sheet(&self, sheet: &str, headers: &[String], new_rows: &[Vec<Value>]) -> Result<()> {
        let path = self.sheet_path(sheet);
        let mut rows: Vec<Vec<String>> = Vec::new();
        if path.exists() {
            let mut reader = csv::Reader::from_path(&path)?;
            for record in reader.records() {
                rows.push(record?.iter().map(str::to_string).collect());
            }
        }
        rows.extend(
            new_rows
                .iter()
                .map(|row| row.iter().map(Value::to_csv).collect()),
        );

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(headers)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        debug!(sheet, total = rows.len(), added = new_rows.len(), "sheet rewritten");
        Ok(())
    }

    /// Highest value in a sheet's leading identifier column, 0 when
    /// the sheet does not exist yet.
    fn max_uid(&self, sheet: &str) -> Result<i64> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Ok(0);
        }
        let mut reader = csv::Reader::from_path(&path)?;
        let mut max = 0;
        for record in reader.records() {
            let record = record?;
            if let Some(cell) = record.get(0)
                && let Ok(uid) = cell.trim().parse::<i64>()
            {
                max = max.max(uid);
            }
        }
        Ok(max)
    }
}

fn header_strings(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|name| name.to_string()).collect()
}

#[async_trait::async_trait]
impl RecordSink for WorkbookSink {
    fn name(&self) -> &'static str {
        "workbook"
    }

    async fn commit(
        &self,
        companies: &[Company],
        wrestlers: &[Wrestler],
        contracts: &[Contract],
    ) -> Result<()> {
        if !companies.is_empty() {
            let rows: Vec<_> = companies
                .iter()
                .map(|company| rows::company_row(company, BoolEncoding::Native))
                .collect();
            self.append_sheet(COMPANIES_SHEET, &header_strings(&COMPANY_COLUMNS), &rows)?;

            let bios: Vec<_> = companies
                .iter()
                .map(|company| rows::bio_row(company.uid, &company.bio))
                .collect();
            self.append_sheet(
                COMPANY_BIOS_SHEET,
                &header_strings(&["UID", "Bio"]),
                &bios,
            )?;

            let notes: Vec<_> = companies.iter().map(rows::company_notes_row).collect();
            self.append_sheet(
                COMPANY_NOTES_SHEET,
                &header_strings(&["Name", "Description", "Size"]),
                &notes,
            )?;
        }

        if !wrestlers.is_empty() {
            let rows_: Vec<_> = wrestlers
                .iter()
                .map(|wrestler| rows::worker_row(wrestler, BoolEncoding::Native))
                .collect();
            self.append_sheet(WORKERS_SHEET, &header_strings(&WORKER_COLUMNS), &rows_)?;

            let bios: Vec<_> = wrestlers
                .iter()
                .map(|wrestler| rows::bio_row(wrestler.uid, &wrestler.bio))
                .collect();
            self.append_sheet(WORKER_BIOS_SHEET, &header_strings(&["UID", "Bio"]), &bios)?;

            let mut skill_headers = vec!["WorkerUID".to_string()];
            skill_headers.extend(SKILL_NAMES.iter().map(|name| name.to_string()));
            let skills: Vec<_> = wrestlers
                .iter()
                .map(|wrestler| rows::skills_row(wrestler.uid, &wrestler.skills))
                .collect();
            self.append_sheet(WORKER_SKILLS_SHEET, &skill_headers, &skills)?;

            let popularity: Vec<_> = wrestlers
                .iter()
                .map(|wrestler| rows::popularity_row(wrestler.uid, &wrestler.popularity.values))
                .collect();
            self.append_sheet(WORKER_POPULARITY_SHEET, &popularity_columns(), &popularity)?;

            let notes: Vec<_> = wrestlers.iter().map(rows::worker_notes_row).collect();
            self.append_sheet(
                WORKER_NOTES_SHEET,
                &header_strings(&["UID", "Name", "Skill Preset", "Description"]),
                &notes,
            )?;
        }

        if !contracts.is_empty() {
            let rows_: Vec<_> = contracts
                .iter()
                .map(|contract| rows::contract_row(contract, BoolEncoding::Native))
                .collect();
            self.append_sheet(CONTRACTS_SHEET, &header_strings(&CONTRACT_COLUMNS), &rows_)?;
        }

        info!(
            companies = companies.len(),
            wrestlers = wrestlers.len(),
            contracts = contracts.len(),
            dir = %self.dir.display(),
            "workbook sink committed"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl IdSource for WorkbookSink {
    async fn max_id(&self, class: EntityClass) -> rosterforge_core::Result<i64> {
        let sheet = match class {
            EntityClass::Worker => WORKERS_SHEET,
            EntityClass::Company => COMPANIES_SHEET,
            EntityClass::Contract => CONTRACTS_SHEET,
        };
        self.max_uid(sheet)
            .map_err(|err| rosterforge_core::Error::IdSource(err.to_string()))
    }
}
