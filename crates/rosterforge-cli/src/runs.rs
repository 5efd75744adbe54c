use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use rosterforge_engine::RunReport;

use crate::atomic::write_json_atomic;
use crate::error::CliResult;

/// JSON config written to each run directory, for reproducibility.
#[derive(Debug, Serialize)]
pub struct RunConfig {
    pub run_id: String,
    pub started_at: String,
    pub batch_path: String,
    pub uid_floor: i64,
    pub campaign_start: String,
    pub seed: Option<u64>,
    pub relational_sink: bool,
    pub workbook_dir: String,
}

/// Artifact paths for one run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub root: PathBuf,
    pub logs_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn start_run(
    run_dir: &Path,
    run_id: &str,
    started_at: DateTime<Utc>,
    config: &RunConfig,
) -> CliResult<RunPaths> {
    let timestamp = started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let root = run_dir.join(format!("{timestamp}__run_{run_id}"));
    create_dir_all(&root)?;

    write_json_atomic(&root.join("config.json"), config)?;

    let logs_path = root.join("logs.ndjson");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logs_path)?;

    Ok(RunPaths {
        report_path: root.join("report.json"),
        logs_path,
        root,
    })
}

pub fn write_report(paths: &RunPaths, report: &RunReport) -> CliResult<()> {
    write_json_atomic(&paths.report_path, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_directory_carries_config_and_empty_log() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = RunConfig {
            run_id: "abc".to_string(),
            started_at: Utc::now().to_rfc3339(),
            batch_path: "batch.toml".to_string(),
            uid_floor: 1,
            campaign_start: "2024-01-01".to_string(),
            seed: Some(7),
            relational_sink: false,
            workbook_dir: "workbook".to_string(),
        };

        let paths = start_run(dir.path(), "abc", Utc::now(), &config).expect("start");

        assert!(paths.root.join("config.json").exists());
        assert!(paths.logs_path.exists());
        assert!(paths.root.file_name().is_some_and(|name| {
            name.to_string_lossy().ends_with("__run_abc")
        }));
    }
}
