use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::atomic::write_bytes_atomic;
use crate::error::CliResult;

/// Operator settings, persisted as TOML next to the roster data.
///
/// The generation-service credential is the only field without a
/// usable default; everything else can run as shipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generation-service API key. Empty means unconfigured.
    pub api_key: String,
    pub model: String,
    /// Override for the service endpoint; `None` uses the default.
    pub base_url: Option<String>,
    /// Lowest identifier the allocator may hand out.
    pub uid_floor: i64,
    /// Template that opens every wrestler-bio prompt.
    pub bio_prompt: String,
    /// Optional relational sink; when unset only the workbook is used.
    pub database_path: Option<PathBuf>,
    /// Directory for the workbook sheets.
    pub workbook_dir: PathBuf,
    /// Skill preset library location.
    pub presets_path: PathBuf,
    /// The reference "present" all generated dates must precede.
    pub campaign_start: NaiveDate,
    /// Deterministic sampling seed; unset means seed from the OS.
    pub seed: Option<u64>,
    /// Structured-response parse attempts before defaulting.
    pub llm_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: None,
            uid_floor: 1,
            bio_prompt: "Create a biography for a professional wrestler.".to_string(),
            database_path: None,
            workbook_dir: PathBuf::from("workbook"),
            presets_path: PathBuf::from("skill_presets.json"),
            campaign_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            seed: None,
            llm_attempts: 3,
        }
    }
}

impl Settings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

pub fn load_or_create(path: &Path) -> CliResult<Settings> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save(path, &settings)?;
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> CliResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
