use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rosterforge_core::{Company, CompanySelector, CompanySize, Contract, Gender, Tuning, Wrestler};

/// A partial wrestler request. Every field is optional; the engine
/// fills the gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrestlerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Company attachment; defaults to `Freelancer` (no contract).
    #[serde(default = "freelancer")]
    pub company: CompanySelector,
    /// Skill preset name; `None` asks the generation service to pick.
    #[serde(default)]
    pub preset: Option<String>,
    /// Force contract exclusivity instead of the 50/50 draw.
    #[serde(default)]
    pub exclusive: Option<bool>,
}

fn freelancer() -> CompanySelector {
    CompanySelector::Freelancer
}

impl Default for WrestlerRequest {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            gender: None,
            company: CompanySelector::Freelancer,
            preset: None,
            exclusive: None,
        }
    }
}

/// A partial company request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "medium")]
    pub size: CompanySize,
}

fn medium() -> CompanySize {
    CompanySize::Medium
}

impl Default for CompanyRequest {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            size: CompanySize::Medium,
        }
    }
}

/// One generation run's worth of requests. Companies are synthesized
/// first so wrestler contracts can reference them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub companies: Vec<CompanyRequest>,
    #[serde(default)]
    pub wrestlers: Vec<WrestlerRequest>,
}

/// Engine configuration, passed in explicitly at run start.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// The reference "present" all generated dates must precede.
    pub campaign_start: NaiveDate,
    /// Lowest identifier the allocator may hand out.
    pub uid_floor: i64,
    /// Operator-editable template opening every bio prompt.
    pub bio_prompt: String,
    /// Optional deterministic seed for sampling.
    pub seed: Option<u64>,
    /// Structured-response parse attempts before defaulting.
    pub llm_attempts: u32,
    pub tuning: Tuning,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            campaign_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            uid_floor: 1,
            bio_prompt: "Create a biography for a professional wrestler.".to_string(),
            seed: None,
            llm_attempts: 3,
            tuning: Tuning::default(),
        }
    }
}

/// Everything one run produced, ready for the persistence writer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    pub companies: Vec<Company>,
    pub wrestlers: Vec<Wrestler>,
    pub contracts: Vec<Contract>,
}

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() && self.wrestlers.is_empty() && self.contracts.is_empty()
    }
}

/// Structured per-run warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunWarning {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

/// Report for a synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub wrestlers: u64,
    pub companies: u64,
    pub contracts: u64,
    /// Outbound generation-service requests (retries not included).
    pub llm_requests: u64,
    /// Times a documented default stood in for a service response.
    pub fallback_count: u64,
    pub warnings: Vec<RunWarning>,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            wrestlers: 0,
            companies: 0,
            contracts: 0,
            llm_requests: 0,
            fallback_count: 0,
            warnings: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_llm_request(&mut self) {
        self.llm_requests += 1;
    }

    pub fn record_fallback(&mut self) {
        self.fallback_count += 1;
    }

    pub fn record_warning(&mut self, code: &str, message: String, entity: Option<String>) {
        self.warnings.push(RunWarning {
            code: code.to_string(),
            message,
            entity,
        });
    }
}
