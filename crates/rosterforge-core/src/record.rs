use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel date the external schema uses for "not applicable".
pub fn not_applicable_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1666, 1, 1).unwrap_or_default()
}

/// Fixed debut-date sentinel carried on every contract row.
pub fn contract_debut_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

/// Monetary sentinel meaning "not yet negotiated".
pub const UNNEGOTIATED_MONEY: i64 = -1;

/// Gender code as dictated by the external schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 5,
        }
    }

    pub fn pronouns(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    pub fn competes_against(self) -> u8 {
        match self {
            Gender::Male => 2,
            Gender::Female => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Company size category, mapped to the schema's monetary scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Tiny,
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub fn money(self) -> i64 {
        match self {
            CompanySize::Tiny => 100_000,
            CompanySize::Small => 1_000_000,
            CompanySize::Medium => 10_000_000,
            CompanySize::Large => 100_000_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanySize::Tiny => "tiny",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
        }
    }
}

/// Face/heel alignment for gimmicks and contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Face,
    Heel,
}

impl Alignment {
    pub fn label(self) -> &'static str {
        match self {
            Alignment::Face => "face",
            Alignment::Heel => "heel",
        }
    }

    /// Lenient parse of a generation-service binary-choice reply.
    pub fn parse_label(text: &str) -> Option<Self> {
        let lower = text.trim().to_lowercase();
        if lower.contains("face") && !lower.contains("heel") {
            Some(Alignment::Face)
        } else if lower.contains("heel") && !lower.contains("face") {
            Some(Alignment::Heel)
        } else {
            None
        }
    }
}

/// How a wrestler is attached (or not) to a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompanySelector {
    /// Exact company-name match required; a miss degrades to no contract.
    Named(String),
    /// Uniform choice among all known companies.
    Random,
    /// No contract is produced.
    Freelancer,
}

impl From<String> for CompanySelector {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "random" => CompanySelector::Random,
            "freelancer" | "" => CompanySelector::Freelancer,
            _ => CompanySelector::Named(value.trim().to_string()),
        }
    }
}

impl From<CompanySelector> for String {
    fn from(value: CompanySelector) -> Self {
        match value {
            CompanySelector::Named(name) => name,
            CompanySelector::Random => "Random".to_string(),
            CompanySelector::Freelancer => "Freelancer".to_string(),
        }
    }
}

/// The eight fixed geographic popularity regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    America,
    Canada,
    Mexico,
    BritishIsles,
    Japan,
    Europe,
    Oceania,
    India,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::America,
        Region::Canada,
        Region::Mexico,
        Region::BritishIsles,
        Region::Japan,
        Region::Europe,
        Region::Oceania,
        Region::India,
    ];

    /// Column prefix the external popularity table uses for this region.
    pub fn prefix(self) -> &'static str {
        match self {
            Region::America => "USA",
            Region::Canada => "Canada",
            Region::Mexico => "Mexico",
            Region::BritishIsles => "UK",
            Region::Japan => "Japan",
            Region::Europe => "Europe",
            Region::Oceania => "Oz",
            Region::India => "India",
        }
    }

    /// Number of numeric sub-columns this region owns.
    pub fn column_count(self) -> usize {
        match self {
            Region::America => 11,
            Region::Canada => 7,
            Region::Mexico => 6,
            Region::BritishIsles => 6,
            Region::Japan => 8,
            Region::Europe => 8,
            Region::Oceania => 7,
            Region::India => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::America => "America",
            Region::Canada => "Canada",
            Region::Mexico => "Mexico",
            Region::BritishIsles => "British Isles",
            Region::Japan => "Japan",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::India => "India",
        }
    }

    pub fn parse_label(text: &str) -> Option<Self> {
        let lower = text.trim().to_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.label().to_lowercase() == lower)
    }
}

/// Ordered qualitative popularity label, Unknown through Superstar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopularityCategory {
    Unknown,
    Insignificant,
    IndiePopularity,
    Recognized,
    WellKnown,
    VeryPopular,
    Superstar,
}

impl PopularityCategory {
    pub const ALL: [PopularityCategory; 7] = [
        PopularityCategory::Unknown,
        PopularityCategory::Insignificant,
        PopularityCategory::IndiePopularity,
        PopularityCategory::Recognized,
        PopularityCategory::WellKnown,
        PopularityCategory::VeryPopular,
        PopularityCategory::Superstar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PopularityCategory::Unknown => "Unknown",
            PopularityCategory::Insignificant => "Insignificant",
            PopularityCategory::IndiePopularity => "Indie Popularity",
            PopularityCategory::Recognized => "Recognized",
            PopularityCategory::WellKnown => "Well Known",
            PopularityCategory::VeryPopular => "Very Popular",
            PopularityCategory::Superstar => "Superstar",
        }
    }

    /// Lenient label parse; unknown text maps to `Unknown`.
    pub fn parse_label(text: &str) -> Self {
        let lower = text.trim().to_lowercase();
        PopularityCategory::ALL
            .into_iter()
            .find(|category| category.label().to_lowercase() == lower)
            .unwrap_or(PopularityCategory::Unknown)
    }
}

/// Per-wrestler popularity: one category per region, expanded into the
/// fixed 57-column numeric vector during synthesis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopularityProfile {
    pub categories: BTreeMap<Region, PopularityCategory>,
    pub values: Vec<i64>,
}

/// Language fluency levels (1..=4). English is pinned at 4.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LanguageLevels {
    pub english: u8,
    pub japanese: u8,
    pub spanish: u8,
    pub french: u8,
    pub germanic: u8,
    pub mediterranean: u8,
    pub slavic: u8,
    pub hindi: u8,
}

impl Default for LanguageLevels {
    fn default() -> Self {
        Self {
            english: 4,
            japanese: 1,
            spanish: 1,
            french: 1,
            germanic: 1,
            mediterranean: 1,
            slavic: 1,
            hindi: 1,
        }
    }
}

/// Role/position flags carried on a worker row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoleFlags {
    pub wrestler: bool,
    pub occasional: bool,
    pub referee: bool,
    pub announcer: bool,
    pub colour: bool,
    pub manager: bool,
    pub personality: bool,
    pub road_agent: bool,
}

impl Default for RoleFlags {
    fn default() -> Self {
        Self {
            wrestler: true,
            occasional: false,
            referee: false,
            announcer: false,
            colour: false,
            manager: false,
            personality: false,
            road_agent: false,
        }
    }
}

/// Sampled skill values keyed by skill name, all in 0..=100.
pub type SkillSet = BTreeMap<String, u8>;

/// A fully-synthesized wrestler record, matching the external worker
/// schema field for field. Created once per run, never mutated after
/// persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wrestler {
    pub uid: i64,
    pub name: String,
    pub short_name: String,
    pub gender: Gender,
    pub sexuality: u8,
    pub outside_rel: u8,
    pub birthday: NaiveDate,
    pub debut_date: NaiveDate,
    pub body_type: u8,
    pub height: u8,
    pub weight: i32,
    pub min_weight: i32,
    pub max_weight: i32,
    pub picture: String,
    pub nationality: i32,
    pub race: u8,
    pub based_in: u8,
    pub celebrity: u8,
    pub style: u8,
    pub loyalty: i64,
    pub moveset: i64,
    pub mask: i32,
    pub languages: LanguageLevels,
    pub roles: RoleFlags,
    pub user: bool,
    pub regen: u8,
    pub active: bool,
    pub left_business: bool,
    pub dead: bool,
    pub retired: bool,
    pub non_wrestler: bool,
    pub freelance: bool,
    pub true_born: bool,
    /// Willingness to travel, one flag per region in `Region::ALL` order.
    pub travels: [bool; 8],
    pub organic_bio: bool,
    pub age_matures: u8,
    pub age_declines: u8,
    pub age_talk_declines: u8,
    pub age_retires: u8,
    pub face_gimmick: String,
    pub face_basis: u8,
    pub heel_gimmick: String,
    pub heel_basis: u8,
    pub career_goal: u8,
    pub bio: String,
    pub description: String,
    pub preset_name: String,
    pub skills: SkillSet,
    pub popularity: PopularityProfile,
}

/// A fully-synthesized promotion company record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub uid: i64,
    pub name: String,
    pub initials: String,
    pub url: String,
    pub logo: String,
    pub backdrop: String,
    pub banner: String,
    pub based_in: u8,
    pub prestige: u8,
    pub influence: i32,
    pub money: i64,
    pub size: CompanySize,
    pub momentum: u8,
    pub description: String,
    pub bio: String,
}

/// A contract tying one wrestler to one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub uid: i64,
    pub fed_uid: i64,
    pub worker_uid: i64,
    pub name: String,
    pub short_name: String,
    pub picture: String,
    pub alignment: Alignment,
    pub exclusive: bool,
    /// Mirrors `exclusive` per the external schema's rules.
    pub iron_clad: bool,
    pub written: bool,
    pub began: NaiveDate,
    pub debut: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes_follow_external_schema() {
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 5);
        assert_eq!(Gender::Male.competes_against(), 2);
        assert_eq!(Gender::Female.competes_against(), 3);
        assert_eq!(Gender::Female.pronouns(), 2);
    }

    #[test]
    fn selector_parses_sentinels_case_insensitively() {
        assert_eq!(
            CompanySelector::from("random".to_string()),
            CompanySelector::Random
        );
        assert_eq!(
            CompanySelector::from("Freelancer".to_string()),
            CompanySelector::Freelancer
        );
        assert_eq!(
            CompanySelector::from("Ring Masters".to_string()),
            CompanySelector::Named("Ring Masters".to_string())
        );
    }

    #[test]
    fn popularity_labels_round_trip_and_default_to_unknown() {
        for category in PopularityCategory::ALL {
            assert_eq!(PopularityCategory::parse_label(category.label()), category);
        }
        assert_eq!(
            PopularityCategory::parse_label("mega famous"),
            PopularityCategory::Unknown
        );
    }

    #[test]
    fn region_columns_sum_to_57() {
        let total: usize = Region::ALL.iter().map(|r| r.column_count()).sum();
        assert_eq!(total, 57);
    }

    #[test]
    fn alignment_parse_is_strict_about_ambiguity() {
        assert_eq!(Alignment::parse_label(" Face\n"), Some(Alignment::Face));
        assert_eq!(Alignment::parse_label("a classic HEEL"), Some(Alignment::Heel));
        assert_eq!(Alignment::parse_label("face or heel"), None);
    }
}
