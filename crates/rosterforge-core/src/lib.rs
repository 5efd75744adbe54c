//! Core contracts and helpers for Rosterforge.
//!
//! This crate defines the domain records, the fixed external column
//! layouts the sinks must reproduce, sink-native boolean encodings,
//! skill presets, and the tunable balance constants shared across the
//! engine and the persistence crates.

pub mod error;
pub mod ids;
pub mod normalize;
pub mod preset;
pub mod record;
pub mod schema;
pub mod tuning;

pub use error::{Error, Result};
pub use ids::{EntityClass, IdSource};
pub use normalize::{BoolEncoding, Value, clamp_byte, fit};
pub use preset::{PresetLibrary, SkillPreset, SkillRange};
pub use record::{
    Alignment, Company, CompanySelector, CompanySize, Contract, Gender, LanguageLevels,
    PopularityCategory, PopularityProfile, Region, RoleFlags, SkillSet, UNNEGOTIATED_MONEY,
    Wrestler, contract_debut_date, not_applicable_date,
};
pub use tuning::Tuning;
