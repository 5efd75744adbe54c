//! Balance constants treated as configuration data.
//!
//! The popularity ranges and the skill fallback range are empirically
//! chosen game-balance numbers. They are deserializable so operators
//! can tune them without code changes; the defaults match the values
//! the consuming simulation was balanced against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::preset::SkillRange;
use crate::record::PopularityCategory;

/// Tunable sampling ranges passed into the engine at run start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Range used for any skill a preset does not mention.
    pub skill_fallback: SkillRange,
    /// Inclusive numeric range per popularity category.
    pub popularity: BTreeMap<PopularityCategory, SkillRange>,
}

impl Tuning {
    /// Range for a category; missing entries behave as `Unknown`.
    pub fn popularity_range(&self, category: PopularityCategory) -> SkillRange {
        self.popularity
            .get(&category)
            .copied()
            .unwrap_or(SkillRange { min: 0, max: 0 })
    }
}

impl Default for Tuning {
    fn default() -> Self {
        let mut popularity = BTreeMap::new();
        popularity.insert(PopularityCategory::Unknown, SkillRange { min: 0, max: 0 });
        popularity.insert(
            PopularityCategory::Insignificant,
            SkillRange { min: 0, max: 15 },
        );
        popularity.insert(
            PopularityCategory::IndiePopularity,
            SkillRange { min: 10, max: 35 },
        );
        popularity.insert(
            PopularityCategory::Recognized,
            SkillRange { min: 20, max: 49 },
        );
        popularity.insert(
            PopularityCategory::WellKnown,
            SkillRange { min: 35, max: 65 },
        );
        popularity.insert(
            PopularityCategory::VeryPopular,
            SkillRange { min: 50, max: 85 },
        );
        popularity.insert(
            PopularityCategory::Superstar,
            SkillRange { min: 75, max: 99 },
        );
        Self {
            skill_fallback: SkillRange { min: 20, max: 90 },
            popularity,
        }
    }
}
