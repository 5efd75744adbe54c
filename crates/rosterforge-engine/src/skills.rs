//! Skill sampling from named presets.

use rand::Rng;

use rosterforge_core::preset::{SkillPreset, SkillRange};
use rosterforge_core::record::SkillSet;
use rosterforge_core::schema::SKILL_NAMES;

/// Draw one value per skill in the fixed vocabulary.
///
/// Skills absent from the preset use `fallback`. A pinned range
/// (`min == max`) emits its constant without consuming randomness,
/// which is how base ratings like Respect stay deterministic across
/// runs.
pub fn sample(preset: &SkillPreset, fallback: SkillRange, rng: &mut impl Rng) -> SkillSet {
    let mut skills = SkillSet::new();
    for name in SKILL_NAMES {
        let range = preset.skills.get(name).copied().unwrap_or(fallback);
        let value = if range.is_pinned() {
            range.min
        } else {
            rng.random_range(range.min..=range.max)
        };
        skills.insert(name.to_string(), value.min(100));
    }
    skills
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn fallback() -> SkillRange {
        SkillRange { min: 20, max: 90 }
    }

    #[test]
    fn every_skill_gets_a_value_in_bounds() {
        let preset = SkillPreset::builtin_default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let skills = sample(&preset, fallback(), &mut rng);
        assert_eq!(skills.len(), SKILL_NAMES.len());
        for (name, value) in &skills {
            assert!(*value <= 100, "{name} out of bounds: {value}");
        }
    }

    #[test]
    fn pinned_skills_stay_constant_while_open_ranges_spread() {
        let mut ranges = BTreeMap::new();
        ranges.insert("Brawl".to_string(), SkillRange::pinned(50));
        ranges.insert("Air".to_string(), SkillRange { min: 0, max: 100 });
        let preset = SkillPreset {
            name: "Spread".to_string(),
            skills: ranges,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut air_low = false;
        let mut air_high = false;
        for _ in 0..1000 {
            let skills = sample(&preset, fallback(), &mut rng);
            assert_eq!(skills["Brawl"], 50);
            let air = skills["Air"];
            assert!(air <= 100);
            air_low |= air < 25;
            air_high |= air > 75;
        }
        assert!(air_low && air_high, "Air never spread across its range");
    }

    #[test]
    fn missing_skills_use_the_fallback_range() {
        let preset = SkillPreset {
            name: "Empty".to_string(),
            skills: BTreeMap::new(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..200 {
            let skills = sample(&preset, fallback(), &mut rng);
            for (name, value) in &skills {
                assert!(
                    (20..=90).contains(value),
                    "{name} escaped the fallback range: {value}"
                );
            }
        }
    }
}
