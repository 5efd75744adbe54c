//! Named, reusable per-skill sampling ranges.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::SKILL_NAMES;

/// Inclusive sampling range for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRange {
    pub min: u8,
    pub max: u8,
}

impl SkillRange {
    pub fn pinned(value: u8) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn is_pinned(self) -> bool {
        self.min == self.max
    }
}

/// A named template of per-skill ranges, persisted independently of
/// any wrestler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPreset {
    pub name: String,
    pub skills: BTreeMap<String, SkillRange>,
}

impl SkillPreset {
    /// Enforce the creation-time invariants: non-empty name, known
    /// skill names, `min <= max`, and values in 0..=100.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidPreset("preset name cannot be empty".into()));
        }
        for (skill, range) in &self.skills {
            if !SKILL_NAMES.contains(&skill.as_str()) {
                return Err(Error::InvalidPreset(format!(
                    "'{}': unknown skill '{skill}'",
                    self.name
                )));
            }
            if range.min > range.max {
                return Err(Error::InvalidPreset(format!(
                    "'{}': skill '{skill}' has min {} > max {}",
                    self.name, range.min, range.max
                )));
            }
            if range.max > 100 {
                return Err(Error::InvalidPreset(format!(
                    "'{}': skill '{skill}' exceeds 100",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// The built-in preset: base ratings pinned to the values the
    /// consuming simulation expects for a generic newcomer.
    pub fn builtin_default() -> Self {
        let pinned: &[(&str, u8)] = &[
            ("Respect", 100),
            ("Reputation", 100),
            ("Announcing", 0),
            ("Colour", 0),
            ("Refereeing", 0),
            ("Experience", 100),
            ("PotentialPrimary", 0),
            ("PotentialMental", 0),
            ("PotentialPerformance", 0),
            ("PotentialFundamental", 0),
            ("PotentialPhysical", 0),
            ("PotentialAnnouncing", 0),
            ("PotentialColour", 0),
            ("PotentialRefereeing", 0),
            ("ScoutRing", 6),
            ("ScoutPhysical", 6),
            ("ScoutEnt", 6),
            ("ScoutBroadcast", 6),
            ("ScoutRef", 6),
        ];
        let mut skills = BTreeMap::new();
        for name in SKILL_NAMES {
            let range = pinned
                .iter()
                .find(|(pinned_name, _)| *pinned_name == name)
                .map(|(_, value)| SkillRange::pinned(*value))
                .unwrap_or(SkillRange { min: 20, max: 90 });
            skills.insert(name.to_string(), range);
        }
        Self {
            name: "Default".to_string(),
            skills,
        }
    }
}

/// The operator's preset collection, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetLibrary {
    pub presets: Vec<SkillPreset>,
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self {
            presets: vec![SkillPreset::builtin_default()],
        }
    }
}

impl PresetLibrary {
    pub fn find(&self, name: &str) -> Option<&SkillPreset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Requested preset, or the `Default` preset when the name is
    /// unknown. A library missing `Default` (an operator can empty the
    /// file by hand) falls back to the built-in copy.
    pub fn find_or_default(&self, name: &str) -> &SkillPreset {
        static BUILTIN: LazyLock<SkillPreset> = LazyLock::new(SkillPreset::builtin_default);
        self.find(name)
            .or_else(|| self.find("Default"))
            .unwrap_or(&*BUILTIN)
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|preset| preset.name.as_str()).collect()
    }

    pub fn add(&mut self, preset: SkillPreset) -> Result<()> {
        preset.validate()?;
        if self.find(&preset.name).is_some() {
            return Err(Error::InvalidPreset(format!(
                "a preset named '{}' already exists",
                preset.name
            )));
        }
        self.presets.push(preset);
        Ok(())
    }

    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut library: PresetLibrary = serde_json::from_str(&content)?;
            for preset in &library.presets {
                preset.validate()?;
            }
            // Hand-edited files can drop the Default preset; restore it.
            if library.find("Default").is_none() {
                library.presets.insert(0, SkillPreset::builtin_default());
            }
            return Ok(library);
        }
        let library = Self::default();
        library.save(path)?;
        Ok(library)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_default_pins_base_ratings() {
        let preset = SkillPreset::builtin_default();
        preset.validate().expect("builtin preset is valid");
        assert_eq!(preset.skills["Respect"], SkillRange::pinned(100));
        assert_eq!(preset.skills["ScoutRef"], SkillRange::pinned(6));
        assert_eq!(preset.skills["Brawl"], SkillRange { min: 20, max: 90 });
        assert_eq!(preset.skills.len(), SKILL_NAMES.len());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let mut preset = SkillPreset::builtin_default();
        preset
            .skills
            .insert("Brawl".to_string(), SkillRange { min: 80, max: 20 });
        assert!(matches!(preset.validate(), Err(Error::InvalidPreset(_))));
    }

    #[test]
    fn validate_rejects_unknown_skill() {
        let mut preset = SkillPreset::builtin_default();
        preset
            .skills
            .insert("Juggling".to_string(), SkillRange { min: 0, max: 10 });
        assert!(matches!(preset.validate(), Err(Error::InvalidPreset(_))));
    }

    #[test]
    fn library_rejects_duplicate_names() {
        let mut library = PresetLibrary::default();
        let err = library.add(SkillPreset::builtin_default());
        assert!(matches!(err, Err(Error::InvalidPreset(_))));
    }

    #[test]
    fn library_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("skill_presets.json");
        let first = PresetLibrary::load_or_create(&path).expect("create");
        assert!(path.exists());
        let second = PresetLibrary::load_or_create(&path).expect("reload");
        assert_eq!(first.names(), second.names());
    }

    #[test]
    fn find_or_default_falls_back_to_default_preset() {
        let library = PresetLibrary::default();
        assert_eq!(library.find_or_default("High Flyer").name, "Default");
    }

    #[test]
    fn an_emptied_library_still_resolves_presets() {
        let library = PresetLibrary { presets: vec![] };
        assert_eq!(library.find_or_default("anything").name, "Default");
    }

    #[test]
    fn loading_an_emptied_file_restores_the_default_preset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("skill_presets.json");
        std::fs::write(&path, r#"{"presets": []}"#).expect("write");

        let library = PresetLibrary::load_or_create(&path).expect("load");
        assert!(library.find("Default").is_some());
        assert_eq!(library.find_or_default("anything").name, "Default");
    }
}
