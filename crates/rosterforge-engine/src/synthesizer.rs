//! Attribute synthesis: the bridge between the generation service and
//! fully-populated records.
//!
//! Every method here either returns what the service produced or a
//! documented default; none of them can fail the run. Free-text asks
//! retry up to the configured attempt budget, structured asks go
//! through [`request_structured`] and fall back to `Default` values.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use serde::Deserialize;
use tracing::warn;

use rosterforge_core::preset::{PresetLibrary, SkillPreset};
use rosterforge_core::record::{
    Alignment, CompanySize, Gender, LanguageLevels, PopularityCategory, Region, RoleFlags,
};
use rosterforge_core::schema::widths;
use rosterforge_core::{clamp_byte, fit};
use rosterforge_llm::{TextGenerator, request_structured};

use crate::model::RunReport;
use crate::prompts;

/// Fallback age bounds when the service cannot estimate one.
const FALLBACK_AGE_MIN: u32 = 18;
const FALLBACK_AGE_MAX: u32 = 48;

/// Structured reply for the profile classification ask. Out-of-range
/// values are clamped into the schema's enumerations, so a
/// half-garbage reply still yields a usable bundle.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileBundle {
    pub race: i64,
    pub style: i64,
    pub body_type: i64,
    pub roles: RoleBundle,
    pub languages: LanguageBundle,
}

impl Default for ProfileBundle {
    fn default() -> Self {
        Self {
            race: 1,
            style: 1,
            body_type: 4,
            roles: RoleBundle::default(),
            languages: LanguageBundle::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoleBundle {
    pub wrestler: bool,
    pub occasional: bool,
    pub referee: bool,
    pub announcer: bool,
    pub colour: bool,
    pub manager: bool,
    pub personality: bool,
    pub road_agent: bool,
}

impl Default for RoleBundle {
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

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageBundle {
    pub japanese: i64,
    pub spanish: i64,
    pub french: i64,
    pub germanic: i64,
    pub mediterranean: i64,
    pub slavic: i64,
    pub hindi: i64,
}

impl Default for LanguageBundle {
    fn default() -> Self {
        Self {
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

impl ProfileBundle {
    pub fn race_code(&self) -> u8 {
        clamp_enum(self.race, 1, 9)
    }

    pub fn style_code(&self) -> u8 {
        clamp_enum(self.style, 1, 17)
    }

    pub fn body_type_code(&self) -> u8 {
        clamp_enum(self.body_type, 1, 7)
    }

    pub fn role_flags(&self) -> RoleFlags {
        RoleFlags {
            wrestler: self.roles.wrestler,
            occasional: self.roles.occasional,
            referee: self.roles.referee,
            announcer: self.roles.announcer,
            colour: self.roles.colour,
            manager: self.roles.manager,
            personality: self.roles.personality,
            road_agent: self.roles.road_agent,
        }
    }

    /// English fluency is pinned at the maximum regardless of the reply.
    pub fn language_levels(&self) -> LanguageLevels {
        LanguageLevels {
            english: 4,
            japanese: clamp_enum(self.languages.japanese, 1, 4),
            spanish: clamp_enum(self.languages.spanish, 1, 4),
            french: clamp_enum(self.languages.french, 1, 4),
            germanic: clamp_enum(self.languages.germanic, 1, 4),
            mediterranean: clamp_enum(self.languages.mediterranean, 1, 4),
            slavic: clamp_enum(self.languages.slavic, 1, 4),
            hindi: clamp_enum(self.languages.hindi, 1, 4),
        }
    }
}

fn clamp_enum(value: i64, min: u8, max: u8) -> u8 {
    clamp_byte(value).clamp(min, max)
}

#[derive(Debug, Deserialize)]
struct AgeGuess {
    age: i64,
}

/// Derive the on-disk picture filename from a display name: lowercase,
/// spaces removed, stem truncated to the schema budget.
pub fn picture_name(name: &str) -> String {
    let stem: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("{}.jpg", fit(&stem, widths::PICTURE_STEM))
}

/// Company initials: the first letter of each word, or the first three
/// characters when the name is a single word.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let raw = if words.len() > 1 {
        words
            .iter()
            .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
            .collect::<String>()
    } else {
        name.chars().take(3).collect::<String>()
    };
    fit(&raw.to_uppercase(), widths::INITIALS)
}

fn company_stem(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

pub fn company_url(name: &str) -> String {
    fit(&format!("www.{}.com", company_stem(name)), widths::URL)
}

pub fn company_logo(name: &str) -> String {
    format!("{}.jpg", fit(&company_stem(name), widths::LOGO - 4))
}

pub fn company_backdrop(name: &str) -> String {
    format!("{}BD.jpg", fit(&company_stem(name), widths::BACKDROP - 6))
}

pub fn company_banner(name: &str) -> String {
    format!(
        "{}Banner.jpg",
        fit(&company_stem(name), widths::BANNER - 10)
    )
}

/// Stateless front end over the generation service. All fallbacks are
/// counted on the run report so operators can see how much of a roster
/// was defaulted.
pub struct AttributeSynthesizer {
    generator: Arc<dyn TextGenerator>,
    attempts: u32,
}

impl AttributeSynthesizer {
    pub fn new(generator: Arc<dyn TextGenerator>, attempts: u32) -> Self {
        Self {
            generator,
            attempts: attempts.max(1),
        }
    }

    /// Free-text ask with the bounded retry budget. `None` means every
    /// attempt failed and the caller's default applies.
    async fn text(&self, prompt: &str, report: &mut RunReport) -> Option<String> {
        for attempt in 1..=self.attempts {
            report.record_llm_request();
            match self.generator.complete(prompt).await {
                Ok(reply) => {
                    let reply = reply.trim().trim_matches('"').to_string();
                    if !reply.is_empty() {
                        return Some(reply);
                    }
                    warn!(attempt, "generation service returned an empty reply");
                }
                Err(err) => warn!(attempt, error = %err, "generation request failed"),
            }
        }
        report.record_fallback();
        None
    }

    async fn structured<T: serde::de::DeserializeOwned>(
        &self,
        prompt: &str,
        report: &mut RunReport,
    ) -> Option<T> {
        report.record_llm_request();
        let value = request_structured(self.generator.as_ref(), prompt, self.attempts).await;
        if value.is_none() {
            report.record_fallback();
        }
        value
    }

    pub async fn wrestler_name(
        &self,
        description: Option<&str>,
        gender: Option<Gender>,
        uid: i64,
        report: &mut RunReport,
    ) -> String {
        let prompt = prompts::wrestler_name(description, gender);
        match self.text(&prompt, report).await {
            Some(name) => fit(&name, widths::NAME),
            None => format!("Worker {uid}"),
        }
    }

    pub async fn company_name(
        &self,
        description: Option<&str>,
        size: CompanySize,
        uid: i64,
        report: &mut RunReport,
    ) -> String {
        let prompt = prompts::company_name(description, size);
        match self.text(&prompt, report).await {
            Some(name) => fit(&name, widths::NAME),
            None => format!("Company {uid}"),
        }
    }

    pub async fn company_description(
        &self,
        name: &str,
        size: CompanySize,
        report: &mut RunReport,
    ) -> String {
        let prompt = prompts::company_description(name, size);
        self.text(&prompt, report).await.unwrap_or_default()
    }

    pub async fn company_bio(
        &self,
        name: &str,
        description: &str,
        size: CompanySize,
        report: &mut RunReport,
    ) -> String {
        let prompt = prompts::company_bio(name, description, size);
        self.text(&prompt, report).await.unwrap_or_default()
    }

    pub async fn wrestler_bio(
        &self,
        template: &str,
        name: &str,
        gender: Gender,
        description: &str,
        preset_name: &str,
        report: &mut RunReport,
    ) -> String {
        let prompt = prompts::wrestler_bio(template, name, gender, description, preset_name);
        self.text(&prompt, report).await.unwrap_or_default()
    }

    pub async fn gimmick(
        &self,
        name: &str,
        description: &str,
        gender: Gender,
        alignment: Alignment,
        report: &mut RunReport,
    ) -> String {
        let prompt = prompts::gimmick(name, description, gender, alignment);
        match self.text(&prompt, report).await {
            Some(gimmick) => fit(&gimmick, widths::GIMMICK),
            None => String::new(),
        }
    }

    /// Binary face/heel choice. Ambiguous or failed replies fall back
    /// to a fair coin.
    pub async fn alignment(
        &self,
        name: &str,
        description: &str,
        rng: &mut impl Rng,
        report: &mut RunReport,
    ) -> Alignment {
        let prompt = prompts::alignment_choice(name, description);
        if let Some(reply) = self.text(&prompt, report).await
            && let Some(alignment) = Alignment::parse_label(&reply)
        {
            return alignment;
        }
        if rng.random_bool(0.5) {
            Alignment::Face
        } else {
            Alignment::Heel
        }
    }

    /// Ask the service to pick a preset from the library by name. An
    /// unrecognized pick degrades to the library default.
    pub async fn pick_preset(
        &self,
        library: &PresetLibrary,
        name: &str,
        description: &str,
        gender: Gender,
        report: &mut RunReport,
    ) -> SkillPreset {
        let names = library.names();
        let prompt = prompts::pick_preset(name, description, gender, &names);
        let pick = self.text(&prompt, report).await.unwrap_or_default();
        library.find_or_default(&pick).clone()
    }

    pub async fn profile(
        &self,
        name: &str,
        description: &str,
        gender: Gender,
        report: &mut RunReport,
    ) -> ProfileBundle {
        let prompt = prompts::profile_bundle(name, description, gender);
        self.structured(&prompt, report).await.unwrap_or_default()
    }

    /// Region-keyed popularity categories. Unknown region keys are
    /// dropped, unknown category labels collapse to `Unknown`, and a
    /// wholesale parse failure yields an empty map (every region
    /// `Unknown`).
    pub async fn popularity_categories(
        &self,
        name: &str,
        description: &str,
        report: &mut RunReport,
    ) -> BTreeMap<Region, PopularityCategory> {
        let prompt = prompts::popularity_table(name, description);
        let raw: Option<BTreeMap<String, String>> = self.structured(&prompt, report).await;
        let mut categories = BTreeMap::new();
        for (key, label) in raw.unwrap_or_default() {
            match Region::parse_label(&key) {
                Some(region) => {
                    categories.insert(region, PopularityCategory::parse_label(&label));
                }
                None => warn!(region = %key, "unrecognized popularity region dropped"),
            }
        }
        categories
    }

    /// Estimated age at campaign start, clamped to a plausible span.
    pub async fn age(
        &self,
        name: &str,
        description: &str,
        rng: &mut impl Rng,
        report: &mut RunReport,
    ) -> u32 {
        let mut prompt = format!(
            "Estimate the age in years of the professional wrestler {name}. \
             Reply with JSON only: {{\"age\": <integer>}}."
        );
        if !description.is_empty() {
            prompt.push_str(&format!(" Description: {description}."));
        }
        match self.structured::<AgeGuess>(&prompt, report).await {
            Some(guess) => guess.age.clamp(16, 80) as u32,
            None => rng.random_range(FALLBACK_AGE_MIN..=FALLBACK_AGE_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_clamps_out_of_range_codes() {
        let bundle: ProfileBundle =
            serde_json::from_str(r#"{"race": 40, "style": 0, "body_type": -2}"#).expect("parse");
        assert_eq!(bundle.race_code(), 9);
        assert_eq!(bundle.style_code(), 1);
        assert_eq!(bundle.body_type_code(), 1);
        // Omitted sections fall back to the documented defaults.
        assert!(bundle.role_flags().wrestler);
        assert_eq!(bundle.language_levels().english, 4);
    }

    #[test]
    fn bundle_default_is_an_active_english_speaking_wrestler() {
        let bundle = ProfileBundle::default();
        assert_eq!(bundle.race_code(), 1);
        assert_eq!(bundle.body_type_code(), 4);
        let roles = bundle.role_flags();
        assert!(roles.wrestler);
        assert!(!roles.referee);
        let languages = bundle.language_levels();
        assert_eq!(languages.english, 4);
        assert_eq!(languages.hindi, 1);
    }

    #[test]
    fn english_is_pinned_even_when_the_reply_downgrades_it() {
        let bundle: ProfileBundle =
            serde_json::from_str(r#"{"languages": {"japanese": 9, "hindi": 0}}"#).expect("parse");
        let languages = bundle.language_levels();
        assert_eq!(languages.english, 4);
        assert_eq!(languages.japanese, 4);
        assert_eq!(languages.hindi, 1);
    }

    #[test]
    fn picture_names_are_lowercase_and_budgeted() {
        assert_eq!(picture_name("Rico Steel"), "ricosteel.jpg");
        let long = picture_name("A Very Long Ring Name That Keeps Going And Going");
        assert!(long.ends_with(".jpg"));
        assert!(long.len() <= widths::PICTURE_STEM + 4);
    }

    #[test]
    fn initials_handle_single_and_multi_word_names() {
        assert_eq!(initials("Global Wrestling Alliance"), "GWA");
        assert_eq!(initials("Slam"), "SLA");
    }

    #[test]
    fn company_artwork_names_derive_from_the_stem() {
        assert_eq!(company_url("Ring Masters"), "www.ringmasters.com");
        assert_eq!(company_logo("Ring Masters"), "ringmasters.jpg");
        assert_eq!(company_backdrop("Ring Masters"), "ringmastersBD.jpg");
        assert_eq!(company_banner("Ring Masters"), "ringmastersBanner.jpg");
    }
}
