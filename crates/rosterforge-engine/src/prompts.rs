//! Prompt construction for the generation service.
//!
//! Each builder embeds whatever fields are already known so the
//! service fills only the gaps. Structured prompts spell out the
//! exact JSON shape expected; replies that ignore it are handled by
//! the bounded-retry parser.

use rosterforge_core::record::{Alignment, CompanySize, Gender, PopularityCategory, Region};

pub fn wrestler_name(description: Option<&str>, gender: Option<Gender>) -> String {
    let mut prompt =
        "Generate a full name for a professional wrestler. Reply with the name only.".to_string();
    if let Some(description) = description
        && !description.is_empty()
    {
        prompt.push_str(&format!(
            " The wrestler's gimmick or description is: {description}."
        ));
    }
    if let Some(gender) = gender {
        prompt.push_str(&format!(" The wrestler is {}.", gender.label()));
    }
    prompt
}

pub fn company_name(description: Option<&str>, size: CompanySize) -> String {
    let mut prompt =
        "Generate a name for a professional wrestling company. Reply with the name only."
            .to_string();
    if let Some(description) = description
        && !description.is_empty()
    {
        prompt.push_str(&format!(" The company's style or theme is: {description}."));
    }
    prompt.push_str(&format!(" The company is of {} size.", size.label()));
    prompt
}

pub fn company_description(name: &str, size: CompanySize) -> String {
    format!(
        "Generate a one-paragraph description for a professional wrestling company. \
         The company's name is {name}. The company is of {} size.",
        size.label()
    )
}

pub fn company_bio(name: &str, description: &str, size: CompanySize) -> String {
    let mut prompt =
        format!("Create a detailed profile for a professional wrestling company named {name}.");
    if !description.is_empty() {
        prompt.push_str(&format!(" Description: {description}."));
    }
    prompt.push_str(&format!(
        " The company is considered {} in size.",
        size.label()
    ));
    prompt
}

pub fn wrestler_bio(
    template: &str,
    name: &str,
    gender: Gender,
    description: &str,
    preset_name: &str,
) -> String {
    let mut prompt = template.to_string();
    prompt.push_str(&format!(" The wrestler's name is {name}."));
    prompt.push_str(&format!(" Their gender is {}.", gender.label()));
    if !description.is_empty() {
        prompt.push_str(&format!(" Description: {description}."));
    }
    if !preset_name.is_empty() {
        prompt.push_str(&format!(
            " Their wrestling style is best described as {preset_name}."
        ));
    }
    prompt
}

pub fn gimmick(name: &str, description: &str, gender: Gender, alignment: Alignment) -> String {
    let mut prompt = format!(
        "Generate a short wrestling gimmick, a few words at most, for a {} wrestler.",
        alignment.label()
    );
    prompt.push_str(&format!(" The wrestler's name is {name}."));
    if !description.is_empty() {
        prompt.push_str(&format!(" Description: {description}."));
    }
    prompt.push_str(&format!(" Gender: {}.", gender.label()));
    prompt
}

pub fn pick_preset(name: &str, description: &str, gender: Gender, preset_names: &[&str]) -> String {
    let mut prompt = String::from(
        "Based on the following wrestler details, select the most appropriate skill preset from the list.\n",
    );
    prompt.push_str(&format!("Wrestler Name: {name}\n"));
    if !description.is_empty() {
        prompt.push_str(&format!("Description: {description}\n"));
    }
    prompt.push_str(&format!("Gender: {}\n", gender.label()));
    prompt.push_str(&format!(
        "Available Skill Presets: {}\n",
        preset_names.join(", ")
    ));
    prompt.push_str("Provide only the name of the most suitable skill preset.");
    prompt
}

pub fn alignment_choice(name: &str, description: &str) -> String {
    let mut prompt = format!(
        "Is the wrestler {name} better suited as a face or a heel? Reply with exactly one word: face or heel."
    );
    if !description.is_empty() {
        prompt.push_str(&format!(" Description: {description}."));
    }
    prompt
}

pub fn profile_bundle(name: &str, description: &str, gender: Gender) -> String {
    let mut prompt = format!(
        "Classify the professional wrestler {name} ({}).",
        gender.label()
    );
    if !description.is_empty() {
        prompt.push_str(&format!(" Description: {description}."));
    }
    prompt.push_str(
        " Reply with JSON only, no prose, in this exact shape: \
         {\"race\": 1-9, \"style\": 1-17, \"body_type\": 1-7, \
         \"roles\": {\"wrestler\": bool, \"occasional\": bool, \"referee\": bool, \
         \"announcer\": bool, \"colour\": bool, \"manager\": bool, \
         \"personality\": bool, \"road_agent\": bool}, \
         \"languages\": {\"japanese\": 1-4, \"spanish\": 1-4, \"french\": 1-4, \
         \"germanic\": 1-4, \"mediterranean\": 1-4, \"slavic\": 1-4, \"hindi\": 1-4}}",
    );
    prompt
}

pub fn popularity_table(name: &str, description: &str) -> String {
    let regions = Region::ALL
        .iter()
        .map(|region| format!("\"{}\"", region.label()))
        .collect::<Vec<_>>()
        .join(", ");
    let categories = PopularityCategory::ALL
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ");
    let mut prompt = format!("Rate how well known the professional wrestler {name} is.");
    if !description.is_empty() {
        prompt.push_str(&format!(" Description: {description}."));
    }
    prompt.push_str(&format!(
        " Reply with JSON only: an object with the keys {regions}, \
         each mapped to one of: {categories}."
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_are_embedded() {
        let prompt = wrestler_name(Some("a masked luchador"), Some(Gender::Male));
        assert!(prompt.contains("masked luchador"));
        assert!(prompt.contains("male"));

        let bare = wrestler_name(None, None);
        assert!(!bare.contains("description"));
    }

    #[test]
    fn preset_prompt_lists_choices() {
        let prompt = pick_preset("Doom", "", Gender::Female, &["Default", "Giant"]);
        assert!(prompt.contains("Default, Giant"));
        assert!(!prompt.contains("Description:"));
    }
}
