use serde::de::DeserializeOwned;
use tracing::warn;

use crate::client::TextGenerator;

/// Ask for a JSON-structured payload, retrying malformed replies.
///
/// Returns `None` once `attempts` replies have failed to parse; the
/// caller substitutes its documented default. Parse failures never
/// propagate as errors.
pub async fn request_structured<T: DeserializeOwned>(
    generator: &dyn TextGenerator,
    prompt: &str,
    attempts: u32,
) -> Option<T> {
    for attempt in 1..=attempts {
        let response = match generator.complete(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(attempt, error = %err, "generation request failed");
                continue;
            }
        };
        match serde_json::from_str::<T>(strip_fences(&response)) {
            Ok(value) => return Some(value),
            Err(err) => {
                warn!(attempt, error = %err, "structured response did not parse");
            }
        }
    }
    None
}

/// Strip a Markdown code fence if the service wrapped its JSON in one.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
