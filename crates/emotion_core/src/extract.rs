//! Turns the model's free-form reply into an `EmotionScoreMap`.
//!
//! The reply is untrusted text. It may be bare JSON or wrapped in a fenced
//! block (labeled or not); everything else about it is checked here.

use crate::domain::{EmotionLabel, EmotionScoreMap};
use crate::error::AnalysisError;
use serde_json::{Map, Value};
use tracing::warn;

/// Removes a surrounding code fence, if any, and trims the remainder.
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Info string such as `json` or `JSON` directly after the opening fence.
    let inner = inner.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let inner = inner.trim_end();
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parses a model reply into a complete, in-range score map.
pub fn parse_reply(reply: &str) -> Result<EmotionScoreMap, AnalysisError> {
    let cleaned = strip_code_fence(reply);
    let value = parse_json(cleaned)?;
    let object = value
        .as_object()
        .ok_or_else(|| format_error("reply is not a JSON object".to_string()))?;
    scores_from_object(object)
}

fn parse_json(cleaned: &str) -> Result<Value, AnalysisError> {
    match serde_json::from_str::<Value>(cleaned) {
        Ok(value) => Ok(value),
        Err(err) => {
            // One repair attempt: the outermost braces, dropping any chatter around them.
            let repaired = match (cleaned.find('{'), cleaned.rfind('}')) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str::<Value>(&cleaned[start..=end]).ok()
                }
                _ => None,
            };
            repaired.ok_or_else(|| format_error(format!("reply is not valid JSON: {}", err)))
        }
    }
}

fn scores_from_object(object: &Map<String, Value>) -> Result<EmotionScoreMap, AnalysisError> {
    if let Some(missing) = EmotionLabel::ALL
        .into_iter()
        .find(|label| !object.contains_key(label.as_str()))
    {
        return Err(format_error(format!("missing score for '{}'", missing)));
    }

    // Reply order is kept: it decides ties and the order scores are reported in.
    let mut entries = Vec::with_capacity(EmotionLabel::ALL.len());
    let mut unknown = Vec::new();
    for (key, value) in object {
        let Some(label) = EmotionLabel::from_label(key) else {
            unknown.push(key.as_str());
            continue;
        };
        let score = value
            .as_f64()
            .ok_or_else(|| format_error(format!("score for '{}' is not a number: {}", label, value)))?;
        if !(0.0..=1.0).contains(&score) {
            return Err(format_error(format!(
                "score for '{}' is outside [0, 1]: {}",
                label, score
            )));
        }
        entries.push((label, score));
    }

    if !unknown.is_empty() {
        warn!(?unknown, "Ignoring unknown labels in model reply");
    }

    EmotionScoreMap::from_ordered(entries)
        .ok_or_else(|| format_error("reply does not score every label exactly once".to_string()))
}

fn format_error(message: String) -> AnalysisError {
    AnalysisError::ResponseFormat(message)
}
