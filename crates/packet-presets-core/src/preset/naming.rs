//! Preset naming, display truncation and id generation.

use rand::Rng;

use super::model::PresetCollection;

/// Names longer than this are cut down in confirmation prompts.
pub const DISPLAY_NAME_LIMIT: usize = 30;

const ID_TOKEN_LEN: usize = 3;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Trims user input. `None` means there is nothing to save.
pub fn normalize_name(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Returns `base` if unused, otherwise the first free `"base (n)"` for n = 2, 3, ...
pub fn resolve_unique_name(base: &str, collection: &PresetCollection) -> String {
    let mut candidate = base.to_string();
    let mut counter = 2usize;
    while collection.contains_name(&candidate) {
        candidate = format!("{base} ({counter})");
        counter += 1;
    }
    candidate
}

/// Name as shown inside modal prompts: at most 30 characters, then "...".
pub fn display_name(name: &str) -> String {
    if name.chars().count() > DISPLAY_NAME_LIMIT {
        let head: String = name.chars().take(DISPLAY_NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Builds a new opaque id: `preset_<unix millis>_<3 base36 chars>`.
///
/// No check against existing ids is made; the millisecond timestamp already
/// separates any two saves a user can trigger.
pub fn generate_preset_id() -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let token: String = (0..ID_TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("preset_{timestamp}_{token}")
}
