use crate::models::TagDraft;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_TITLE_LEN: usize = 3;
pub const TITLE_TOO_SHORT: &str = "Minimum 3 characters";

/// Field-level validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Title length in UTF-16 code units, so astral-plane characters count twice
/// the way browser form schemas count them.
pub fn title_len(title: &str) -> usize {
    title.encode_utf16().count()
}

pub fn validate_draft(draft: &TagDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if title_len(&draft.title) < MIN_TITLE_LEN {
        errors.add("title", TITLE_TOO_SHORT);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
