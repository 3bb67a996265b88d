//! Identifier formatting: case conversion, sanitizing and collision
//! detection for generated constants.

use std::collections::HashSet;

use crate::config::CaseConvention;
use crate::error::GenerationError;

/// Meta fields every generated artifact defines for itself. A term whose
/// formatted identifier lands on one of these is renamed by [`clean`].
pub const META_FIELDS: [&str; 2] = ["NAMESPACE", "PREFIX"];

/// Apply a case convention to a raw local name.
pub fn format(raw: &str, convention: CaseConvention) -> String {
    if convention == CaseConvention::Unmodified {
        return raw.to_string();
    }
    let words = split_words(raw);
    match convention {
        CaseConvention::Unmodified => raw.to_string(),
        CaseConvention::UpperSnake => words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        CaseConvention::LowerSnake => words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),
        CaseConvention::UpperCamel => words.iter().map(|w| capitalize(w)).collect(),
        CaseConvention::LowerCamel => {
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_lowercase());
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
    }
}

/// Replace characters illegal in a target-language identifier, keep the
/// result from starting with a digit, and steer clear of the backend's
/// reserved words and the artifact's own meta fields.
pub fn clean(identifier: &str, reserved: &[&str]) -> String {
    let mut out = String::with_capacity(identifier.len());
    for c in identifier.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    while reserved.contains(&out.as_str()) || META_FIELDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// Tracks identifiers emitted into one generated container; rejects
/// duplicates and self-shadowing of the container name.
#[derive(Debug, Default)]
pub struct FieldGuard {
    seen: HashSet<String>,
}

impl FieldGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, container: &str, field: &str) -> Result<(), GenerationError> {
        if field == container || !self.seen.insert(field.to_string()) {
            return Err(GenerationError::FieldCollision {
                container: container.to_string(),
                field: field.to_string(),
            });
        }
        Ok(())
    }
}

/// Split a raw key into words at non-alphanumeric separators and camel-case
/// boundaries. Acronym runs stay together: "HTMLParser" -> ["HTML", "Parser"].
fn split_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if lower_to_upper || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
