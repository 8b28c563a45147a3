use std::sync::OnceLock;

use regex::Regex;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Rejections produced before any store round-trip.
///
/// The `Display` text is the exact message returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be under 100 characters")]
    TitleTooLong,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description must be under 500 characters")]
    DescriptionTooLong,

    #[error("ID is required")]
    IdRequired,

    #[error("Invalid ID format")]
    InvalidIdFormat,
}

fn object_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-f]{24}$").expect("object id pattern is valid"))
}

fn is_missing(value: Option<&str>) -> bool {
    value.map(str::is_empty).unwrap_or(true)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

fn exceeds(value: Option<&str>, max_chars: usize) -> bool {
    value.map(|v| v.chars().count() > max_chars).unwrap_or(false)
}

/// Checks a topic payload. Title rules run before description rules and the
/// first violation is reported. A whitespace-only title counts as missing; the
/// description only has to be non-empty.
pub fn validate_topic(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    if is_blank(title) {
        return Err(ValidationError::TitleRequired);
    }

    if exceeds(title, TITLE_MAX_CHARS) {
        return Err(ValidationError::TitleTooLong);
    }

    if is_missing(description) {
        return Err(ValidationError::DescriptionRequired);
    }

    if exceeds(description, DESCRIPTION_MAX_CHARS) {
        return Err(ValidationError::DescriptionTooLong);
    }

    Ok(())
}

/// Checks that `id` looks like a document store identifier (24 lowercase hex chars).
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::IdRequired);
    }

    if !object_id_pattern().is_match(id) {
        return Err(ValidationError::InvalidIdFormat);
    }

    Ok(())
}
