//! Project field constants and validation.
//!
//! Categories, statuses, and visibilities are closed sets stored as text. The
//! same lists back the CHECK constraints in the `projects` migration, so the
//! two must be kept in sync.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;

pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const DEFAULT_CATEGORY: &str = "other";

pub const VALID_CATEGORIES: &[&str] = &[
    "web",
    "mobile",
    "desktop",
    "cyber-security",
    "ai",
    "ml",
    "data-science",
    "api",
    "automation",
    "devops",
    "blockchain",
    "iot",
    "game-dev",
    "cloud",
    "python",
    "javascript",
    "java",
    "c++",
    "other",
];

pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Known project status values.
pub mod statuses {
    pub const PLANNING: &str = "planning";
    pub const IN_PROGRESS: &str = "in-progress";
    pub const COMPLETED: &str = "completed";
    pub const ON_HOLD: &str = "on-hold";
    pub const CANCELLED: &str = "cancelled";
}

pub const DEFAULT_STATUS: &str = statuses::PLANNING;

pub const VALID_STATUSES: &[&str] = &[
    statuses::PLANNING,
    statuses::IN_PROGRESS,
    statuses::COMPLETED,
    statuses::ON_HOLD,
    statuses::CANCELLED,
];

pub fn is_valid_status(status: &str) -> bool {
    VALID_STATUSES.contains(&status)
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

pub const DEFAULT_VISIBILITY: &str = "public";

pub const VALID_VISIBILITIES: &[&str] = &["public", "private", "unlisted"];

pub fn is_valid_visibility(visibility: &str) -> bool {
    VALID_VISIBILITIES.contains(&visibility)
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("valid regex"));

/// Trim and length-check a title. Returns the trimmed value.
pub fn validate_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Project title is required".to_string());
    }
    check_length("title", trimmed, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;
    Ok(trimmed.to_string())
}

/// Trim and length-check a description. Returns the trimmed value.
pub fn validate_description(description: &str) -> Result<String, String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err("Project description is required".to_string());
    }
    check_length(
        "description",
        trimmed,
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    )?;
    Ok(trimmed.to_string())
}

pub fn validate_category(category: &str) -> Result<(), String> {
    if !is_valid_category(category) {
        return Err(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ));
    }
    Ok(())
}

pub fn validate_status(status: &str) -> Result<(), String> {
    if !is_valid_status(status) {
        return Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ));
    }
    Ok(())
}

pub fn validate_visibility(visibility: &str) -> Result<(), String> {
    if !is_valid_visibility(visibility) {
        return Err(format!(
            "Invalid visibility '{visibility}'. Must be one of: {}",
            VALID_VISIBILITIES.join(", ")
        ));
    }
    Ok(())
}

/// Validate an optional link field (`image`, `code`, `live`).
///
/// Blank input is treated as absent and yields `Ok(None)`.
pub fn validate_link(label: &str, url: &str) -> Result<Option<String>, String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !HTTP_URL_RE.is_match(trimmed) {
        return Err(format!("Please provide a valid {label} URL"));
    }
    Ok(Some(trimmed.to_string()))
}

/// Trim every tag and drop the ones left empty. Order is preserved.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("Project {field} must be at least {min} characters"));
    }
    if len > max {
        return Err(format!("Project {field} must be at most {max} characters"));
    }
    Ok(())
}
