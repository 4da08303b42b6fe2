//! Project entity model and DTOs.
//!
//! Request DTOs ([`CreateProject`], [`UpdateProject`]) carry raw client input
//! with every field optional. Validation turns them into [`NewProject`] and
//! [`ProjectChanges`], the only types the repository accepts. Counters are
//! not part of either input, so clients can never set them.

use folio_core::project::{
    normalize_tags, validate_category, validate_description, validate_link, validate_status,
    validate_title, validate_visibility, DEFAULT_CATEGORY, DEFAULT_STATUS, DEFAULT_VISIBILITY,
};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: String,
    pub status: String,
    pub image_url: Option<String>,
    pub code_url: Option<String>,
    pub live_url: Option<String>,
    pub likes_count: i64,
    pub views_count: i64,
    pub visibility: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub code_url: Option<String>,
    pub live_url: Option<String>,
    pub visibility: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_archived: Option<bool>,
}

/// A validated project ready for insertion, with defaults applied.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: String,
    pub status: String,
    pub image_url: Option<String>,
    pub code_url: Option<String>,
    pub live_url: Option<String>,
    pub visibility: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_archived: bool,
}

impl CreateProject {
    /// Validate every field and apply defaults.
    ///
    /// All failures are collected so the client sees every problem at once,
    /// joined with `"; "`.
    pub fn validate(self) -> Result<NewProject, String> {
        let mut errors = Vec::new();

        let title = match self.title.as_deref() {
            Some(t) => collect(&mut errors, validate_title(t)),
            None => {
                errors.push("Project title is required".to_string());
                None
            }
        };
        let description = match self.description.as_deref() {
            Some(d) => collect(&mut errors, validate_description(d)),
            None => {
                errors.push("Project description is required".to_string());
                None
            }
        };

        let category = self.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        collect(&mut errors, validate_category(&category));
        let status = self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string());
        collect(&mut errors, validate_status(&status));
        let visibility = self
            .visibility
            .unwrap_or_else(|| DEFAULT_VISIBILITY.to_string());
        collect(&mut errors, validate_visibility(&visibility));

        let image_url = optional_link(&mut errors, "image", self.image_url.as_deref());
        let code_url = optional_link(&mut errors, "code", self.code_url.as_deref());
        let live_url = optional_link(&mut errors, "live", self.live_url.as_deref());

        match (title, description) {
            (Some(title), Some(description)) if errors.is_empty() => Ok(NewProject {
                title,
                description,
                tags: normalize_tags(self.tags.unwrap_or_default()),
                category,
                status,
                image_url,
                code_url,
                live_url,
                visibility,
                start_date: self.start_date,
                end_date: self.end_date,
                is_archived: self.is_archived.unwrap_or(false),
            }),
            _ => Err(errors.join("; ")),
        }
    }
}

/// Request body for a partial project update. Absent fields are unchanged.
///
/// For the link fields an empty string clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub code_url: Option<String>,
    pub live_url: Option<String>,
    pub visibility: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_archived: Option<bool>,
}

/// A validated partial update.
///
/// Link fields use `Some(None)` to mean "clear" and `None` to mean "keep".
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<Option<String>>,
    pub code_url: Option<Option<String>>,
    pub live_url: Option<Option<String>>,
    pub visibility: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_archived: Option<bool>,
}

impl UpdateProject {
    /// Validate the supplied fields only.
    pub fn validate(self) -> Result<ProjectChanges, String> {
        let mut errors = Vec::new();

        let title = self
            .title
            .as_deref()
            .and_then(|t| collect(&mut errors, validate_title(t)));
        let description = self
            .description
            .as_deref()
            .and_then(|d| collect(&mut errors, validate_description(d)));
        if let Some(category) = self.category.as_deref() {
            collect(&mut errors, validate_category(category));
        }
        if let Some(status) = self.status.as_deref() {
            collect(&mut errors, validate_status(status));
        }
        if let Some(visibility) = self.visibility.as_deref() {
            collect(&mut errors, validate_visibility(visibility));
        }

        let image_url = changed_link(&mut errors, "image", self.image_url.as_deref());
        let code_url = changed_link(&mut errors, "code", self.code_url.as_deref());
        let live_url = changed_link(&mut errors, "live", self.live_url.as_deref());

        if !errors.is_empty() {
            return Err(errors.join("; "));
        }

        Ok(ProjectChanges {
            title,
            description,
            tags: self.tags.map(normalize_tags),
            category: self.category,
            status: self.status,
            image_url,
            code_url,
            live_url,
            visibility: self.visibility,
            start_date: self.start_date,
            end_date: self.end_date,
            is_archived: self.is_archived,
        })
    }
}

/// Optional filters for the project listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// Full-text query over title and description, also matching exact tags.
    pub search: Option<String>,
    pub category: Option<String>,
}

fn collect<T>(errors: &mut Vec<String>, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn optional_link(errors: &mut Vec<String>, label: &str, url: Option<&str>) -> Option<String> {
    url.and_then(|u| collect(errors, validate_link(label, u)).flatten())
}

fn changed_link(
    errors: &mut Vec<String>,
    label: &str,
    url: Option<&str>,
) -> Option<Option<String>> {
    url.and_then(|u| collect(errors, validate_link(label, u)))
}
