//! Core domain types for entitydoc records and rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EntityRecord
// ---------------------------------------------------------------------------

/// A parsed entity record, as stored in the source TOML file.
///
/// Every entity kind shares the base fields; `objective`, `process`,
/// `start_time`, and `end_time` are only present for Task and Step records.
/// Times are kept as plain strings and copied through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Display name of the entity.
    pub name: String,
    /// Entity kind name, dispatched through the renderer registry.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Stable identifier assigned when the entity was created.
    #[serde(rename = "ID")]
    pub id: String,
    /// User the entity belongs to.
    pub user: String,
    /// Free-form description.
    pub description: String,
    /// Link to the parent entity; the empty string means "no parent".
    pub parent_link: String,
    /// Attached comments: file paths, directory paths, or literal text.
    pub comments: Vec<String>,
    /// Links to child entities, copied verbatim into the rendered output.
    pub related_links: Vec<String>,

    /// Task/Step only.
    #[serde(default)]
    pub objective: Option<String>,
    /// Task only (Step records ignore it).
    #[serde(default)]
    pub process: Option<String>,
    /// Task/Step only.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Task/Step only.
    #[serde(default)]
    pub end_time: Option<String>,
}

// ---------------------------------------------------------------------------
// RenderableMapping
// ---------------------------------------------------------------------------

/// The flat field set handed to the template engine.
///
/// Serialized field names match what the templates expect (`type`, `ID`);
/// the Task/Step additions are omitted entirely for base entities so the
/// mapping stays minimal for the entity template.
#[derive(Debug, Clone, Serialize)]
pub struct RenderableMapping {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub user: String,
    pub description: String,
    /// `None` when the record's `parent_link` was empty.
    pub parent: Option<String>,
    /// Formatted comments in insertion order; a later duplicate key
    /// overwrites the earlier value without moving it.
    pub comments: IndexMap<String, String>,
    /// The record's `related_links`, verbatim.
    pub children: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}
