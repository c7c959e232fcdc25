//! Entity parsers.
//!
//! Each parser turns an [`EntityRecord`] into the [`RenderableMapping`] its
//! template consumes. The base parser covers generic entities and projects;
//! Task and Step extend it with their timing fields.

use indexmap::IndexMap;
use tracing::debug;

use entitydoc_comments::{FormatOptions, FormattedComment, format_comment};
use entitydoc_shared::{EntityRecord, RenderableMapping, Result};

/// Extract the fields every entity kind shares.
///
/// `parent_link` uses the empty string as the "no parent" sentinel. Comments
/// are formatted in list order and merged into one insertion-ordered
/// mapping; when a later comment produces a key that already exists, its
/// value overwrites the earlier one in place.
pub fn parse_entity(record: &EntityRecord, opts: &FormatOptions) -> Result<RenderableMapping> {
    let parent = if record.parent_link.is_empty() {
        None
    } else {
        Some(record.parent_link.clone())
    };

    let mut comments: IndexMap<String, String> = IndexMap::new();
    for reference in &record.comments {
        match format_comment(reference, opts)? {
            FormattedComment::Single(entry) => {
                comments.insert(entry.key, entry.value);
            }
            FormattedComment::Many(entries) => {
                for entry in entries {
                    comments.insert(entry.key, entry.value);
                }
            }
        }
    }

    debug!(
        name = %record.name,
        comment_count = comments.len(),
        "parsed entity record"
    );

    Ok(RenderableMapping {
        name: record.name.clone(),
        entity_type: record.entity_type.clone(),
        id: record.id.clone(),
        user: record.user.clone(),
        description: record.description.clone(),
        parent,
        comments,
        children: record.related_links.clone(),
        objective: None,
        process: None,
        start_time: None,
        end_time: None,
    })
}

/// Task parser: the base fields plus objective, process, and timing,
/// copied verbatim from the record.
pub fn parse_task(record: &EntityRecord, opts: &FormatOptions) -> Result<RenderableMapping> {
    let mut mapping = parse_entity(record, opts)?;

    mapping.objective = Some(record.objective.clone().unwrap_or_default());
    mapping.process = Some(record.process.clone().unwrap_or_default());
    mapping.start_time = Some(record.start_time.clone().unwrap_or_default());
    mapping.end_time = Some(record.end_time.clone().unwrap_or_default());

    Ok(mapping)
}

/// Step parser: like Task, but `process` is always the empty string.
///
/// Steps render with the task template, which hides its process section
/// when the field is empty.
pub fn parse_step(record: &EntityRecord, opts: &FormatOptions) -> Result<RenderableMapping> {
    let mut mapping = parse_entity(record, opts)?;

    mapping.objective = Some(record.objective.clone().unwrap_or_default());
    mapping.process = Some(String::new());
    mapping.start_time = Some(record.start_time.clone().unwrap_or_default());
    mapping.end_time = Some(record.end_time.clone().unwrap_or_default());

    Ok(mapping)
}
