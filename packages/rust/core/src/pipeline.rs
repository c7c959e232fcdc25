//! End-to-end `generate` pipeline: TOML record → parse → render → file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use entitydoc_comments::FormatOptions;
use entitydoc_render::{TemplateEngine, lookup};
use entitydoc_shared::{EntityRecord, EntitydocError, Result};

/// Options for a `generate` run.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Directory with template overrides.
    pub templates_dir: Option<PathBuf>,
    /// Comment formatting options.
    pub format: FormatOptions,
}

/// Result of generating one markdown document.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path of the written markdown file.
    pub output_path: PathBuf,
    /// The record's entity-type name.
    pub entity_type: String,
    /// The record's display name.
    pub name: String,
}

/// Generate a markdown document from an entity TOML file.
///
/// The source wraps the record in a single outer table whose key is
/// discarded. The output file is named after the source's stem and written
/// under `target_dir`, or the current working directory when no target is
/// given. Nothing is written until parsing and rendering have completed.
#[instrument(skip_all, fields(source = %source.display()))]
pub fn generate(
    source: &Path,
    target_dir: Option<&Path>,
    options: &RenderOptions,
) -> Result<GenerateResult> {
    let raw = fs::read_to_string(source).map_err(|e| EntitydocError::io(source, e))?;

    let table: toml::Table = toml::from_str(&raw)
        .map_err(|e| EntitydocError::parse(format!("{}: {e}", source.display())))?;

    // The record sits under one synthetic outer key; its name is irrelevant.
    let (_, inner) = table.into_iter().next().ok_or_else(|| {
        EntitydocError::parse(format!("{}: no entity table found", source.display()))
    })?;

    let record: EntityRecord = inner
        .try_into()
        .map_err(|e| EntitydocError::parse(format!("{}: {e}", source.display())))?;

    let renderer = lookup(&record.entity_type)?;
    let mapping = renderer.parse(&record, &options.format)?;

    let engine = TemplateEngine::new(options.templates_dir.as_deref())?;
    let rendered = engine.render(renderer.template, &mapping)?;

    let target_dir = match target_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|e| EntitydocError::io(".", e))?,
    };
    fs::create_dir_all(&target_dir).map_err(|e| EntitydocError::io(&target_dir, e))?;

    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            EntitydocError::parse(format!("{}: source has no file stem", source.display()))
        })?;
    let output_path = target_dir.join(format!("{stem}.md"));

    fs::write(&output_path, &rendered).map_err(|e| EntitydocError::io(&output_path, e))?;

    info!(
        entity_type = %record.entity_type,
        name = %record.name,
        output = %output_path.display(),
        "generated markdown document"
    );

    Ok(GenerateResult {
        output_path,
        entity_type: record.entity_type,
        name: record.name,
    })
}
