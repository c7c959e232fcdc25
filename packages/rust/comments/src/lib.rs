//! Comment classification and markdown formatting.
//!
//! An entity record's `comments` list holds free-form references: literal
//! text, paths to markdown or image files, or paths to whole directories of
//! such files. [`classify`] decides what a reference is by inspecting the
//! filesystem, and [`format_comment`] turns it into `(key, value)` pairs of
//! markdown-ready content.

mod walk;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use entitydoc_shared::{EntitydocError, ImagePathStrategy, Result};

/// Fallback asset directory for the `resource` image path strategy.
const DEFAULT_RESOURCE_DIR: &str = "resources";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// What a comment reference turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// An existing `.md` file, embedded verbatim.
    Markdown,
    /// A literal string that is not a path to anything on disk.
    PlainText,
    /// An existing directory, flattened file by file.
    Directory,
    /// An existing `.jpg`/`.png` file, embedded as an image directive.
    Image,
}

/// One formatted comment: a section key and its markdown-ready value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub key: String,
    pub value: String,
}

/// Result of formatting one comment reference. Directory references expand
/// to an ordered list of entries; everything else yields a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedComment {
    Single(CommentEntry),
    Many(Vec<CommentEntry>),
}

/// Options controlling comment formatting.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// How image directive targets are written.
    pub image_paths: ImagePathStrategy,
    /// Asset directory for [`ImagePathStrategy::Resource`]; defaults to
    /// `resources` when unset.
    pub resource_dir: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a comment reference by inspecting the filesystem.
///
/// An existing directory is [`CommentKind::Directory`]; an existing file is
/// mapped by extension (case-insensitive: `md`, `jpg`, `png`) and anything
/// else fails with [`EntitydocError::UnsupportedComment`]. A reference that
/// names nothing on disk is literal text.
pub fn classify(reference: impl AsRef<Path>) -> Result<CommentKind> {
    let path = reference.as_ref();

    if path.is_dir() {
        return Ok(CommentKind::Directory);
    }

    if path.is_file() {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        return match extension.as_str() {
            "md" => Ok(CommentKind::Markdown),
            "jpg" | "png" => Ok(CommentKind::Image),
            _ => Err(EntitydocError::unsupported_comment(path, extension)),
        };
    }

    Ok(CommentKind::PlainText)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format one comment reference into markdown-ready `(key, value)` pairs.
///
/// - Markdown file: key = file stem, value = the file's full text.
/// - Literal text: key = value = the reference itself.
/// - Image file: key = file stem, value = an image directive whose target
///   follows [`FormatOptions::image_paths`].
/// - Directory: every file underneath, formatted in deterministic
///   depth-first order and flattened into one list. A file with an
///   unsupported extension anywhere in the tree aborts the whole format;
///   unsupported entries are never skipped.
pub fn format_comment(reference: &str, opts: &FormatOptions) -> Result<FormattedComment> {
    let path = Path::new(reference);

    match classify(path)? {
        CommentKind::Markdown => Ok(FormattedComment::Single(format_markdown(path)?)),
        CommentKind::Image => Ok(FormattedComment::Single(format_image(path, opts)?)),
        CommentKind::PlainText => Ok(FormattedComment::Single(CommentEntry {
            key: reference.to_string(),
            value: reference.to_string(),
        })),
        CommentKind::Directory => {
            let files = walk::collect_files(path)?;
            debug!(dir = %path.display(), count = files.len(), "flattening comment directory");

            let mut entries = Vec::with_capacity(files.len());
            for file in files {
                let entry = match classify(&file)? {
                    CommentKind::Markdown => format_markdown(&file)?,
                    CommentKind::Image => format_image(&file, opts)?,
                    // The walk only yields plain files; reclassifying as
                    // anything else means the entry vanished mid-traversal.
                    CommentKind::Directory | CommentKind::PlainText => {
                        return Err(EntitydocError::io(
                            &file,
                            std::io::Error::new(
                                std::io::ErrorKind::NotFound,
                                "comment file disappeared during traversal",
                            ),
                        ));
                    }
                };
                entries.push(entry);
            }

            Ok(FormattedComment::Many(entries))
        }
    }
}

/// Embed a markdown file verbatim under its stem.
fn format_markdown(path: &Path) -> Result<CommentEntry> {
    let text = fs::read_to_string(path).map_err(|e| EntitydocError::io(path, e))?;
    Ok(CommentEntry {
        key: file_stem(path),
        value: text,
    })
}

/// Build an image directive with the stem as alt text.
fn format_image(path: &Path, opts: &FormatOptions) -> Result<CommentEntry> {
    let stem = file_stem(path);

    let target = match opts.image_paths {
        ImagePathStrategy::Absolute => {
            std::path::absolute(path).map_err(|e| EntitydocError::io(path, e))?
        }
        ImagePathStrategy::Resource => {
            let resource_dir = opts
                .resource_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR));
            match path.file_name() {
                Some(name) => resource_dir.join(name),
                None => resource_dir,
            }
        }
    };

    Ok(CommentEntry {
        key: stem.clone(),
        value: format!("![{stem}]({})", target.display()),
    })
}

/// File name without its extension, lossily decoded.
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
