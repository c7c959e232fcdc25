//! Application configuration for entitydoc.
//!
//! User config lives at `~/.entitydoc/entitydoc.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EntitydocError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "entitydoc.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".entitydoc";

// ---------------------------------------------------------------------------
// Config structs (matching entitydoc.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output directory for generated markdown.
    /// Unset means the current working directory.
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// `[render]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory with template overrides; built-in templates are used for
    /// any file not found there.
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// How image comment paths are written into the markdown.
    #[serde(default)]
    pub image_paths: ImagePathStrategy,

    /// Asset directory used by the `resource` image path strategy.
    /// Unset means `resources`.
    #[serde(default)]
    pub resource_dir: Option<String>,
}

/// Strategy for the target path of image directives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePathStrategy {
    /// Embed the image file's absolute filesystem path.
    #[default]
    Absolute,
    /// Embed `<resource_dir>/<file name>`, assuming images are copied into
    /// a dedicated asset directory alongside the generated markdown.
    Resource,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.entitydoc/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| EntitydocError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.entitydoc/entitydoc.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| EntitydocError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        EntitydocError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| EntitydocError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| EntitydocError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| EntitydocError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("image_paths"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.render.image_paths, ImagePathStrategy::Absolute);
        assert!(parsed.defaults.output_dir.is_none());
    }

    #[test]
    fn resource_strategy_parses() {
        let toml_str = r#"
[render]
image_paths = "resource"
resource_dir = "assets"

[defaults]
output_dir = "/tmp/docs"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.render.image_paths, ImagePathStrategy::Resource);
        assert_eq!(config.render.resource_dir.as_deref(), Some("assets"));
        assert_eq!(config.defaults.output_dir.as_deref(), Some("/tmp/docs"));
    }

    #[test]
    fn unknown_strategy_rejected() {
        let toml_str = r#"
[render]
image_paths = "symlink"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }
}
