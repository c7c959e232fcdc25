//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use entitydoc_core::{GenerateResult, RenderOptions, generate};
use entitydoc_shared::{
    AppConfig, ImagePathStrategy, config_file_path, init_config, load_config,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// entitydoc — render entity records into markdown documents.
#[derive(Parser)]
#[command(
    name = "entitydoc",
    version,
    about = "Render project, task, and step TOML records into markdown documents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate markdown from one or more entity TOML files.
    Generate {
        /// Entity record files to render.
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Target directory for the generated markdown
        /// (defaults to the configured output_dir, then the working directory).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Directory with template overrides.
        #[arg(long)]
        templates: Option<PathBuf>,

        /// How image comment paths are written: absolute or resource.
        #[arg(long)]
        image_paths: Option<ImagePathsArg>,

        /// Asset directory used by the resource image path strategy.
        #[arg(long)]
        resource_dir: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Image path strategy flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum ImagePathsArg {
    Absolute,
    Resource,
}

impl From<ImagePathsArg> for ImagePathStrategy {
    fn from(arg: ImagePathsArg) -> Self {
        match arg {
            ImagePathsArg::Absolute => ImagePathStrategy::Absolute,
            ImagePathsArg::Resource => ImagePathStrategy::Resource,
        }
    }
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "entitydoc=info",
        1 => "entitydoc=debug",
        _ => "entitydoc=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            sources,
            out,
            templates,
            image_paths,
            resource_dir,
        } => cmd_generate(
            &sources,
            out,
            templates,
            image_paths,
            resource_dir,
        ),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(
    sources: &[PathBuf],
    out: Option<PathBuf>,
    templates: Option<PathBuf>,
    image_paths: Option<ImagePathsArg>,
    resource_dir: Option<PathBuf>,
) -> Result<()> {
    let config = load_config()?;
    let options = resolve_options(&config, templates, image_paths, resource_dir);

    // CLI flag wins, then config; the pipeline falls back to the cwd.
    let target_dir = out.or_else(|| config.defaults.output_dir.clone().map(PathBuf::from));

    info!(count = sources.len(), "generating markdown documents");

    let bar = make_progress_bar(sources.len());

    let mut results: Vec<GenerateResult> = Vec::with_capacity(sources.len());
    for source in sources {
        bar.set_message(source.display().to_string());
        let result = generate(source, target_dir.as_deref(), &options)?;
        bar.inc(1);
        results.push(result);
    }
    bar.finish_and_clear();

    println!();
    for result in &results {
        println!(
            "  {} ({}) -> {}",
            result.name,
            result.entity_type,
            result.output_path.display()
        );
    }
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Created config file at {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let path = config_file_path()?;

    println!("# resolved config ({})", path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Merge CLI flags over config file values into the pipeline options.
fn resolve_options(
    config: &AppConfig,
    templates: Option<PathBuf>,
    image_paths: Option<ImagePathsArg>,
    resource_dir: Option<PathBuf>,
) -> RenderOptions {
    let mut options = RenderOptions {
        templates_dir: templates
            .or_else(|| config.render.templates_dir.clone().map(PathBuf::from)),
        ..RenderOptions::default()
    };

    options.format.image_paths = image_paths
        .map(ImagePathStrategy::from)
        .unwrap_or(config.render.image_paths);
    options.format.resource_dir =
        resource_dir.or_else(|| config.render.resource_dir.clone().map(PathBuf::from));

    options
}

/// A progress bar for batch runs; hidden for a single source.
fn make_progress_bar(total: usize) -> ProgressBar {
    if total <= 1 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
