mod generate;
mod toc;
mod types;

use clap::{Parser, Subcommand};
use docgen_core::{DocgenError, SiteConfig};
use std::path::{Path, PathBuf};

/// Configuration file picked up next to the model when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "docgen.json";

#[derive(Parser)]
#[command(
    name = "docgen",
    version,
    about = "Generates a browsable documentation site from a model",
    long_about = "Docgen resolves every object of a model to a documentation renderer, \
                  generates one page per documented object and writes a navigable site \
                  with a table of contents and deduplicated icons."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the documentation site of a model
    #[command(
        long_about = "Builds the documentation tree of the model and writes index.html, toc.js, \
                            the content pages and the icons into the output directory. \
                            Existing files are left alone unless --force is given."
    )]
    Generate {
        /// Path to the JSON model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,
        /// Site configuration file (defaults to docgen.json next to the model)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Header of the generated site
        #[arg(long)]
        title: Option<String>,
        /// Also render properties that are not set
        #[arg(long)]
        unset: bool,
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// Print the navigation index of a model as JSON
    Toc {
        /// Path to the JSON model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Show which renderers match a model type, closest first
    Types {
        /// Path to the JSON model file
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Type as namespace#name
        #[arg(value_name = "TYPE")]
        type_ref: String,
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Generate { .. } => "generate",
        _ => "cli",
    };
    let _guard = docgen_runtime::init_logging(component, true);

    match cli.command {
        Commands::Generate {
            model,
            out,
            config,
            title,
            unset,
            force,
        } => {
            let mut config = load_config(&model, config.as_deref())?;
            if title.is_some() {
                config.title = title;
            }
            config.render_unset_properties |= unset;
            generate::run(&model, &out, config, force)
        }
        Commands::Toc {
            model,
            config,
            pretty,
        } => toc::run(&model, &load_config(&model, config.as_deref())?, pretty),
        Commands::Types {
            model,
            type_ref,
            config,
        } => types::run(&model, &load_config(&model, config.as_deref())?, &type_ref),
    }
}

/// Explicit configuration file, else `docgen.json` beside the model, else defaults.
pub fn load_config(model: &Path, explicit: Option<&Path>) -> Result<SiteConfig, DocgenError> {
    if let Some(path) = explicit {
        return SiteConfig::load(path);
    }
    let beside = model
        .parent()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .filter(|path| path.is_file());
    match beside {
        Some(path) => {
            tracing::debug!("Using configuration {}", path.display());
            SiteConfig::load(&path)
        }
        None => Ok(SiteConfig::default()),
    }
}
