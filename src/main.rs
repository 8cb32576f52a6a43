//! Outing Guide - character outing preferences in the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use outing_app::config::{self, Settings};
use outing_app::message::Message;
use outing_app::process::apply;
use outing_app::{actions, AppState};
use outing_core::logging::{self, LogTarget};
use outing_core::CategoryFilter;
use outing_guide::{run_headless, OutputFormat, Query};
use tracing::info;

/// Outing Guide - look up what each character likes on an outing
#[derive(Parser, Debug)]
#[command(name = "outing", version)]
#[command(about = "Browse character outing preferences with Hangul initial-consonant search", long_about = None)]
struct Args {
    /// Dataset JSON file (default: the configured path, else the bundled data)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Config file (default: <config dir>/outing-guide/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the result of one query instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Headless output as one JSON line
    #[arg(long, requires = "headless")]
    json: bool,

    /// Initial search term (name or initial consonants, e.g. ㅋㄹ)
    #[arg(long, short, value_name = "TERM")]
    search: Option<String>,

    /// Initial category filter (전체, 인간형, 야수형, 요정형, 불사형, 천악혼 or an alias)
    #[arg(long, short, value_name = "LABEL")]
    category: Option<CategoryFilter>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.headless {
        logging::init_with(LogTarget::Stderr)?;
    } else {
        logging::init()?;
    }

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("❌ No config directory on this platform; pass --config <FILE>");
            std::process::exit(1);
        };
        if config::init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let settings = match &config_path {
        Some(path) => config::load_settings_from(path),
        None => Settings::default(),
    };

    let dataset_path = args.data.clone().or_else(|| settings.data.dataset_path());
    let dataset = actions::load_dataset(dataset_path.as_deref())?;
    info!(
        "Dataset ready: {} characters, {} choices",
        dataset.report.characters, dataset.report.choices
    );

    let state = AppState::new(dataset.index(), dataset.choices, settings)
        .with_dataset_path(dataset_path);
    let query = Query {
        term: args.search.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
    };

    if args.headless {
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        run_headless(state, &query, format)?;
        return Ok(());
    }

    let mut state = state;
    if !query.category.is_all() {
        apply(&mut state, Message::SetCategory(query.category));
    }
    if !query.term.is_empty() {
        apply(&mut state, Message::SetSearchTerm(query.term));
    }
    outing_tui::run(state).await?;
    Ok(())
}
