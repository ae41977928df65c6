//! ankiviz - Entry Point

use ankiviz::config::CliOverrides;
use ankiviz::model::AppError;
use ankiviz::view::{ColorConfig, ReplaySettings};
use ankiviz::view_state::{RenderOrder, ViewStateEngine};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// ankiviz - replay an Anki review log as a color-coded animation
#[derive(Parser, Debug)]
#[command(name = "ankiviz")]
#[command(version)]
#[command(about = "Replay an Anki review log as a live, color-coded terminal animation")]
pub struct Args {
    /// Path to collection.anki2 or a .jsonl review export (default: ./collection.anki2)
    pub collection: Option<PathBuf>,

    /// Playback rate in reviews per second (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: Option<u32>,

    /// Skip reviews of notes with fewer fields than this
    #[arg(long)]
    pub min_fields: Option<usize>,

    /// Number of colors in the intensity palette (2-16)
    #[arg(long)]
    pub palette_size: Option<u8>,

    /// Item order on screen
    #[arg(long, value_enum)]
    pub order: Option<RenderOrder>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ankiviz: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let colors = ColorConfig::from_env_and_args(args.no_color);

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = ankiviz::config::load_config_with_precedence(args.config.clone())?;
        let merged = ankiviz::config::merge_config(config_file)?;
        let with_env = ankiviz::config::apply_env_overrides(merged)?;
        ankiviz::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                collection: args.collection,
                playback_rate: args.rate,
                min_field_count: args.min_fields,
                palette_size: args.palette_size,
                order: args.order,
            },
        )?
    };

    ankiviz::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        colors = colors.colors_enabled(),
        "Configuration loaded and resolved"
    );

    // Load everything before touching the terminal so errors print normally
    let source = ankiviz::source::detect_review_source(config.collection.clone())?;
    let events = ankiviz::integration::load_events(&source, config.min_field_count)?;
    let engine = ViewStateEngine::new(events, config.palette_size);

    let settings = ReplaySettings {
        rate: config.playback_rate,
        order: config.order,
        colors,
    };
    ankiviz::view::run_replay(engine, settings)?;

    Ok(())
}
