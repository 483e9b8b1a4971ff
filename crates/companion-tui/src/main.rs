//! `companion` binary: parse flags, set up logging, run the terminal UI.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use companion_core::{CompanionConfig, Likelihood, PanelId};
use companion_tui::TuiError;
use companion_tui::app::TuiApp;

#[derive(Parser)]
#[command(
    name = "companion",
    about = "Terminal session companion for solo and GM-less role-playing",
    version
)]
struct Args {
    /// Start on a specific panel (themes, fate, characters)
    #[arg(long, default_value = "themes")]
    tab: PanelId,

    /// RNG seed for reproducible rolls and picks
    #[arg(long)]
    seed: Option<u64>,

    /// Initial chaos factor (1-9)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=9))]
    chaos: u32,

    /// Initial likelihood, e.g. "50/50", "likely", "very-unlikely"
    #[arg(long, default_value = "50/50")]
    likelihood: Likelihood,

    /// Keep panel state when switching panels
    #[arg(long)]
    keep_panels: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(long)]
    debug: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), TuiError> {
    companion_tui::logging::init(args.debug, args.log_file.as_deref())?;

    let mut config = CompanionConfig::default()
        .with_chaos(args.chaos)
        .with_likelihood(args.likelihood)
        .with_keep_panels(args.keep_panels);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    tracing::info!(
        tab = %args.tab,
        seed = ?config.seed,
        chaos = args.chaos,
        likelihood = %args.likelihood,
        keep_panels = args.keep_panels,
        "starting companion"
    );

    let app = TuiApp::new(config, args.tab);
    companion_tui::terminal::run(app)
}
