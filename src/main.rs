use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::Parser;
use drawlots::prelude::*;

/// Draw names from a list, or numbers from 1 to N, in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for a reproducible session (defaults to the clock)
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Show results without the spinning reel
    #[arg(long, default_value_t = false)]
    no_animation: bool,

    /// No colors and no screen clearing
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Preload mode A with names from this file (one per line)
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::info!("Starting session with args: {:?}", args);

    let stdout = io::stdout();
    let settings = Settings {
        seed: SeedPolicy::from(args.seed),
        animation: !args.no_animation,
        color: !args.plain && stdout.is_terminal(),
        roster: args.roster,
    };

    let mut app = App::new(&settings, io::stdin().lock(), stdout.lock());
    app.run()?;

    log::info!("Session ended after {} draws", app.log().draws());
    Ok(())
}
