//! `positivity` terminal front end.
//!
//! # Responsibility
//! - Map CLI commands onto `positivity_core` display operations.
//! - Provide terminal implementations of the platform collaborators.

mod cli;
mod platform;
mod render;
mod watch;

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone};
use clap::Parser;
use cli::{Cli, Commands, ShareArgs};
use log::info;
use platform::{CommandShare, StdoutNotifier, SystemClipboard};
use positivity_core::{
    builtin_catalog, default_log_level, init_logging, Category, DisplayConfig, DisplayController,
    ManualClock, RandomSource, SeededRandom, ShareCapability, ShareOutcome, ShareServices,
    SystemClock, ThreadRandom,
};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;
    let config = DisplayConfig::from_env().context("Invalid POSITIVITY_* configuration")?;

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => today(config),
        Commands::Show { date } => show(config, date),
        Commands::Random { seed } => random(seed),
        Commands::Catalog { json, category } => catalog(json, category),
        Commands::Share { share } => share_today(config, &share),
        Commands::Watch { seed, share } => watch_live(config, seed, &share),
    }
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = log_dir.to_str().context("Log directory must be valid UTF-8")?;
    init_logging(&level, log_dir).context("Failed to initialize logging")?;
    info!("event=cli_start module=cli status=ok");
    Ok(())
}

fn today(config: DisplayConfig) -> Result<()> {
    let display =
        DisplayController::initialize(builtin_catalog(), config, SystemClock, ThreadRandom)?;
    print_page(&display)
}

fn show(config: DisplayConfig, date: NaiveDate) -> Result<()> {
    let noon = date.and_hms_opt(12, 0, 0).context("Invalid time of day")?;
    let now = chrono::Utc.from_utc_datetime(&noon).fixed_offset();
    let display = DisplayController::initialize(
        builtin_catalog(),
        config,
        ManualClock::new(now),
        ThreadRandom,
    )?;
    print_page(&display)
}

fn random(seed: Option<u64>) -> Result<()> {
    let mut source = random_source(seed);
    let catalog = builtin_catalog();
    let index = positivity_core::selection::random_index(source.next_unit(), catalog.len());
    let mut out = io::stdout().lock();
    render::write_catalog_line(&mut out, catalog.get_wrapped(index), "\n")?;
    Ok(())
}

fn catalog(json: bool, category: Option<Category>) -> Result<()> {
    let messages: Vec<_> = builtin_catalog()
        .messages()
        .iter()
        .filter(|message| category.map_or(true, |wanted| message.category == wanted))
        .collect();
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &messages)?;
        writeln!(out)?;
        return Ok(());
    }
    for message in messages {
        render::write_catalog_line(&mut out, message, "\n")?;
    }
    Ok(())
}

fn share_today(config: DisplayConfig, args: &ShareArgs) -> Result<()> {
    let display =
        DisplayController::initialize(builtin_catalog(), config, SystemClock, ThreadRandom)?;
    let command = args.share_command.as_deref().and_then(CommandShare::parse);
    let services = ShareServices {
        share: match &command {
            Some(command) => ShareCapability::Native(command),
            None => ShareCapability::Unavailable,
        },
        clipboard: &SystemClipboard,
        notifier: &StdoutNotifier,
    };

    match display.share_current_message(&services) {
        ShareOutcome::SharedNatively => println!("Shared."),
        ShareOutcome::NativeShareFailed(err) => println!("Share did not complete: {err}"),
        ShareOutcome::CopiedToClipboard | ShareOutcome::ClipboardWriteFailed(_) => {}
    }
    Ok(())
}

fn watch_live(config: DisplayConfig, seed: Option<u64>, args: &ShareArgs) -> Result<()> {
    let mut display =
        DisplayController::initialize(builtin_catalog(), config, SystemClock, random_source(seed))?;
    let command = args.share_command.as_deref().and_then(CommandShare::parse);
    watch::run(&mut display, command)
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

fn print_page<C, R>(display: &DisplayController<C, R>) -> Result<()>
where
    C: positivity_core::Clock,
    R: RandomSource,
{
    let view = display.presentation();
    let mut out = io::stdout().lock();
    render::write_header(&mut out, &view.date_label, "\n")?;
    render::write_card(&mut out, &view, "\n")?;
    writeln!(out)?;
    render::write_highlights(&mut out, "\n")?;
    render::write_footer(&mut out, "\n")?;
    Ok(())
}
