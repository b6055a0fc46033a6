// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Chronologizer project*
//!
//! Command line frontend: parse dates, or lay out a timeline and print where
//! everything would be drawn
//!

use chronologizer_core::{DateParser, format_instant};
use chronologizer_renderer::{Config, Engine, EntryMarker, EntryOut, TextOut};
use clap::{Parser, Subcommand, ValueEnum};
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Chronologizer entry point
///
/// One of:
/// - Parse and format dates
/// - Lay out a timeline
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("chronologizer")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    match args.cli_command {
        Command::Parse { dates } => parse(&dates),
        Command::Layout {
            entries,
            width,
            config,
            json,
        } => layout(&entries, width, config, json),
    }
}

/// Parse each date, printing the instant and how it's displayed
fn parse(dates: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let parser = DateParser::default();
    let mut failed = 0;
    for text in dates {
        match parser.parse(text) {
            Ok(instant) => println!("{text}\t{instant}\t{}", format_instant(instant)),
            Err(error) => {
                eprintln!("Error: {error}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{failed} of {} dates could not be parsed", dates.len()).into());
    }
    Ok(())
}

/// Build a timeline from the entries and print its layout
fn layout(
    entries: &[String],
    width: Option<f64>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let mut engine = config.engine();
    if let Some(width) = width {
        engine.set_canvas_width(width);
    }

    for entry in entries {
        let (start, end, label) = split_entry_arg(entry);
        engine
            .add_from_text(start, end, label)
            .map_err(|error| format!("Error in `{entry}`: {error}"))?;
    }
    info!("Laying out {} entries", engine.store().len());

    let drawn = engine.entries_for_drawing()?;
    if json {
        let out = serde_json::json!({
            "canvas_width": engine.canvas_width(),
            "canvas_height": engine.canvas_height(),
            "scale": engine.scale_info()?,
            "entries": drawn,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_layout(&engine, &drawn);
    }
    Ok(())
}

/// `START..END=LABEL` (the label is optional, as is END for a single point)
fn split_entry_arg(arg: &str) -> (&str, &str, &str) {
    let (dates, label) = arg.split_once('=').unwrap_or((arg, ""));
    let (start, end) = dates.split_once("..").unwrap_or((dates, dates));
    (start, end, label)
}

fn print_layout(engine: &Engine, drawn: &[EntryOut]) {
    println!(
        "canvas {} x {}",
        engine.canvas_width(),
        engine.canvas_height()
    );
    for entry in drawn {
        let label = entry.label.as_ref().map_or("", |label| label.text.as_str());
        match &entry.marker {
            EntryMarker::Point { circle, date } => println!(
                "[{}] point ({:.1}, {:.1}) {} \"{label}\"",
                entry.index,
                circle.centre.x,
                circle.centre.y,
                text(date)
            ),
            EntryMarker::Range {
                line,
                start_date,
                end_date,
            } => println!(
                "[{}] range {:.1}..{:.1} at y {:.1} {} to {} \"{label}\"",
                entry.index,
                line.x_start,
                line.x_end,
                line.y,
                text(start_date),
                text(end_date)
            ),
        }
    }
}

fn text(text: &TextOut) -> &str {
    &text.text
}

/// Chronologizer CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Chronologizer: free-form dates on a linear timeline",
    after_help = "Dates can be years (1066, -500, 428 BC) or calendar dates (2024-01-15, Jan 15, 2024)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cli_command: Command,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse dates and show how they are displayed
    Parse {
        /// The dates to parse
        #[arg(required = true)]
        dates: Vec<String>,
    },

    /// Lay out a timeline and print where everything would be drawn
    Layout {
        /// An entry as `START..END=LABEL` (`..END` and `=LABEL` are optional)
        #[arg(short, long = "entry", required = true)]
        entries: Vec<String>,

        /// Canvas width in pixels (overrides the config)
        #[arg(long)]
        width: Option<f64>,

        /// Path to a JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
