// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The YearScrubber desktop app
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use eframe::egui::ViewportBuilder;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;
use year_scrubber_core::AllowedYears;
use year_scrubber_gui::{Config, DEFAULT_WINDOW_SIZES, YearScrubberApp};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Log targets that are shown (the libraries, and this binary)
const LOG_TARGETS: [&str; 2] = ["year_scrubber", "gui"];

/// Entry point for the native GUI desktop application
fn main() -> Result<(), eframe::Error> {
    let args = Cli::parse();

    // Setup logging
    let mut config_log = ConfigBuilder::new();
    for target in LOG_TARGETS {
        config_log.add_filter_allow_str(target);
    }
    let config_log = config_log.build();

    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        args.log_level.filter(),
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to setup logging: {error}");
    }

    // Create a new tokio runtime so that the playback timer can use
    // `tokio::spawn` without the GUI code having to be `async`.
    let rt = tokio::runtime::Runtime::new().expect("Unable to create Runtime");

    // Enter the runtime so that `tokio::spawn` is available immediately.
    let _enter = rt.enter();

    // Move the runtime into its own thread and don't let it finish/exit.
    std::thread::spawn(move || {
        rt.block_on(async {
            loop {
                tokio::time::sleep(std::time::Duration::MAX).await;
            }
        })
    });

    // Config (the command line takes precedence)
    if args.config.is_none() {
        if let Err(error) = Config::ensure_setup() {
            warn!("Unable to setup the config file: {error}");
        }
    }
    let mut config = Config::load_or_default(args.config.as_deref());
    if let Some(interval_ms) = args.interval_ms {
        config.playback_interval_ms = interval_ms;
    }

    // The years to offer
    let years = args
        .years
        .clone()
        .unwrap_or_else(|| config.default_years.clone());
    let allowed_years = match AllowedYears::new(years) {
        Ok(allowed_years) => allowed_years,
        Err(error) => {
            error!("Invalid years: {error}");
            eprintln!("Invalid years: {error}");
            std::process::exit(1);
        }
    };

    // Create the YearScrubber application
    let app = YearScrubberApp::new(allowed_years, &config);

    // Setup the main window's default options
    let main_viewport_options = ViewportBuilder::default().with_inner_size([
        DEFAULT_WINDOW_SIZES.main_window.width,
        DEFAULT_WINDOW_SIZES.main_window.height,
    ]);

    // Setup the eframe options for a native application
    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    // Run the application
    eframe::run_native("YearScrubber", options, Box::new(|_cc| Ok(Box::new(app))))
}

#[derive(Parser, Debug)]
#[command(version, about = "Pick a year (or all years) from a timeline")]
pub struct Cli {
    /// The years that can be picked, ascending (e.g. `2000,2005,2010`)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub years: Option<Vec<i32>>,

    /// Path to a config file (instead of the default location)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between playback steps
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// How much to log
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Error, Self::Warn, Self::Info, Self::Debug, Self::Trace]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            LogLevel::Error => Some(PossibleValue::new("error")),
            LogLevel::Warn => Some(PossibleValue::new("warn")),
            LogLevel::Info => Some(PossibleValue::new("info")),
            LogLevel::Debug => {
                Some(PossibleValue::new("debug").help("Selection, playback, & drag changes"))
            }
            LogLevel::Trace => Some(PossibleValue::new("trace").help("Every slider movement")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_years() {
        let cli = Cli::parse_from(["gui", "--years=-50,0,50", "--log-level", "debug"]);
        assert_eq!(cli.years, Some(vec![-50, 0, 50]));
        assert_eq!(cli.log_level.filter(), LevelFilter::Debug);

        let cli = Cli::parse_from(["gui"]);
        assert_eq!(cli.years, None);
        assert_eq!(cli.log_level.filter(), LevelFilter::Info);
    }

    #[test]
    fn logs_from_this_binary_are_shown() {
        assert!(
            LOG_TARGETS
                .iter()
                .any(|target| module_path!().starts_with(target))
        );
    }
}
