// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! YearScrubber GUI config
//!

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use year_scrubber_core::{
    AllowedYears, AllowedYearsError, DEFAULT_ANCHOR_MARGIN, PLAYBACK_INTERVAL, TickParams,
};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "YearScrubber";
const APPLICATION_NAME: &str = "YearScrubber";
const CONFIG_FILE_NAME: &str = "config.json";

/// The default width of the timeline widget
pub const DEFAULT_WIDGET_WIDTH: f32 = 384.0;

/// The narrowest and widest the timeline widget can be made
const MIN_WIDGET_WIDTH: f32 = 200.0;
const MAX_WIDGET_WIDTH: f32 = 2000.0;

/// The largest initial distance from the parent's bottom right corner
const MAX_ANCHOR_MARGIN: f32 = 1000.0;

/// Errors that can arise when loading or saving the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to determine the config directory")]
    NoProjectDirs,

    #[error("Invalid years: {0}")]
    Years(#[from] AllowedYearsError),
}

/// The config that's saved to disk.  Missing fields take their default
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between playback steps
    pub playback_interval_ms: u64,

    /// Tick layout
    pub tick_divisions: u32,
    pub tick_padding_factor: f32,

    /// Width of the widget in points
    pub widget_width: f32,

    /// Initial distance from the bottom right of the parent
    pub anchor_margin: f32,

    /// The years offered when none are given on the command line
    pub default_years: Vec<i32>,
}

impl Default for Config {
    fn default() -> Self {
        let tick_params = TickParams::default();
        Self {
            playback_interval_ms: PLAYBACK_INTERVAL.as_millis() as u64,
            tick_divisions: tick_params.divisions,
            tick_padding_factor: tick_params.padding_factor,
            widget_width: DEFAULT_WIDGET_WIDTH,
            anchor_margin: DEFAULT_ANCHOR_MARGIN,
            default_years: vec![2000, 2005, 2010],
        }
    }
}

impl Config {
    /// Load the config from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path()?)
    }

    /// Load the config from the given file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {path:?}");
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Load the config from the given file (or the default location), falling
    /// back to the default config if it can't be loaded
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        match result {
            Ok(config) => config,
            Err(error) => {
                warn!("Using default config ({error})");
                Config::default()
            }
        }
    }

    /// Make sure a config file exists at the default location, writing the
    /// default config if there isn't one
    pub fn ensure_setup() -> Result<(), ConfigError> {
        info!("Ensuring config exists");
        let config_file_path = config_file_path()?;
        if !config_file_path.exists() {
            info!("No config file found");
            Config::default().save_to(&config_file_path)?;
        }
        Ok(())
    }

    /// Save the config to the given file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        ensure_config_file_exists(path)?;
        info!("Saving config to {path:?}");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Config saved");
        Ok(())
    }

    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms.max(1))
    }

    /// Tick layout parameters (the padding factor is clamped to a usable value)
    pub fn tick_params(&self) -> TickParams {
        TickParams {
            divisions: self.tick_divisions,
            padding_factor: self.tick_padding_factor,
        }
        .clamped()
    }

    /// The widget's width, clamped to a usable value
    pub fn widget_width(&self) -> f32 {
        self.widget_width
            .max(MIN_WIDGET_WIDTH)
            .min(MAX_WIDGET_WIDTH)
    }

    /// The initial distance from the parent's bottom right corner, clamped to
    /// a usable value
    pub fn anchor_margin(&self) -> f32 {
        self.anchor_margin.max(0.0).min(MAX_ANCHOR_MARGIN)
    }

    /// The default years, validated
    pub fn default_allowed_years(&self) -> Result<AllowedYears, ConfigError> {
        Ok(AllowedYears::new(self.default_years.clone())?)
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    debug!("Getting project directories (dev build)");
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(ConfigError::NoProjectDirs)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    debug!("Getting project directories");
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::NoProjectDirs)
}

/// Get the path to the config
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    debug!("Config file path = {config_file:?}");
    Ok(config_file)
}

/// Ensure the config file exists (create if it doesn't)
fn ensure_config_file_exists(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        File::create(path)?;
    }
    Ok(())
}
