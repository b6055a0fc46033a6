// SPDX-License-Identifier: MIT

//!
//! Chronologizer renderer config
//!

use crate::{DEFAULT_CANVAS_WIDTH, Engine, LayoutParams};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading a [`Config`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// The config that can be loaded from disk.  Any field that is missing takes
/// its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The full canvas width (padding included)
    pub canvas_width: f64,

    /// The timeline layout
    pub layout: LayoutParams,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            layout: LayoutParams::default(),
        }
    }
}

impl Config {
    /// Load the config from the JSON file at the path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config = Config::from_json(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Parse the config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create an empty engine that uses this config
    pub fn engine(&self) -> Engine {
        let mut engine = Engine::new(self.layout);
        engine.set_canvas_width(self.canvas_width);
        engine
    }
}
