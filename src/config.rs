//! Startup configuration, read from `localStorage` as JSON.
//!
//! Every field has a default, so `{}` (or no stored value at all) is a valid config.

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::ViewportConfig;
use crate::state::viewport::{DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH};

pub const STORAGE_KEY: &str = "ts_config";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for StageSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_STAGE_WIDTH,
            height: DEFAULT_STAGE_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSS selector of the touch surface.
    pub surface_selector: String,
    /// Listen on `window` rather than on the surface element itself.
    pub listen_on_window: bool,
    /// Initial virtual stage size.
    pub stage: StageSize,
    /// Reconcile on end/cancel against the contacts the browser still reports.
    pub prune_on_end: bool,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    /// Number of demo sprites the host places on the stage.
    pub demo_sprites: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            surface_selector: "canvas".to_string(),
            listen_on_window: true,
            stage: StageSize::default(),
            prune_on_end: true,
            log_level: "info".to_string(),
            demo_sprites: 3,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the stored config; missing or broken entries fall back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("ignoring stored `{STORAGE_KEY}`: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn viewport(&self) -> ViewportConfig {
        ViewportConfig::new(self.stage.width, self.stage.height)
    }

    /// Unknown level names mean `info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
