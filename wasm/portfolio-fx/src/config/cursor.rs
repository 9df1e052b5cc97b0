//! Cursor tracker configuration.

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use wasm_bindgen::prelude::*;

use crate::error::PortfolioResult;

/// Default attraction coefficient handed to the magnetic pull.
pub const DEFAULT_ATTRACTION: f64 = 0.5;

/// Default duration of the press pulse.
pub const DEFAULT_PRESS_PULSE_MS: u32 = 150;

/// Upper bound for the press pulse.
const MAX_PRESS_PULSE_MS: u32 = 1000;

/// Tunables for the custom cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CursorConfig {
    /// Attraction coefficient (0-1). Reserved; the pull curve does not use it yet.
    pub attraction: f64,

    /// How long a press keeps the glyph in its hovered look.
    pub press_pulse_ms: u32,

    /// Hide the platform cursor while the tracker is mounted.
    pub hide_native_cursor: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            attraction: DEFAULT_ATTRACTION,
            press_pulse_ms: DEFAULT_PRESS_PULSE_MS,
            hide_native_cursor: true,
        }
    }
}

impl CursorConfig {
    /// Validate and clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.attraction = if self.attraction.is_finite() {
            self.attraction.clamp(0.0, 1.0)
        } else {
            DEFAULT_ATTRACTION
        };
        self.press_pulse_ms = self.press_pulse_ms.min(MAX_PRESS_PULSE_MS);
    }

    /// Reset all settings to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

lazy_static! {
    /// Global cursor configuration.
    ///
    /// # Example
    /// ```ignore
    /// {
    ///     let mut config = CURSOR_CONFIG.write();
    ///     config.press_pulse_ms = 200;
    ///     config.validate();
    /// }
    /// ```
    pub static ref CURSOR_CONFIG: RwLock<CursorConfig> = RwLock::new(CursorConfig::default());
}

/// Get a copy of the current cursor configuration.
pub fn current() -> CursorConfig {
    CURSOR_CONFIG.read().clone()
}

/// Replace the cursor configuration, clamping out-of-range values.
pub fn apply(mut config: CursorConfig) {
    config.validate();
    log::debug!("[Config] Cursor config updated: {:?}", config);
    *CURSOR_CONFIG.write() = config;
}

// ============================================================================
// JavaScript exports
// ============================================================================

/// Set the cursor configuration from a plain JS object. Missing fields take
/// their defaults.
#[wasm_bindgen(js_name = setCursorConfig)]
pub fn set_cursor_config(config: JsValue) -> Result<(), JsValue> {
    let config = parse(config)?;
    apply(config);
    Ok(())
}

/// Get the current cursor configuration as a JS object.
#[wasm_bindgen(js_name = getCursorConfig)]
pub fn get_cursor_config() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&current())?)
}

/// Restore the default cursor configuration.
#[wasm_bindgen(js_name = resetCursorConfig)]
pub fn reset_cursor_config() {
    CURSOR_CONFIG.write().reset();
    log::debug!("[Config] Cursor config reset to defaults");
}

fn parse(config: JsValue) -> PortfolioResult<CursorConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(CursorConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}
