//! Runtime configuration for the widgets.
//!
//! Settings live in typed structs behind `parking_lot::RwLock` so the page can
//! batch-update them from JavaScript before mounting. A mounted widget works
//! from the snapshot it took at mount time.
//!
//! - `CursorConfig`: magnetic attraction and press pulse tuning
//! - log level control for the console logger

pub mod cursor;

pub use cursor::{CursorConfig, CURSOR_CONFIG};

use wasm_bindgen::prelude::*;

/// Parse a log level name, falling back to `Info` for unknown input.
pub fn parse_level(level: &str) -> log::LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" | "warning" => log::LevelFilter::Warn,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

/// Adjust console log verbosity at runtime.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    let filter = parse_level(level);
    log::set_max_level(filter);
    log::info!("[Config] Log level set to {}", filter);
}
