//! Portfolio page effects in WASM
//!
//! A custom cursor with magnetic attraction and the animated hero section,
//! mounted from JavaScript through the exports below.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod hero;

use cursor::{CursorTracker, MountSlot};
use dom::WebCursorHost;
use error::PortfolioResult;
use hero::{HeroConfig, HeroView};

/// Initialize panic hook and logging for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[PortfolioFx] WASM module initialized");
}

thread_local! {
    /// The page has one pointer, so a second active tracker is refused.
    static CURSOR_SLOT: MountSlot = MountSlot::new();
}

/// Handle to a mounted cursor tracker. Freeing it tears the tracker down.
#[wasm_bindgen]
pub struct CursorHandle {
    tracker: CursorTracker<WebCursorHost>,
}

#[wasm_bindgen]
impl CursorHandle {
    /// Remove listeners, styles and the overlay. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }

    /// False on touch devices and after unmount.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Current cursor state, or `undefined` when inactive.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        match self.tracker.snapshot() {
            Some(snapshot) => Ok(serde_wasm_bindgen::to_value(&snapshot)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

/// Mount the custom cursor using the current cursor config.
#[wasm_bindgen(js_name = mountCursor)]
pub fn mount_cursor() -> Result<CursorHandle, JsValue> {
    Ok(mount_cursor_inner()?)
}

fn mount_cursor_inner() -> PortfolioResult<CursorHandle> {
    let host = WebCursorHost::new()?;
    let tracker = CURSOR_SLOT
        .with(|slot| CursorTracker::mount_in(slot, host, config::cursor::current()))?;
    Ok(CursorHandle { tracker })
}

/// Handle to a mounted hero section. Freeing it removes the section.
#[wasm_bindgen]
pub struct HeroHandle {
    view: HeroView,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Remove listeners and the section. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.view.unmount();
    }
}

/// Build the hero section inside the element with id `container_id`.
#[wasm_bindgen(js_name = mountHero)]
pub fn mount_hero(container_id: &str, config: JsValue) -> Result<HeroHandle, JsValue> {
    let config = HeroConfig::from_js(config)?;
    let window = dom::window()?;
    let view = HeroView::mount(&window, container_id, &config)?;
    Ok(HeroHandle { view })
}
