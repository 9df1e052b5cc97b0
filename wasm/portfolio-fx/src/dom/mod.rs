//! Browser bindings.
//!
//! Thin web-sys wrappers that own one DOM side effect each and undo it on
//! drop, plus `WebCursorHost`, the browser implementation of `CursorHost`.

pub mod host;
pub mod listener;
pub mod observer;
pub mod oneshot;
pub mod overlay;
pub mod style;

pub use host::WebCursorHost;
pub use listener::{EventListener, ListenOptions};

use web_sys::Window;

use crate::error::{OptionExt, PortfolioResult};

pub fn window() -> PortfolioResult<Window> {
    web_sys::window().or_missing("window")
}
