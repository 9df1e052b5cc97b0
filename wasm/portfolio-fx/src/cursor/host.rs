//! The runtime seam of the cursor tracker.
//!
//! `CursorTracker` holds the state and the rules; a `CursorHost` owns every
//! side effect: listeners, the injected stylesheet, the insertion observer,
//! the overlay element, frame and timer scheduling. The browser
//! implementation lives in `crate::dom::host`.

use std::rc::Rc;

use super::geometry::{Rect, XY};
use super::glyph::GlyphStyle;
use super::probe::TouchProbe;
use super::schedule::FrameId;
use super::variant::CursorVariant;
use crate::error::PortfolioResult;

/// Host-assigned timer handle (`setTimeout` id).
pub type TimerId = i32;

/// Pointer input, already translated from raw DOM events.
#[derive(Debug, Clone)]
pub enum PointerInput<E> {
    /// `mousemove` on the window.
    Move(XY),
    /// `mouseover`: the element under the pointer changed.
    Over {
        pointer: XY,
        /// Nearest inclusive ancestor carrying the magnetic marker.
        magnetic: Option<E>,
        variant: CursorVariant,
    },
    /// `mouseleave` on the window.
    Leave,
    /// `mousedown` on the window.
    Down,
}

/// Where the host delivers translated input.
pub type InputSink<E> = Rc<dyn Fn(PointerInput<E>)>;

/// Side effects the tracker needs from its runtime.
///
/// Every `Resource` releases what it holds when dropped. Releasing something
/// already gone is a silent no-op.
pub trait CursorHost: 'static {
    /// Element handle used as magnetic target.
    type Element: Clone + 'static;
    /// RAII guard for an acquired resource.
    type Resource: 'static;

    fn touch_probe(&self) -> TouchProbe;

    /// Install the document-wide rule hiding the platform cursor.
    fn install_cursor_style(&self) -> PortfolioResult<Self::Resource>;

    /// Hide the platform cursor on elements inserted after mount.
    fn observe_insertions(&self) -> PortfolioResult<Self::Resource>;

    /// Subscribe to pointer input. Drag starts are handled by the host itself.
    fn subscribe(&self, sink: InputSink<Self::Element>) -> PortfolioResult<Vec<Self::Resource>>;

    /// Create the overlay element `paint` draws into.
    fn mount_overlay(&self) -> PortfolioResult<Self::Resource>;

    /// Draw the glyph, or hide it with `None`.
    fn paint(&self, frame: Option<(&GlyphStyle, XY)>);

    /// Current bounding box of an element. Never cached by the tracker.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> PortfolioResult<FrameId>;

    fn cancel_frame(&self, frame: FrameId);

    fn start_timer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> PortfolioResult<TimerId>;

    fn cancel_timer(&self, timer: TimerId);
}
