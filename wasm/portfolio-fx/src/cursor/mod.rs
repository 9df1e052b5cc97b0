//! Custom cursor with magnetic attraction.
//!
//! - `geometry`: viewport points, element boxes and the magnetic pull
//! - `variant`: glyph variants and hovered-element classification
//! - `state`: cursor state and its transitions
//! - `schedule`: cancel-and-replace frame queue for pointer moves
//! - `glyph`: glyph appearance per state
//! - `probe`: touch capability check
//! - `host`: runtime seam (listeners, styles, frames, timers)
//! - `slot`: one active tracker at a time
//! - `tracker`: lifecycle and event handling

pub mod geometry;
pub mod glyph;
pub mod host;
pub mod probe;
pub mod schedule;
pub mod slot;
pub mod state;
pub mod tracker;
pub mod variant;

// Re-export commonly used types
pub use geometry::{compute_magnetic_pull, MagneticPull, Rect, XY};
pub use glyph::GlyphStyle;
pub use host::{CursorHost, InputSink, PointerInput};
pub use probe::TouchProbe;
pub use slot::MountSlot;
pub use state::{CursorSnapshot, CursorState};
pub use tracker::CursorTracker;
pub use variant::CursorVariant;
