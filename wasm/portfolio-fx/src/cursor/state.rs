//! Cursor state and its transitions.
//!
//! The tracker owns one `CursorState` per mounted instance and mutates it only
//! through the methods below. Geometry comes in already measured, so every
//! transition is a plain function of its arguments and testable without a
//! browser.

use serde::Serialize;
use ts_rs::TS;

use super::geometry::{compute_magnetic_pull, Rect, XY};
use super::variant::CursorVariant;

/// Live cursor state.
///
/// `E` is the host's element handle; the state only stores it as a lookup
/// reference and never dereferences it.
#[derive(Debug, Clone)]
pub struct CursorState<E> {
    /// Where the glyph is drawn.
    pub position: XY,
    /// False while the pointer is outside the viewport.
    pub visible: bool,
    pub variant: CursorVariant,
    /// Over an interactive element, or inside a press pulse.
    pub hovered: bool,
    magnetic_target: Option<E>,
    magnetic_strength: f64,
}

impl<E> Default for CursorState<E> {
    fn default() -> Self {
        Self {
            position: XY::default(),
            visible: true,
            variant: CursorVariant::Default,
            hovered: false,
            magnetic_target: None,
            magnetic_strength: 0.0,
        }
    }
}

impl<E> CursorState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magnetic_target(&self) -> Option<&E> {
        self.magnetic_target.as_ref()
    }

    pub fn magnetic_strength(&self) -> f64 {
        self.magnetic_strength
    }

    /// Apply a coalesced pointer sample.
    ///
    /// `target_rect` is the current bounding box of the magnetic target,
    /// measured this frame; it is ignored when no target is set.
    pub fn apply_frame(&mut self, pointer: XY, target_rect: Option<Rect>, attraction: f64) {
        match (&self.magnetic_target, target_rect) {
            (Some(_), Some(rect)) => self.attract(pointer, &rect, attraction),
            _ => {
                self.position = pointer;
                self.magnetic_strength = 0.0;
            },
        }
        self.visible = true;
    }

    /// The pointer entered a new element.
    ///
    /// `magnetic` is the nearest magnetic ancestor (inclusive) with its
    /// bounding box, `variant` the classification of the hovered element.
    pub fn pointer_over(
        &mut self,
        pointer: XY,
        magnetic: Option<(E, Rect)>,
        variant: CursorVariant,
        attraction: f64,
    ) {
        match magnetic {
            Some((element, rect)) => {
                self.magnetic_target = Some(element);
                self.attract(pointer, &rect, attraction);
            },
            None => self.clear_target(),
        }
        self.variant = variant;
        self.hovered = variant.is_interactive();
    }

    /// The pointer left the viewport.
    pub fn pointer_leave(&mut self) {
        self.visible = false;
        self.clear_target();
        self.variant = CursorVariant::Default;
    }

    /// A button went down; the pulse ends with `press_released`.
    pub fn press(&mut self) {
        self.hovered = true;
    }

    /// The press pulse elapsed. Hover falls back to what the element under
    /// the pointer implies.
    pub fn press_released(&mut self) {
        self.hovered = self.variant.is_interactive();
    }

    fn attract(&mut self, pointer: XY, rect: &Rect, attraction: f64) {
        let pull = compute_magnetic_pull(pointer, rect, attraction);
        self.position = pull.position;
        self.magnetic_strength = pull.strength;
    }

    fn clear_target(&mut self) {
        self.magnetic_target = None;
        self.magnetic_strength = 0.0;
    }

    /// Serializable copy without the element handle.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            x: self.position.x,
            y: self.position.y,
            visible: self.visible,
            variant: self.variant,
            hovered: self.hovered,
            magnetic: self.magnetic_target.is_some(),
            magnetic_strength: self.magnetic_strength,
        }
    }
}

/// Cursor state as seen from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CursorSnapshot {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub variant: CursorVariant,
    pub hovered: bool,
    /// A magnetic target is set.
    pub magnetic: bool,
    pub magnetic_strength: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTRACTION: f64 = 0.5;

    fn button_rect() -> Rect {
        Rect::from_edges(80.0, 80.0, 120.0, 120.0)
    }

    fn assert_invariant(state: &CursorState<u32>) {
        if state.magnetic_strength() > 0.0 {
            assert!(state.magnetic_target().is_some());
        }
        assert!((0.0..=1.0).contains(&state.magnetic_strength()));
    }

    #[test]
    fn test_initial_state() {
        let state = CursorState::<u32>::new();
        assert_eq!(state.position, XY::new(0.0, 0.0));
        assert!(state.visible);
        assert_eq!(state.variant, CursorVariant::Default);
        assert!(!state.hovered);
        assert!(state.magnetic_target().is_none());
        assert_eq!(state.magnetic_strength(), 0.0);
    }

    #[test]
    fn test_frame_without_target_follows_pointer() {
        let mut state = CursorState::<u32>::new();
        state.visible = false;
        state.apply_frame(XY::new(42.0, 7.0), None, ATTRACTION);
        assert_eq!(state.position, XY::new(42.0, 7.0));
        assert!(state.visible);
        assert_invariant(&state);
    }

    #[test]
    fn test_over_magnetic_element_attracts() {
        let mut state = CursorState::new();
        state.pointer_over(
            XY::new(100.0, 100.0),
            Some((1u32, button_rect())),
            CursorVariant::Link,
            ATTRACTION,
        );
        assert_eq!(state.magnetic_target(), Some(&1));
        assert_eq!(state.magnetic_strength(), 1.0);
        assert_eq!(state.position, XY::new(100.0, 100.0));
        assert_eq!(state.variant, CursorVariant::Link);
        assert!(state.hovered);
        assert_invariant(&state);
    }

    #[test]
    fn test_frame_rereads_target_rect() {
        let mut state = CursorState::new();
        state.pointer_over(
            XY::new(100.0, 100.0),
            Some((1u32, button_rect())),
            CursorVariant::Link,
            ATTRACTION,
        );

        // Element moved 200px right; pointer is now far from its center.
        let moved = Rect::from_edges(280.0, 80.0, 320.0, 120.0);
        state.apply_frame(XY::new(110.0, 100.0), Some(moved), ATTRACTION);
        assert_eq!(state.position, XY::new(110.0, 100.0));
        assert_eq!(state.magnetic_strength(), 0.0);
        // Target stays set until the pointer enters something else.
        assert!(state.magnetic_target().is_some());
        assert_invariant(&state);

        state.apply_frame(XY::new(295.0, 100.0), Some(moved), ATTRACTION);
        assert!(state.magnetic_strength() > 0.0);
        assert_invariant(&state);
    }

    #[test]
    fn test_over_plain_element_clears_target() {
        let mut state = CursorState::new();
        state.pointer_over(
            XY::new(100.0, 100.0),
            Some((1u32, button_rect())),
            CursorVariant::Link,
            ATTRACTION,
        );
        state.pointer_over(XY::new(300.0, 300.0), None, CursorVariant::Text, ATTRACTION);
        assert!(state.magnetic_target().is_none());
        assert_eq!(state.magnetic_strength(), 0.0);
        assert_eq!(state.variant, CursorVariant::Text);
        assert!(!state.hovered);
        assert_invariant(&state);
    }

    #[test]
    fn test_leave_hides_and_resets() {
        let mut state = CursorState::new();
        state.pointer_over(
            XY::new(100.0, 100.0),
            Some((1u32, button_rect())),
            CursorVariant::Button,
            ATTRACTION,
        );
        state.pointer_leave();
        assert!(!state.visible);
        assert!(state.magnetic_target().is_none());
        assert_eq!(state.magnetic_strength(), 0.0);
        assert_eq!(state.variant, CursorVariant::Default);
        assert_invariant(&state);
    }

    #[test]
    fn test_press_pulse_restores_hover_from_variant() {
        let mut state = CursorState::<u32>::new();
        state.press();
        assert!(state.hovered);
        state.press_released();
        assert!(!state.hovered);

        // Pressing a button keeps the hovered look after the pulse.
        state.pointer_over(XY::new(0.0, 0.0), None, CursorVariant::Button, ATTRACTION);
        state.press();
        state.press_released();
        assert!(state.hovered);
    }

    #[test]
    fn test_snapshot() {
        let mut state = CursorState::new();
        state.pointer_over(
            XY::new(100.0, 100.0),
            Some((9u32, button_rect())),
            CursorVariant::Link,
            ATTRACTION,
        );
        let snapshot = state.snapshot();
        assert_eq!(
            snapshot,
            CursorSnapshot {
                x: 100.0,
                y: 100.0,
                visible: true,
                variant: CursorVariant::Link,
                hovered: true,
                magnetic: true,
                magnetic_strength: 1.0,
            }
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["magneticStrength"], 1.0);
        assert_eq!(json["variant"], "link");
    }

    #[test]
    fn export_bindings_cursorsnapshot() {
        CursorSnapshot::export_all().unwrap();
    }

    #[test]
    fn test_bindings_stay_inside_export_dir() {
        // Relative to the crate's `bindings/` directory, no parent hops.
        for path in [CursorSnapshot::output_path(), CursorVariant::output_path()] {
            let path = path.map(|p| p.to_path_buf()).unwrap();
            assert!(path.is_relative());
            assert!(path.components().all(|c| c != std::path::Component::ParentDir));
        }
    }
}
