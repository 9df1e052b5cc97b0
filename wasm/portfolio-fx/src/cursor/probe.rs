//! Touch capability probe.

/// What the runtime reports about touch input. Probes that are unavailable
/// read as "no touch".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchProbe {
    /// `'ontouchstart' in window`
    pub touch_start: bool,
    /// `navigator.maxTouchPoints`
    pub max_touch_points: i32,
    /// Legacy `navigator.msMaxTouchPoints`, absent on modern engines.
    pub ms_max_touch_points: Option<f64>,
}

impl TouchProbe {
    /// True when any probe indicates touch input; the tracker stays inert.
    pub fn is_touch_device(&self) -> bool {
        self.touch_start
            || self.max_touch_points > 0
            || self.ms_max_touch_points.is_some_and(|points| points > 0.0)
    }
}
