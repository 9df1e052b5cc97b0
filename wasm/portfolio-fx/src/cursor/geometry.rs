//! Viewport geometry and the magnetic pull.
//!
//! All values are CSS pixels in viewport (client) coordinates, the space
//! `MouseEvent.clientX/Y` and `getBoundingClientRect()` report in.

/// Magnetic radius as a fraction of the element's larger side.
pub const MAGNETIC_RADIUS_FACTOR: f64 = 0.8;

/// Falloff exponent: the pull ramps in gently and accelerates near the center.
pub const MAGNETIC_FALLOFF_EXPONENT: f64 = 1.5;

/// 2D coordinate in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: XY) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Element bounding box, mirroring the fields of a `DOMRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build from edges, as the browser reports them.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> XY {
        XY::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Radius inside which the element attracts the glyph.
    pub fn magnetic_radius(&self) -> f64 {
        self.width.max(self.height) * MAGNETIC_RADIUS_FACTOR
    }

    /// Clamp a point into the box, each axis independently.
    pub fn clamp(&self, point: XY) -> XY {
        XY::new(
            point.x.max(self.left).min(self.right()),
            point.y.max(self.top).min(self.bottom()),
        )
    }

    #[cfg(test)]
    pub fn contains(&self, point: XY) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

/// Result of the magnetic pull: where to draw the glyph and how strongly it
/// is attracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticPull {
    pub position: XY,
    /// 0 outside the radius, in (0, 1] inside it.
    pub strength: f64,
}

impl MagneticPull {
    /// No attraction: the raw pointer, strength 0.
    pub fn none(pointer: XY) -> Self {
        Self {
            position: pointer,
            strength: 0.0,
        }
    }

    #[cfg(test)]
    pub fn is_attracted(&self) -> bool {
        self.strength > 0.0
    }
}

/// Compute how a magnetic element pulls the glyph.
///
/// Outside `max(width, height) * 0.8` of the element center the pointer is
/// returned untouched with strength 0. Inside, strength is
/// `(1 - distance / radius) ^ 1.5` and the position is clamped into the
/// element box so the glyph hugs its border.
///
/// `_attraction` is the tuning coefficient exposed through `CursorConfig`; the
/// curve above does not scale by it.
pub fn compute_magnetic_pull(pointer: XY, rect: &Rect, _attraction: f64) -> MagneticPull {
    let distance = pointer.distance_to(rect.center());
    let radius = rect.magnetic_radius();

    if distance.is_nan() || distance >= radius {
        return MagneticPull::none(pointer);
    }

    let strength = (1.0 - distance / radius).powf(MAGNETIC_FALLOFF_EXPONENT);
    MagneticPull {
        position: rect.clamp(pointer),
        strength,
    }
}
