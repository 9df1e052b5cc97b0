//! Glyph appearance as a function of `(variant, hovered, magnetic strength)`.
//!
//! Nothing here touches the DOM; the overlay writes the computed values into
//! inline styles.

use super::geometry::XY;
use super::variant::CursorVariant;

/// Scale multiplier while hovered.
const HOVER_SCALE: f64 = 2.0;

/// Extra scale per unit of magnetic strength.
const MAGNETIC_SCALE_GAIN: f64 = 0.8;

/// Extra blur (px) per unit of magnetic strength.
const MAGNETIC_BLUR_GAIN: f64 = 1.5;

/// Transition used while the glyph follows the pointer freely.
const FREE_TRANSITION: &str = "transform 0.2s ease-out";

/// Per-variant base look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantLook {
    pub diameter_px: f64,
    pub opacity: f64,
    pub blur_px: f64,
}

impl VariantLook {
    pub fn of(variant: CursorVariant) -> Self {
        match variant {
            CursorVariant::Default => Self {
                diameter_px: 8.0,
                opacity: 1.0,
                blur_px: 0.0,
            },
            CursorVariant::Text => Self {
                diameter_px: 6.0,
                opacity: 1.0,
                blur_px: 0.0,
            },
            CursorVariant::Link => Self {
                diameter_px: 12.0,
                opacity: 0.9,
                blur_px: 0.5,
            },
            CursorVariant::Button => Self {
                diameter_px: 16.0,
                opacity: 0.8,
                blur_px: 1.0,
            },
        }
    }
}

/// A concentric decoration around the glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub scale: f64,
    pub opacity: f64,
}

impl Ring {
    pub fn css(&self) -> String {
        format!(
            "display:block;transform:scale({:.4});opacity:{:.4};",
            self.scale, self.opacity
        )
    }
}

/// Everything the overlay needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphStyle {
    pub variant: CursorVariant,
    pub hovered: bool,
    pub look: VariantLook,
    /// Combined hover and magnetic scale.
    pub scale: f64,
    /// Base blur plus magnetic blur, px.
    pub blur_px: f64,
    pub transition: &'static str,
    /// Soft glow, shown while attracted.
    pub halo: Option<Ring>,
    /// Thin outline, shown while attracted.
    pub outline: Option<Ring>,
    /// Pulsing ring on links and buttons.
    pub ping_opacity: Option<f64>,
}

impl GlyphStyle {
    pub fn compute(variant: CursorVariant, hovered: bool, magnetic_strength: f64) -> Self {
        let strength = magnetic_strength.clamp(0.0, 1.0);
        let attracted = strength > 0.0;
        let look = VariantLook::of(variant);

        let hover_scale = if hovered { HOVER_SCALE } else { 1.0 };
        let scale = hover_scale * (1.0 + strength * MAGNETIC_SCALE_GAIN);
        let blur_px = look.blur_px + strength * MAGNETIC_BLUR_GAIN;

        let (halo, outline) = if attracted {
            (
                Some(Ring {
                    scale: 1.0 + strength * 1.2,
                    opacity: strength * 0.6,
                }),
                Some(Ring {
                    scale: 1.0 + strength * 1.5,
                    opacity: strength * 0.3,
                }),
            )
        } else {
            (None, None)
        };

        let ping_opacity = variant
            .is_interactive()
            .then_some(if attracted { 0.3 } else { 0.2 });

        Self {
            variant,
            hovered,
            look,
            scale,
            blur_px,
            transition: if attracted { "none" } else { FREE_TRANSITION },
            halo,
            outline,
            ping_opacity,
        }
    }

    pub fn class_name(&self) -> String {
        let mut class = format!("cursor-glyph cursor-glyph--{}", self.variant);
        if self.hovered {
            class.push_str(" is-hovered");
        }
        class
    }

    /// Inline style for the glyph element centred on `position`.
    pub fn css(&self, position: XY) -> String {
        let filter = if self.blur_px > 0.0 {
            format!("blur({:.3}px)", self.blur_px)
        } else {
            "none".to_string()
        };
        format!(
            "display:block;left:{:.2}px;top:{:.2}px;width:{d}px;height:{d}px;opacity:{};\
             transform:translate(-50%, -50%) scale({:.4});filter:{};transition:{};",
            position.x,
            position.y,
            self.look.opacity,
            self.scale,
            filter,
            self.transition,
            d = self.look.diameter_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_look() {
        let mut diameters: Vec<f64> = CursorVariant::ALL
            .iter()
            .map(|v| VariantLook::of(*v).diameter_px)
            .collect();
        assert!(diameters.iter().all(|d| *d > 0.0));
        diameters.sort_by(|a, b| a.partial_cmp(b).unwrap());
        diameters.dedup();
        assert_eq!(diameters.len(), 4);
    }

    #[test]
    fn test_strength_modulates_scale_and_blur_monotonically() {
        for variant in CursorVariant::ALL {
            for hovered in [false, true] {
                let mut previous = GlyphStyle::compute(variant, hovered, 0.0);
                for step in 1..=10 {
                    let style = GlyphStyle::compute(variant, hovered, step as f64 / 10.0);
                    assert!(style.scale > previous.scale);
                    assert!(style.blur_px > previous.blur_px);
                    previous = style;
                }
            }
        }
    }

    #[test]
    fn test_free_glyph() {
        let style = GlyphStyle::compute(CursorVariant::Default, false, 0.0);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.blur_px, 0.0);
        assert_eq!(style.transition, FREE_TRANSITION);
        assert!(style.halo.is_none());
        assert!(style.outline.is_none());
        assert!(style.ping_opacity.is_none());
        assert!(style.css(XY::new(1.0, 2.0)).contains("filter:none"));
    }

    #[test]
    fn test_attracted_button() {
        let style = GlyphStyle::compute(CursorVariant::Button, true, 1.0);
        assert!((style.scale - 3.6).abs() < 1e-12);
        assert!((style.blur_px - 2.5).abs() < 1e-12);
        assert_eq!(style.transition, "none");
        let halo = style.halo.unwrap();
        assert!((halo.scale - 2.2).abs() < 1e-12);
        assert!((halo.opacity - 0.6).abs() < 1e-12);
        assert_eq!(style.ping_opacity, Some(0.3));
        assert_eq!(style.class_name(), "cursor-glyph cursor-glyph--button is-hovered");
    }

    #[test]
    fn test_link_ping_without_attraction() {
        let style = GlyphStyle::compute(CursorVariant::Link, true, 0.0);
        assert_eq!(style.ping_opacity, Some(0.2));
    }

    #[test]
    fn test_css_positions_glyph() {
        let style = GlyphStyle::compute(CursorVariant::Text, false, 0.0);
        let css = style.css(XY::new(12.5, 40.0));
        assert!(css.contains("left:12.50px"));
        assert!(css.contains("top:40.00px"));
        assert!(css.contains("width:6px"));
        assert!(css.contains("translate(-50%, -50%)"));
    }
}
