//! Pure visual math: ambient gradient, tilt, ripple geometry.
//!
//! Everything here turns positions and colors into CSS values; nothing
//! holds state.

use crate::types::{Bounds, PointerPosition, Rgb};

/// Background the radial highlight fades into
const CARD_BASE: &str = "rgba(17, 24, 39, 0.95)";

/// Maximum rotation either side of centre, in degrees
pub const TILT_RANGE_DEG: f64 = 10.0;

/// Pointer location as percentages of the card box (unclamped)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientOrigin {
    pub x_pct: f64,
    pub y_pct: f64,
}

impl GradientOrigin {
    pub fn from_pointer(bounds: &Bounds, position: PointerPosition) -> Self {
        let (fx, fy) = bounds.fraction_of(position);
        Self {
            x_pct: fx * 100.0,
            y_pct: fy * 100.0,
        }
    }
}

/// Two-layer ambient light: radial highlight under the pointer over a
/// diagonal accent to secondary wash.
pub fn ambient_gradient(origin: GradientOrigin, accent: Rgb, secondary: Rgb) -> String {
    format!(
        "radial-gradient(circle at {x}% {y}%, {hi} 0%, {base} 50%), \
         linear-gradient(45deg, {wash_a} 0%, {wash_b} 100%)",
        x = origin.x_pct,
        y = origin.y_pct,
        hi = accent.css_alpha(0.2),
        base = CARD_BASE,
        wash_a = accent.css_alpha(0.1),
        wash_b = secondary.css_alpha(0.1),
    )
}

/// Resting background of the ambient-light layer
pub fn ambient_light_wash(accent: Rgb, secondary: Rgb) -> String {
    format!(
        "linear-gradient(45deg, {} 0%, {} 100%)",
        accent.css_alpha(0.4),
        secondary.css_alpha(0.4)
    )
}

/// Rotation pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at fractional offset `(fx, fy)` in the card.
    ///
    /// The vertical offset drives rotation about X and the horizontal
    /// offset drives (negated) rotation about Y, each spanning
    /// ±[`TILT_RANGE_DEG`] around the centre.
    pub fn from_fraction(fx: f64, fy: f64) -> Self {
        let span = TILT_RANGE_DEG * 2.0;
        Self {
            rotate_x: (fy - 0.5) * span,
            rotate_y: (fx - 0.5) * -span,
        }
    }

    pub fn from_pointer(bounds: &Bounds, position: PointerPosition) -> Self {
        let (fx, fy) = bounds.fraction_of(position);
        Self::from_fraction(fx, fy)
    }

    /// CSS transform for the tilted, slightly raised card
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.05, 1.05, 1.05)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Placement of a ripple inside its target element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    /// Width and height of the ripple
    pub size: f64,
    /// Offset from the target's left edge
    pub left: f64,
    /// Offset from the target's top edge
    pub top: f64,
}

impl RippleGeometry {
    /// Square ripple covering the target's longer side, centred on the
    /// click point.
    pub fn new(target: &Bounds, click: PointerPosition) -> Self {
        let size = target.max_side();
        Self {
            size,
            left: click.x - target.left - size / 2.0,
            top: click.y - target.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            size = self.size
        )
    }
}
