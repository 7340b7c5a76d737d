pub use kurbo::{Affine, Vec2};

/// Smallest card width (and therefore step) the carousel accepts, in layout units.
pub const MIN_CARD_WIDTH: f64 = 1.0;

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// Clamp a step to the strictly positive range the breakpoint tables need.
///
/// Zero, negative and non-finite steps collapse to [`MIN_CARD_WIDTH`].
pub fn sanitize_step(step: f64) -> f64 {
    if step.is_finite() && step >= MIN_CARD_WIDTH {
        step
    } else {
        MIN_CARD_WIDTH
    }
}
