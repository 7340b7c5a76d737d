//! Scroll-driven card transforms.
//!
//! Each channel is an independent [`BreakpointTable`] keyed by the card's
//! displacement from the scroll center, `index * step - offset`, measured in
//! steps. A card ahead of the focus (positive displacement) leans toward the
//! negative end of the signed channels.

use crate::{
    config::{BackdropConfig, TransformConfig},
    curve::BreakpointTable,
    foundation::core::{Affine, Vec2, sanitize_step},
};

/// Visual transform of one card at one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardTransform {
    pub scale: f64,
    /// Signed depth rotation around the vertical axis, in degrees.
    pub rotation_deg: f64,
    pub translate_y: f64,
    pub translate_x: f64,
    pub opacity: f64,
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_deg: 0.0,
        translate_y: 0.0,
        translate_x: 0.0,
        opacity: 1.0,
    };

    /// Flatten onto the card's 2-D plane: scale about the card center with the
    /// X axis foreshortened by the depth rotation, then translate.
    pub fn to_affine(&self, card_size: Vec2) -> Affine {
        let anchor = card_size * 0.5;
        let foreshorten = self.rotation_deg.to_radians().cos();

        let t_translate = Affine::translate(Vec2::new(self.translate_x, self.translate_y));
        let t_anchor = Affine::translate(anchor);
        let t_unanchor = Affine::translate(-anchor);
        let t_scale = Affine::scale_non_uniform(self.scale * foreshorten, self.scale);

        t_translate * t_anchor * t_scale * t_unanchor
    }
}

/// Attenuation of a card's full-bleed backdrop image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundTransform {
    pub opacity: f64,
    pub scale: f64,
}

/// Precomputed breakpoint tables for the five card channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardCurves {
    scale: BreakpointTable<f64>,
    rotation: BreakpointTable<f64>,
    translate_y: BreakpointTable<f64>,
    translate_x: BreakpointTable<f64>,
    opacity: BreakpointTable<f64>,
}

impl CardCurves {
    pub fn from_config(config: &TransformConfig) -> Self {
        Self {
            scale: config.scale_table(),
            rotation: config.rotation_table(),
            translate_y: config.translate_y_table(),
            translate_x: config.translate_x_table(),
            opacity: config.opacity_table(),
        }
    }

    /// Sample every channel at displacement `u` (in steps).
    pub fn sample(&self, u: f64) -> CardTransform {
        CardTransform {
            scale: self.scale.sample(u),
            rotation_deg: self.rotation.sample(u),
            translate_y: self.translate_y.sample(u),
            translate_x: self.translate_x.sample(u),
            opacity: self.opacity.sample(u),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropCurves {
    opacity: BreakpointTable<f64>,
    scale: BreakpointTable<f64>,
}

impl BackdropCurves {
    pub fn from_config(config: &BackdropConfig) -> Self {
        Self {
            opacity: config.opacity_table(),
            scale: config.scale_table(),
        }
    }

    pub fn sample(&self, u: f64) -> BackgroundTransform {
        BackgroundTransform {
            opacity: self.opacity.sample(u),
            scale: self.scale.sample(u),
        }
    }
}

/// Signed displacement of card `index` from the scroll center, in steps.
///
/// `step` is clamped to a positive minimum and a NaN `offset` reads as 0.
pub fn displacement_steps(index: usize, offset: f64, step: f64) -> f64 {
    let step = sanitize_step(step);
    let offset = if offset.is_nan() { 0.0 } else { offset };
    (index as f64 * step - offset) / step
}

pub fn compute_card_transform(
    index: usize,
    offset: f64,
    step: f64,
    config: &TransformConfig,
) -> CardTransform {
    CardCurves::from_config(config).sample(displacement_steps(index, offset, step))
}

pub fn compute_background_transform(
    index: usize,
    offset: f64,
    step: f64,
    config: &BackdropConfig,
) -> BackgroundTransform {
    BackdropCurves::from_config(config).sample(displacement_steps(index, offset, step))
}
