use std::path::Path;

use anyhow::Context as _;

use crate::{
    anim_ease::Ease,
    curve::BreakpointTable,
    foundation::core::{MIN_CARD_WIDTH, sanitize_step},
    foundation::error::{CarouselError, CarouselResult},
};

/// Top-level carousel configuration. Every section falls back to its defaults,
/// so `{}` is a complete config.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub card: TransformConfig,
    pub backdrop: BackdropConfig,
    pub layout: LayoutConfig,
    pub snap: SnapConfig,
}

/// Extreme values of the per-card channels; the inner breakpoints derive from them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Scale at two or more steps from the center.
    pub min_scale: f64,
    /// Depth rotation (degrees) at two steps; one step gets `12/25` of it.
    pub max_rotation_deg: f64,
    /// Vertical drop at two steps; one step gets `0.6` of it.
    pub arc_height: f64,
    /// Horizontal nudge at two steps; one step gets `1/1.6` of it.
    pub max_x_offset: f64,
    pub min_opacity: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.8,
            max_rotation_deg: 25.0,
            arc_height: 48.0,
            max_x_offset: 40.0,
            min_opacity: 0.6,
        }
    }
}

impl TransformConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        for (name, v) in [
            ("min_scale", self.min_scale),
            ("max_rotation_deg", self.max_rotation_deg),
            ("arc_height", self.arc_height),
            ("max_x_offset", self.max_x_offset),
            ("min_opacity", self.min_opacity),
        ] {
            if !v.is_finite() {
                return Err(CarouselError::validation(format!(
                    "card.{name} must be finite"
                )));
            }
            if v < 0.0 {
                return Err(CarouselError::validation(format!(
                    "card.{name} must be >= 0"
                )));
            }
        }
        if self.min_scale <= 0.0 || self.min_scale > 1.0 {
            return Err(CarouselError::validation("card.min_scale must be in (0, 1]"));
        }
        if self.min_opacity <= 0.0 || self.min_opacity > 1.0 {
            return Err(CarouselError::validation(
                "card.min_opacity must be in (0, 1]",
            ));
        }
        Ok(())
    }

    pub fn scale_table(&self) -> BreakpointTable<f64> {
        BreakpointTable::symmetric(self.min_scale, (1.0 + self.min_scale) / 2.0, 1.0)
    }

    pub fn rotation_table(&self) -> BreakpointTable<f64> {
        BreakpointTable::mirrored(self.max_rotation_deg, self.max_rotation_deg * 12.0 / 25.0)
    }

    pub fn translate_y_table(&self) -> BreakpointTable<f64> {
        BreakpointTable::symmetric(self.arc_height, self.arc_height * 0.6, 0.0)
    }

    pub fn translate_x_table(&self) -> BreakpointTable<f64> {
        BreakpointTable::mirrored(self.max_x_offset, self.max_x_offset / 1.6)
    }

    pub fn opacity_table(&self) -> BreakpointTable<f64> {
        BreakpointTable::symmetric(self.min_opacity, (1.0 + self.min_opacity) / 2.0, 1.0)
    }
}

/// Full-bleed backdrop attenuation, as `[edge, near, center]` and mirrored into five points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub opacity: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            opacity: [0.0, 0.5, 0.8],
            scale: [1.1, 1.2, 1.3],
        }
    }
}

impl BackdropConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        if !self.opacity.iter().all(|v| (0.0..=1.0).contains(v)) {
            return Err(CarouselError::validation(
                "backdrop.opacity values must be in [0, 1]",
            ));
        }
        if !self.scale.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(CarouselError::validation(
                "backdrop.scale values must be finite and > 0",
            ));
        }
        for (name, [edge, near, center]) in [("opacity", self.opacity), ("scale", self.scale)] {
            if !(edge <= near && near <= center) {
                return Err(CarouselError::validation(format!(
                    "backdrop.{name} must satisfy edge <= near <= center"
                )));
            }
        }
        Ok(())
    }

    pub fn opacity_table(&self) -> BreakpointTable<f64> {
        let [edge, near, center] = self.opacity;
        BreakpointTable::symmetric(edge, near, center)
    }

    pub fn scale_table(&self) -> BreakpointTable<f64> {
        let [edge, near, center] = self.scale;
        BreakpointTable::symmetric(edge, near, center)
    }
}

/// Horizontal list geometry, in the same linear unit as scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub viewport_width: f64,
    /// Card width as a fraction of the viewport, before `max_card_width` caps it.
    pub card_width_ratio: f64,
    pub max_card_width: f64,
    /// Card height over card width.
    pub card_aspect: f64,
    /// Gap between adjacent cards.
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 390.0,
            card_width_ratio: 0.65,
            max_card_width: 280.0,
            card_aspect: 1.35,
            spacing: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        for (name, v) in [
            ("viewport_width", self.viewport_width),
            ("card_width_ratio", self.card_width_ratio),
            ("max_card_width", self.max_card_width),
            ("card_aspect", self.card_aspect),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CarouselError::validation(format!(
                    "layout.{name} must be finite and > 0"
                )));
            }
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(CarouselError::validation(
                "layout.spacing must be finite and >= 0",
            ));
        }
        if self.card_width() < MIN_CARD_WIDTH {
            return Err(CarouselError::validation(format!(
                "layout card width must be >= {MIN_CARD_WIDTH}"
            )));
        }
        Ok(())
    }

    pub fn card_width(&self) -> f64 {
        (self.viewport_width * self.card_width_ratio).min(self.max_card_width)
    }

    pub fn card_height(&self) -> f64 {
        self.card_width() * self.card_aspect
    }

    /// Center-to-center distance between adjacent cards, never below the card width.
    pub fn step(&self) -> f64 {
        let width = sanitize_step(self.card_width());
        let step = sanitize_step(width + self.spacing);
        step.max(width)
    }

    /// Leading/trailing padding that puts card 0 in the middle of the viewport at offset 0.
    pub fn content_padding(&self) -> f64 {
        ((self.viewport_width - self.card_width()) / 2.0).max(0.0)
    }
}

/// Eased tween used when a released scroll settles on the nearest card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub duration_ms: u64,
    pub ease: Ease,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            ease: Ease::OutCubic,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        self.card.validate()?;
        self.backdrop.validate()?;
        self.layout.validate()?;
        Ok(())
    }

    pub fn from_json_str(s: &str) -> CarouselResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> CarouselResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read carousel config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&s)?;
        tracing::debug!(path = %path.display(), step = cfg.layout.step(), "loaded carousel config");
        Ok(cfg)
    }
}
