//! Scroll-driven transform engine for the Sport Challenger event carousel.
//!
//! Every card's scale, depth rotation, arc offset and opacity is a pure
//! function of the scroll offset, sampled from five-point breakpoint tables
//! around the card's own center.
#![forbid(unsafe_code)]

mod foundation;

pub mod anim_ease;
pub mod color;
pub mod config;
pub mod curve;
pub mod deck;
pub mod eval;
pub mod focus;
pub mod scroll;
pub mod transform;

pub use crate::foundation::core::{Affine, MIN_CARD_WIDTH, Rgba8Premul, Vec2, sanitize_step};
pub use crate::foundation::error::{CarouselError, CarouselResult};

pub use anim_ease::Ease;
pub use color::Color;
pub use config::{BackdropConfig, CarouselConfig, LayoutConfig, SnapConfig, TransformConfig};
pub use curve::{BREAKPOINTS, BreakpointTable, Lerp};
pub use deck::{Deck, EventCard, ImageRef, Theme};
pub use eval::{Carousel, EvaluatedBackdrop, EvaluatedCard, EvaluatedFrame, Evaluator};
pub use focus::{FocusChange, FocusTracker, NO_FOCUS, compute_focused_index, focused_index};
pub use scroll::{ScrollExtent, SnapTween};
pub use transform::{
    BackdropCurves, BackgroundTransform, CardCurves, CardTransform, compute_background_transform,
    compute_card_transform, displacement_steps,
};
