use crate::{
    config::CarouselConfig,
    deck::{Deck, Theme},
    focus::focused_index,
    foundation::core::{Affine, Vec2},
    foundation::error::CarouselResult,
    scroll::ScrollExtent,
    transform::{
        BackdropCurves, BackgroundTransform, CardCurves, CardTransform, displacement_steps,
    },
};

/// Count-aware transform engine for one laid-out carousel.
///
/// Offsets are clamped to the scrollable range before sampling, so a
/// single-card carousel always shows its card centered.
#[derive(Clone, Debug)]
pub struct Carousel {
    extent: ScrollExtent,
    card_size: Vec2,
    card: CardCurves,
    backdrop: BackdropCurves,
}

impl Carousel {
    pub fn new(config: &CarouselConfig, count: usize) -> Self {
        let layout = &config.layout;
        Self {
            extent: ScrollExtent::new(layout.step(), count),
            card_size: Vec2::new(layout.card_width(), layout.card_height()),
            card: CardCurves::from_config(&config.card),
            backdrop: BackdropCurves::from_config(&config.backdrop),
        }
    }

    pub fn extent(&self) -> &ScrollExtent {
        &self.extent
    }

    pub fn card_size(&self) -> Vec2 {
        self.card_size
    }

    pub fn displacement(&self, index: usize, offset: f64) -> f64 {
        displacement_steps(index, self.extent.clamp(offset), self.extent.step())
    }

    pub fn card_transform(&self, index: usize, offset: f64) -> CardTransform {
        self.card.sample(self.displacement(index, offset))
    }

    pub fn background_transform(&self, index: usize, offset: f64) -> BackgroundTransform {
        self.backdrop.sample(self.displacement(index, offset))
    }

    pub fn focused_index(&self, offset: f64) -> Option<usize> {
        focused_index(
            self.extent.clamp(offset),
            self.extent.step(),
            self.extent.count(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Requested offset after clamping to the scrollable range.
    pub offset: f64,
    pub focused: Option<usize>,
    /// Back to front: farthest from the center first.
    pub cards: Vec<EvaluatedCard>,
    /// Backdrops with non-zero opacity, in deck order.
    pub backdrops: Vec<EvaluatedBackdrop>,
    pub theme: Option<Theme>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedCard {
    pub index: usize,
    pub id: String,
    /// Signed distance from the scroll center, in steps.
    pub displacement: f64,
    pub transform: CardTransform,
    pub affine: Affine,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedBackdrop {
    pub index: usize,
    pub id: String,
    pub image_uri: String,
    pub opacity: f64,
    pub scale: f64,
}

pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(deck, config), fields(cards = deck.len()))]
    pub fn eval_frame(
        deck: &Deck,
        config: &CarouselConfig,
        offset: f64,
    ) -> CarouselResult<EvaluatedFrame> {
        config.validate()?;
        let carousel = Carousel::new(config, deck.len());
        Ok(Self::eval_with(&carousel, deck, offset))
    }

    /// Evaluate against a prebuilt [`Carousel`]; `carousel` must be sized for `deck`.
    pub fn eval_with(carousel: &Carousel, deck: &Deck, offset: f64) -> EvaluatedFrame {
        let offset = carousel.extent().clamp(offset);
        let focused = carousel.focused_index(offset);

        let mut cards: Vec<EvaluatedCard> = deck
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let transform = carousel.card_transform(index, offset);
                EvaluatedCard {
                    index,
                    id: card.id.clone(),
                    displacement: carousel.displacement(index, offset),
                    affine: transform.to_affine(carousel.card_size()),
                    transform,
                }
            })
            .collect();
        cards.sort_by(|a, b| {
            b.displacement
                .abs()
                .total_cmp(&a.displacement.abs())
                .then(a.index.cmp(&b.index))
        });

        let backdrops = deck
            .cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| {
                let bg = carousel.background_transform(index, offset);
                (bg.opacity > 0.0).then(|| EvaluatedBackdrop {
                    index,
                    id: card.id.clone(),
                    image_uri: card.image.uri.clone(),
                    opacity: bg.opacity,
                    scale: bg.scale,
                })
            })
            .collect();

        let theme = focused.and_then(|i| deck.get(i)).and_then(|c| c.theme());
        tracing::trace!(offset, ?focused, "evaluated carousel frame");

        EvaluatedFrame {
            offset,
            focused,
            cards,
            backdrops,
            theme,
        }
    }
}
