use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;

use crate::{
    color::Color,
    foundation::core::Rgba8Premul,
    foundation::error::{CarouselError, CarouselResult},
};

const BUILTIN_DECK: &str = include_str!("../data/events.json");

/// Ordered event cards shown by the carousel.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    pub cards: Vec<EventCard>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date: String, // display string, not parsed
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub image: ImageRef,
    pub colors: Vec<Color>, // top-to-bottom gradient stops
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageRef {
    pub uri: String,
}

/// Vertical background gradient keyed to the focused card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub top: Rgba8Premul,
    pub bottom: Rgba8Premul,
}

impl EventCard {
    /// First and last gradient stops; `None` when the card carries no colors.
    pub fn theme(&self) -> Option<Theme> {
        let top = self.colors.first()?;
        let bottom = self.colors.last()?;
        Some(Theme {
            top: top.to_rgba8_premul(),
            bottom: bottom.to_rgba8_premul(),
        })
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.place.to_lowercase().contains(needle)
    }
}

impl Deck {
    pub fn builtin() -> CarouselResult<Self> {
        Self::from_json_str(BUILTIN_DECK)
    }

    pub fn from_json_str(s: &str) -> CarouselResult<Self> {
        let deck: Self = serde_json::from_str(s)?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn from_path(path: &Path) -> CarouselResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read deck '{}'", path.display()))?;
        let deck = Self::from_json_str(&s)?;
        tracing::debug!(path = %path.display(), cards = deck.len(), "loaded deck");
        Ok(deck)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        let mut seen = BTreeSet::new();
        for (i, card) in self.cards.iter().enumerate() {
            if card.id.trim().is_empty() {
                return Err(CarouselError::validation(format!(
                    "card {i} has an empty id"
                )));
            }
            if !seen.insert(card.id.as_str()) {
                return Err(CarouselError::validation(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
            if card.colors.is_empty() {
                return Err(CarouselError::validation(format!(
                    "card '{}' must have at least one color",
                    card.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EventCard> {
        self.cards.get(index)
    }

    /// Case-insensitive substring match on title or place, in deck order.
    pub fn filter(&self, query: &str) -> Vec<(usize, &EventCard)> {
        let needle = query.trim().to_lowercase();
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| needle.is_empty() || card.matches(&needle))
            .collect()
    }
}
