//! Which card is nearest the scroll center, and when that changes.

use crate::foundation::core::sanitize_step;

/// Returned by [`compute_focused_index`] when there are no cards.
pub const NO_FOCUS: isize = -1;

/// `round(offset / step)` clamped to `[0, card_count - 1]`; `None` for an empty list.
pub fn focused_index(offset: f64, step: f64, card_count: usize) -> Option<usize> {
    let last = card_count.checked_sub(1)?;
    let step = sanitize_step(step);
    let pos = (offset / step).round();
    if pos.is_nan() || pos <= 0.0 {
        return Some(0);
    }
    if pos >= last as f64 {
        return Some(last);
    }
    Some(pos as usize)
}

/// [`focused_index`] with [`NO_FOCUS`] standing in for an empty list.
pub fn compute_focused_index(offset: f64, step: f64, card_count: usize) -> isize {
    focused_index(offset, step, card_count)
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(NO_FOCUS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FocusChange {
    pub from: Option<usize>,
    pub to: Option<usize>,
}

/// Equality-gated focus state: emits a [`FocusChange`] only when the focused
/// index actually moves, never on sub-step scroll jitter.
#[derive(Clone, Debug, Default)]
pub struct FocusTracker {
    current: Option<usize>,
}

impl FocusTracker {
    pub fn new(initial: Option<usize>) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn update(&mut self, offset: f64, step: f64, card_count: usize) -> Option<FocusChange> {
        self.apply(focused_index(offset, step, card_count))
    }

    /// Apply an already computed index.
    pub fn apply(&mut self, next: Option<usize>) -> Option<FocusChange> {
        if next == self.current {
            return None;
        }
        let change = FocusChange {
            from: self.current,
            to: next,
        };
        tracing::debug!(from = ?change.from, to = ?change.to, "focus changed");
        self.current = next;
        Some(change)
    }
}
