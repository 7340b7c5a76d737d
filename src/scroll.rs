use crate::{
    anim_ease::Ease, config::SnapConfig, focus::focused_index, foundation::core::sanitize_step,
};

/// Scrollable range of a carousel: offsets run from card 0 centered to the last
/// card centered, with no overscroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    step: f64,
    count: usize,
}

impl ScrollExtent {
    pub fn new(step: f64, count: usize) -> Self {
        Self {
            step: sanitize_step(step),
            count,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max_offset(&self) -> f64 {
        self.offset_for(self.count.saturating_sub(1))
    }

    pub fn offset_for(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Offset of the card a released scroll settles on; `None` without cards.
    pub fn snap_target(&self, offset: f64) -> Option<(usize, f64)> {
        let index = focused_index(offset, self.step, self.count)?;
        Some((index, self.offset_for(index)))
    }
}

/// Eased scroll animation from one offset to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTween {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u64,
    ease: Ease,
}

impl SnapTween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            ease,
        }
    }

    pub fn from_config(from: f64, to: f64, start_ms: u64, config: &SnapConfig) -> Self {
        Self::new(from, to, start_ms, config.duration_ms, config.ease)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = self.ease.apply(elapsed as f64 / self.duration_ms as f64);
        self.from + (self.to - self.from) * t
    }

    /// Restart toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, now_ms: u64, to: f64) {
        let current = self.sample(now_ms);
        *self = Self::new(current, to, now_ms, self.duration_ms, self.ease);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_clamps_without_overscroll() {
        let extent = ScrollExtent::new(300.0, 5);
        assert_eq!(extent.max_offset(), 1200.0);
        assert_eq!(extent.clamp(-50.0), 0.0);
        assert_eq!(extent.clamp(1500.0), 1200.0);
        assert_eq!(extent.clamp(f64::NAN), 0.0);
        assert_eq!(extent.clamp(640.0), 640.0);
    }

    #[test]
    fn single_and_empty_decks_do_not_scroll() {
        for count in [0, 1] {
            let extent = ScrollExtent::new(300.0, count);
            assert_eq!(extent.max_offset(), 0.0);
            assert_eq!(extent.clamp(999.0), 0.0);
        }
        assert_eq!(ScrollExtent::new(300.0, 0).snap_target(10.0), None);
    }

    #[test]
    fn snaps_to_nearest_card() {
        let extent = ScrollExtent::new(300.0, 5);
        assert_eq!(extent.snap_target(410.0), Some((1, 300.0)));
        assert_eq!(extent.snap_target(460.0), Some((2, 600.0)));
        assert_eq!(extent.snap_target(9000.0), Some((4, 1200.0)));
    }

    #[test]
    fn tween_reaches_target_exactly() {
        let tween = SnapTween::new(410.0, 300.0, 1000, 250, Ease::OutCubic);
        assert_eq!(tween.sample(1000), 410.0);
        assert_eq!(tween.sample(900), 410.0);
        let mid = tween.sample(1125);
        assert!(mid < 410.0 && mid > 300.0);
        assert!(!tween.is_done(1249));
        assert!(tween.is_done(1250));
        assert_eq!(tween.sample(1250), 300.0);
        assert_eq!(tween.sample(5000), 300.0);
    }

    #[test]
    fn tween_retarget_continues_from_current() {
        let mut tween = SnapTween::new(0.0, 300.0, 0, 100, Ease::Linear);
        tween.retarget(50, 600.0);
        assert_eq!(tween.sample(50), 150.0);
        assert_eq!(tween.sample(100), 375.0);
        assert_eq!(tween.sample(150), 600.0);
        assert_eq!(tween.target(), 600.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = SnapTween::new(0.0, 10.0, 5, 0, Ease::Linear);
        assert!(tween.is_done(6));
        assert_eq!(tween.sample(6), 10.0);
    }
}
