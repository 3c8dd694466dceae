//! Offset animation controller
//!
//! Drives one horizontal offset (the strip or the pager) toward a target with
//! easing. Each animation can carry a tag that is handed back when it
//! finishes; a tag whose animation is replaced or cancelled is dropped.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation<T> {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
    tag: Option<T>,
}

#[derive(Debug, Clone)]
pub struct OffsetAnimator<T> {
    animation: Option<ActiveAnimation<T>>,
    config: ScrollConfig,
    /// Length of every animated move
    duration: Duration,
    /// Current interpolated offset
    offset: f64,
}

impl<T> OffsetAnimator<T> {
    pub fn new(config: ScrollConfig, duration: Duration) -> Self {
        Self {
            animation: None,
            config,
            duration,
            offset: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Final offset once the running animation ends
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.offset)
    }

    /// Jump to `offset`, cancelling any animation
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.offset = offset;
    }

    /// Start moving toward `target`.
    ///
    /// Returns `tag` straight away when the move completes instantly, either
    /// because smooth scrolling is off or because the offset is already there.
    pub fn animate_to(&mut self, target: f64, tag: Option<T>, now: Instant) -> Option<T> {
        if !self.config.is_smooth(self.duration) || (self.offset - target).abs() < f64::EPSILON {
            self.set_offset(target);
            return tag;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.offset,
            to: target,
            duration: self.duration,
            easing: self.config.easing,
            tag,
        });
        None
    }

    /// Advance to `now`, returning the tag of an animation that just finished
    pub fn update(&mut self, now: Instant) -> Option<T> {
        let anim = self.animation.as_ref()?;

        if is_complete(anim.start, anim.duration, now) {
            let anim = self.animation.take()?;
            self.offset = anim.to;
            return anim.tag;
        }

        let t = anim.easing.apply(progress(anim.start, anim.duration, now));
        self.offset = lerp(anim.from, anim.to, t);
        None
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(smooth_enabled: bool) -> OffsetAnimator<u32> {
        let config = ScrollConfig {
            smooth_enabled,
            easing: EasingType::Linear,
            ..Default::default()
        };
        OffsetAnimator::new(config, Duration::from_millis(100))
    }

    #[test]
    fn test_instant_move_when_disabled() {
        let mut animator = animator(false);
        assert_eq!(animator.animate_to(80.0, Some(1), Instant::now()), Some(1));
        assert_eq!(animator.offset(), 80.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_move_to_current_offset_completes_immediately() {
        let mut animator = animator(true);
        assert_eq!(animator.animate_to(0.0, Some(3), Instant::now()), Some(3));
    }

    #[test]
    fn test_animation_interpolates_and_reports_tag() {
        let mut animator = animator(true);
        let start = Instant::now();

        assert_eq!(animator.animate_to(100.0, Some(7), start), None);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), 100.0);

        assert_eq!(animator.update(start + Duration::from_millis(50)), None);
        assert!((animator.offset() - 50.0).abs() < 1e-6);

        assert_eq!(animator.update(start + Duration::from_millis(100)), Some(7));
        assert_eq!(animator.offset(), 100.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(start + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_replaced_animation_drops_tag() {
        let mut animator = animator(true);
        let start = Instant::now();

        animator.animate_to(100.0, Some(1), start);
        animator.update(start + Duration::from_millis(50));
        animator.animate_to(200.0, Some(2), start + Duration::from_millis(50));

        // Continues from where the first animation was
        assert_eq!(animator.update(start + Duration::from_millis(50)), None);
        assert!((animator.offset() - 50.0).abs() < 1e-6);
        assert_eq!(animator.update(start + Duration::from_millis(150)), Some(2));
        assert_eq!(animator.offset(), 200.0);
    }

    #[test]
    fn test_set_offset_cancels() {
        let mut animator = animator(true);
        let start = Instant::now();
        animator.animate_to(100.0, Some(1), start);
        animator.set_offset(30.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(start + Duration::from_secs(1)), None);
        assert_eq!(animator.offset(), 30.0);
    }
}
