//! Animation settings, re-exported from the core config

use std::time::Duration;

pub use pagemenu_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Frame interval while an animation runs
    fn animation_tick_duration(&self) -> Duration;

    /// Whether moves of `duration` should be animated at all
    fn is_smooth(&self, duration: Duration) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self, duration: Duration) -> bool {
        self.smooth_enabled && !duration.is_zero() && self.easing != EasingType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_zero_fps_falls_back() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        let duration = Duration::from_millis(300);
        assert!(config.is_smooth(duration));
        assert!(!config.is_smooth(Duration::ZERO));

        config.smooth_enabled = false;
        assert!(!config.is_smooth(duration));

        config.smooth_enabled = true;
        config.easing = EasingType::None;
        assert!(!config.is_smooth(duration));
    }
}
