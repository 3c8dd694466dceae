//! Eased offset animation for the strip and the pager
//!
//! - `easing` - easing curves (cubic, quintic, exponential)
//! - `timing` - progress and interpolation
//! - `config` - animation settings (re-exported from pagemenu-core)
//! - `animation` - the animator combining them
//!
//! ```ignore
//! use pagemenu_tui::scroll::{OffsetAnimator, ScrollConfig};
//!
//! let mut animator = OffsetAnimator::new(ScrollConfig::default(), duration);
//! animator.animate_to(target, Some(tag), Instant::now());
//!
//! // In the main loop
//! if let Some(tag) = animator.update(Instant::now()) {
//!     // move finished
//! }
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::OffsetAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
