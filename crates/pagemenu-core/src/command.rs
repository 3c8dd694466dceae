//! Commands the coordinator hands to the host for execution

use serde::Serialize;

/// Identifies one animated navigation move.
///
/// The host reports it back through
/// [`NavigationCoordinator::animation_completed`](crate::NavigationCoordinator::animation_completed)
/// once the content pager settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TransitionId(pub u64);

impl std::fmt::Display for TransitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Scroll the menu strip so `page` is revealed
    MoveStrip {
        page: usize,
        offset: f64,
        animated: bool,
    },
    /// Scroll the content pager to `page`
    ScrollContent {
        page: usize,
        offset: f64,
        animated: bool,
        /// Set for animated navigation moves that expect a completion
        transition: Option<TransitionId>,
    },
    /// Change the strip background
    Restyle {
        background_color: String,
        animated: bool,
    },
}
