//! Navigation notifications

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

/// Receives navigation notifications. Every method is optional.
pub trait NavigationObserver {
    /// A move to `page` is about to start
    fn will_move_to_page(&mut self, _page: usize) {}

    /// `page` is now current and settled
    fn did_move_to_page(&mut self, _page: usize) {}

    /// A menu item was tapped, whether or not navigation follows
    fn tapped_item(&mut self, _index: usize) {}

    /// The highlighted menu item changed
    fn selection_changed(&mut self, _previous: usize, _current: usize) {}
}

/// Notification as a value, for channel-based observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavigationEvent {
    WillMove { page: usize },
    DidMove { page: usize },
    Tapped { index: usize },
    SelectionChanged { previous: usize, current: usize },
}

impl std::fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationEvent::WillMove { page } => write!(f, "will move to {}", page),
            NavigationEvent::DidMove { page } => write!(f, "did move to {}", page),
            NavigationEvent::Tapped { index } => write!(f, "tapped {}", index),
            NavigationEvent::SelectionChanged { previous, current } => {
                write!(f, "selection {} -> {}", previous, current)
            }
        }
    }
}

/// Forward notifications into a channel drained by the host loop.
/// A closed receiver just drops them.
impl NavigationObserver for UnboundedSender<NavigationEvent> {
    fn will_move_to_page(&mut self, page: usize) {
        let _ = self.send(NavigationEvent::WillMove { page });
    }

    fn did_move_to_page(&mut self, page: usize) {
        let _ = self.send(NavigationEvent::DidMove { page });
    }

    fn tapped_item(&mut self, index: usize) {
        let _ = self.send(NavigationEvent::Tapped { index });
    }

    fn selection_changed(&mut self, previous: usize, current: usize) {
        let _ = self.send(NavigationEvent::SelectionChanged { previous, current });
    }
}
