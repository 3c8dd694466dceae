//! Navigation state machine
//!
//! ```text
//! Idle ──beginDrag──▶ UserDraggingContent ──decelerationEnded──▶ Idle
//!   │                        ▲
//!   │ tap / swipe / move     │ beginDrag (preempts)
//!   ▼                        │
//! Animating ─────────────────┘
//!   │  ▲
//!   │  └─ tap / swipe / move (retarget)
//!   └──animationCompleted──▶ Idle
//! ```

use serde::Serialize;

use crate::command::TransitionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavPhase {
    /// Nothing in flight
    Idle,
    /// The user is dragging the content pager; its offset is authoritative
    UserDraggingContent,
    /// A navigation move is waiting for its completion
    Animating,
}

impl NavPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: NavPhase) -> bool {
        match (self, target) {
            (NavPhase::Idle, NavPhase::UserDraggingContent) => true,
            (NavPhase::Idle, NavPhase::Animating) => true,
            (NavPhase::Animating, NavPhase::UserDraggingContent) => true,
            (NavPhase::Animating, NavPhase::Idle) => true,
            (NavPhase::UserDraggingContent, NavPhase::Idle) => true,
            // Retargeting while animating, repeated drag reports
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavPhase::Idle => "idle",
            NavPhase::UserDraggingContent => "dragging",
            NavPhase::Animating => "animating",
        }
    }
}

impl std::fmt::Display for NavPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Move waiting for the host to report completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingMove {
    pub transition: TransitionId,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    current_page: usize,
    phase: NavPhase,
    pending: Option<PendingMove>,
}

impl NavigationState {
    pub fn new(current_page: usize) -> Self {
        Self {
            current_page,
            phase: NavPhase::Idle,
            pending: None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.phase == NavPhase::Animating
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == NavPhase::UserDraggingContent
    }

    /// Page new requests are resolved against: the in-flight target if any
    pub fn base_page(&self) -> usize {
        self.pending
            .map(|pending| pending.target)
            .unwrap_or(self.current_page)
    }

    pub(crate) fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub(crate) fn begin_move(&mut self, pending: PendingMove) {
        self.enter(NavPhase::Animating);
        self.pending = Some(pending);
    }

    pub(crate) fn enter(&mut self, phase: NavPhase) {
        debug_assert!(
            self.phase.can_transition_to(phase),
            "invalid navigation transition {} -> {}",
            self.phase,
            phase
        );

        if self.phase != phase {
            tracing::debug!(
                from = %self.phase,
                to = %phase,
                page = self.current_page,
                "Navigation phase transition"
            );
        }
        self.phase = phase;
        if phase != NavPhase::Animating {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(NavPhase::Idle.can_transition_to(NavPhase::UserDraggingContent));
        assert!(NavPhase::Idle.can_transition_to(NavPhase::Animating));
        assert!(NavPhase::Animating.can_transition_to(NavPhase::UserDraggingContent));
        assert!(NavPhase::Animating.can_transition_to(NavPhase::Animating));
        assert!(NavPhase::Animating.can_transition_to(NavPhase::Idle));
        assert!(NavPhase::UserDraggingContent.can_transition_to(NavPhase::Idle));
    }

    #[test]
    fn test_invalid_transitions() {
        // Drags settle through deceleration, never straight into a move
        assert!(!NavPhase::UserDraggingContent.can_transition_to(NavPhase::Animating));
    }

    #[test]
    fn test_base_page_follows_pending_move() {
        let mut state = NavigationState::new(1);
        assert_eq!(state.base_page(), 1);

        state.begin_move(PendingMove {
            transition: TransitionId(1),
            target: 3,
        });
        assert!(state.is_animating());
        assert_eq!(state.base_page(), 3);
        assert_eq!(state.current_page(), 1);

        state.enter(NavPhase::Idle);
        assert_eq!(state.pending(), None);
        assert_eq!(state.base_page(), 1);
    }
}
