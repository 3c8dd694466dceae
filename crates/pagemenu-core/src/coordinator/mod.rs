//! Navigation coordinator
//!
//! Owns the current page and reconciles the three input sources: drags on the
//! content pager, taps and swipes on the menu strip, and programmatic moves.
//! The strip and pager only respond to its commands; motion is executed by
//! the host, which drains [`NavigationCoordinator::take_commands`] and reports
//! animated moves back through [`NavigationCoordinator::animation_completed`].
//!
//! A request arriving while a move is in flight replaces it: step rules are
//! resolved against the in-flight target and the superseded completion is
//! ignored. Requests made while the user drags the content do not navigate.

mod observer;
mod state;

pub use observer::{NavigationEvent, NavigationObserver};
pub use state::{NavPhase, NavigationState, PendingMove};

use crate::command::{Command, TransitionId};
use crate::error::ConfigError;
use crate::geometry::{container_frames, ContainerFrames, Size, TextMeasure};
use crate::menu_strip::MenuStrip;
use crate::options::LayoutOptions;
use crate::pager::ContentPager;
use crate::policy::{step, SwipeDirection};
use crate::validator::validate;

/// Title used for pages that do not provide one
pub const DEFAULT_TITLE: &str = "Menu";

/// Host-owned content shown in one page slot
pub trait PageHandle {
    /// Menu title for this page
    fn title(&self) -> Option<&str> {
        None
    }
}

impl PageHandle for String {
    fn title(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PageHandle for &str {
    fn title(&self) -> Option<&str> {
        Some(*self)
    }
}

fn titles_of<H: PageHandle>(pages: &[H]) -> Vec<String> {
    pages
        .iter()
        .map(|page| page.title().unwrap_or(DEFAULT_TITLE).to_string())
        .collect()
}

pub struct NavigationCoordinator<H> {
    options: LayoutOptions,
    measure: Box<dyn TextMeasure>,
    container: Size,
    frames: ContainerFrames,
    strip: MenuStrip,
    pager: ContentPager<H>,
    state: NavigationState,
    observer: Option<Box<dyn NavigationObserver>>,
    commands: Vec<Command>,
    next_transition: u64,
}

impl<H: PageHandle> NavigationCoordinator<H> {
    /// Build the strip and pager for `pages`, titled by each page
    pub fn setup(
        pages: Vec<H>,
        options: LayoutOptions,
        measure: impl TextMeasure + 'static,
        container: Size,
    ) -> Result<Self, ConfigError> {
        let titles = titles_of(&pages);
        Self::setup_with_titles(titles, pages, options, measure, container)
    }

    /// Tear everything down and set up again with new pages and options.
    ///
    /// On error the current strip, pager and state are left untouched.
    pub fn rebuild(&mut self, pages: Vec<H>, options: LayoutOptions) -> Result<(), ConfigError> {
        let titles = titles_of(&pages);
        self.rebuild_with_titles(titles, pages, options)
    }
}

impl<H> NavigationCoordinator<H> {
    /// Build the strip from explicit `titles`, one per page
    pub fn setup_with_titles(
        titles: Vec<String>,
        pages: Vec<H>,
        options: LayoutOptions,
        measure: impl TextMeasure + 'static,
        container: Size,
    ) -> Result<Self, ConfigError> {
        validate(&options, titles.len(), pages.len())?;

        let measure: Box<dyn TextMeasure> = Box::new(measure);
        let frames = container_frames(&options, container);
        let strip = MenuStrip::new(
            titles,
            &options,
            measure.as_ref(),
            frames.menu.width,
            options.default_page,
        );
        let pager = ContentPager::new(pages, frames.content.width);
        let state = NavigationState::new(options.default_page);

        tracing::info!(
            items = strip.len(),
            default_page = options.default_page,
            display_mode = ?options.display_mode,
            "Paging menu set up"
        );

        let mut coordinator = Self {
            options,
            measure,
            container,
            frames,
            strip,
            pager,
            state,
            observer: None,
            commands: Vec::new(),
            next_transition: 0,
        };
        coordinator.push_layout_commands();
        Ok(coordinator)
    }

    /// Rebuild from explicit `titles`; see [`NavigationCoordinator::rebuild`]
    pub fn rebuild_with_titles(
        &mut self,
        titles: Vec<String>,
        pages: Vec<H>,
        options: LayoutOptions,
    ) -> Result<(), ConfigError> {
        validate(&options, titles.len(), pages.len())?;

        if let Some(pending) = self.state.pending() {
            tracing::debug!(transition = %pending.transition, "Rebuild discards in-flight move");
        }

        self.frames = container_frames(&options, self.container);
        self.strip = MenuStrip::new(
            titles,
            &options,
            self.measure.as_ref(),
            self.frames.menu.width,
            options.default_page,
        );
        self.pager = ContentPager::new(pages, self.frames.content.width);
        self.state = NavigationState::new(options.default_page);
        self.options = options;
        self.commands.clear();

        tracing::info!(
            items = self.strip.len(),
            default_page = self.options.default_page,
            "Paging menu rebuilt"
        );

        self.push_layout_commands();
        Ok(())
    }

    /// Register the observer receiving navigation notifications
    pub fn set_observer(&mut self, observer: impl NavigationObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn current_page_index(&self) -> usize {
        self.state.current_page()
    }

    pub fn item_count(&self) -> usize {
        self.strip.len()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn menu_strip(&self) -> &MenuStrip {
        &self.strip
    }

    pub fn pager(&self) -> &ContentPager<H> {
        &self.pager
    }

    pub fn frames(&self) -> &ContainerFrames {
        &self.frames
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// Drain the commands queued since the last call
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    // Inputs

    /// A menu item was tapped
    pub fn tap(&mut self, index: usize) {
        if index >= self.item_count() {
            tracing::warn!(index, items = self.item_count(), "Tap outside the menu ignored");
            return;
        }
        self.notify(|observer| observer.tapped_item(index));

        if self.state.is_dragging() {
            tracing::debug!(index, "Tap during content drag does not navigate");
            return;
        }

        let base = self.state.base_page();
        if index == base {
            return;
        }

        let target = self
            .options
            .display_mode
            .resolve_tap_target(base, index, self.item_count());
        self.navigate(target, true);
    }

    /// A swipe on the menu strip
    pub fn swipe(&mut self, direction: SwipeDirection) {
        if !self.options.display_mode.swipe_enabled() {
            tracing::trace!(?direction, "Swipe ignored outside paging mode");
            return;
        }
        if self.state.is_dragging() {
            tracing::debug!(?direction, "Swipe during content drag does not navigate");
            return;
        }

        let base = self.state.base_page();
        let target = self
            .options
            .display_mode
            .resolve_swipe_target(base, direction, self.item_count());
        if target != base {
            self.navigate(target, true);
        }
    }

    /// Programmatic move; out-of-range pages are clamped to the last page
    pub fn move_to_page(&mut self, page: usize, animated: bool) {
        let last = self.item_count().saturating_sub(1);
        let target = if page > last {
            tracing::warn!(page, last, "Requested page out of range, clamping");
            last
        } else {
            page
        };

        if self.state.is_dragging() {
            tracing::warn!(page = target, "Move requested during content drag ignored");
            return;
        }
        if target == self.state.base_page() {
            return;
        }

        self.navigate(target, animated);
    }

    /// The user put a finger on the content pager
    pub fn begin_drag(&mut self) {
        if let Some(pending) = self.state.pending() {
            tracing::debug!(
                transition = %pending.transition,
                target = pending.target,
                "Content drag preempts in-flight move"
            );
            // The strip was already sent to the abandoned target
            let command = self.strip.move_to(self.state.current_page(), true);
            self.commands.push(command);
        }
        self.state.enter(NavPhase::UserDraggingContent);
    }

    /// The content pager reported a new offset
    pub fn scroll_offset_changed(&mut self, offset: f64) {
        if !self.state.is_dragging() {
            return;
        }

        self.pager.track(offset);
        let candidate = self.pager.page_at(offset);
        if candidate != self.state.current_page() {
            self.set_current_page(candidate);
            let command = self.strip.move_to(candidate, true);
            self.commands.push(command);
        }
    }

    /// The finger lifted and the pager starts decelerating.
    ///
    /// `translation_x` is the horizontal pan distance of the drag; a negative
    /// value means the content was pulled toward the next page.
    pub fn deceleration_will_begin(&mut self, translation_x: f64) {
        if !self.state.is_dragging() {
            return;
        }

        let direction = if translation_x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };
        let guess = step(self.state.current_page(), direction, self.item_count());
        self.notify(|observer| observer.will_move_to_page(guess));
    }

    /// The pager came to rest after a drag
    pub fn deceleration_ended(&mut self) {
        if !self.state.is_dragging() {
            return;
        }

        self.state.enter(NavPhase::Idle);
        let page = self.state.current_page();
        self.notify(|observer| observer.did_move_to_page(page));
    }

    /// The host finished executing an animated move.
    ///
    /// Returns `false` for superseded transitions, which are ignored.
    pub fn animation_completed(&mut self, transition: TransitionId) -> bool {
        match self.state.pending() {
            Some(pending) if pending.transition == transition => {
                self.settle(pending.target);
                true
            }
            _ => {
                tracing::debug!(%transition, "Ignoring completion of superseded move");
                false
            }
        }
    }

    /// The container changed size; re-lay out and snap to the current page.
    ///
    /// An in-flight move settles immediately.
    pub fn on_container_resized(&mut self, size: Size) {
        if let Some(pending) = self.state.pending() {
            self.settle(pending.target);
        }

        self.container = size;
        self.frames = container_frames(&self.options, size);
        self.strip
            .relayout(&self.options, self.measure.as_ref(), self.frames.menu.width);
        self.pager
            .set_page_width(self.frames.content.width, self.state.current_page());

        tracing::debug!(width = size.width, height = size.height, "Container resized");
        self.push_layout_commands();
    }

    /// Free scrolling of the strip by the user, where the display mode allows it
    pub fn scroll_strip_to(&mut self, offset: f64) -> f64 {
        self.strip.scroll_to_offset(offset)
    }

    /// Change the strip background and remember it in the options
    pub fn change_background_color(&mut self, color: impl Into<String>, animated: bool) {
        let color = color.into();
        // Options change when the restyle is queued, not when the host finishes it
        self.options.background_color = color.clone();
        self.commands.push(Command::Restyle {
            background_color: color,
            animated,
        });
    }

    // Internals

    fn navigate(&mut self, target: usize, animated: bool) {
        if let Some(pending) = self.state.pending() {
            tracing::debug!(
                transition = %pending.transition,
                from = pending.target,
                to = target,
                "Retargeting in-flight move"
            );
        }

        self.notify(|observer| observer.will_move_to_page(target));

        let strip_command = self.strip.move_to(target, animated);
        self.commands.push(strip_command);

        if animated {
            let transition = self.next_transition_id();
            self.state.begin_move(PendingMove { transition, target });
            let content_command = self.pager.scroll_to(target, true, Some(transition));
            self.commands.push(content_command);
        } else {
            let content_command = self.pager.scroll_to(target, false, None);
            self.commands.push(content_command);
            self.settle(target);
        }
    }

    fn settle(&mut self, page: usize) {
        self.set_current_page(page);
        self.state.enter(NavPhase::Idle);
        self.notify(|observer| observer.did_move_to_page(page));
    }

    fn set_current_page(&mut self, page: usize) {
        debug_assert!(page < self.item_count());

        self.state.set_current_page(page);
        if let Some(previous) = self.strip.select(page) {
            self.notify(|observer| observer.selection_changed(previous, page));
        }
    }

    fn push_layout_commands(&mut self) {
        let page = self.state.current_page();
        let strip_command = self.strip.move_to(page, false);
        let content_command = self.pager.scroll_to(page, false, None);
        self.commands.push(strip_command);
        self.commands.push(content_command);
    }

    fn next_transition_id(&mut self) -> TransitionId {
        self.next_transition += 1;
        TransitionId(self.next_transition)
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn NavigationObserver)) {
        if let Some(observer) = self.observer.as_mut() {
            f(observer.as_mut());
        }
    }
}
