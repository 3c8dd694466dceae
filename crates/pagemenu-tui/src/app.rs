use std::collections::VecDeque;
use std::time::{Duration, Instant};

use pagemenu_core::{
    AppConfig, Command, ConfigError, NavigationCoordinator, NavigationEvent, PageConfig, Size,
    SwipeDirection, TransitionId,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::measure::CellMeasure;
use crate::scroll::OffsetAnimator;
use crate::theme::Theme;

/// Recent notifications kept for the event log
const EVENT_LOG_CAPACITY: usize = 64;

/// Strip backgrounds cycled by the demo
pub const BACKGROUNDS: [&str; 4] = ["#282828", "#1d2021", "#32302f", "#3c3836"];

/// A finished motion reported back to the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// An animated navigation move settled
    Transition(TransitionId),
    /// The content came to rest after a drag
    Deceleration,
}

/// Content drag driven by the keyboard or the mouse
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_offset: f64,
    offset: f64,
    origin_column: Option<u16>,
    released: bool,
}

/// Screen regions derived from the coordinator's container frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub menu: Rect,
    pub content: Rect,
    pub separator: Option<Rect>,
    pub status: Option<Rect>,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub coordinator: NavigationCoordinator<PageConfig>,
    pub theme: Theme,
    pub strip_animator: OffsetAnimator<Completion>,
    pub content_animator: OffsetAnimator<Completion>,
    completion_tx: UnboundedSender<Completion>,
    completion_rx: UnboundedReceiver<Completion>,
    events_rx: UnboundedReceiver<NavigationEvent>,
    /// Most recent notification last
    pub event_log: VecDeque<NavigationEvent>,
    drag: Option<Drag>,
    /// Full terminal area
    area: Rect,
    /// Whether the app should quit
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    pub show_log: bool,
    background_index: usize,
}

impl App {
    pub fn new(config: AppConfig, area: Rect) -> Result<Self, ConfigError> {
        let container = container_size(area, config.ui.show_status_bar);
        let mut coordinator = NavigationCoordinator::setup(
            config.pages.clone(),
            config.menu.clone(),
            CellMeasure,
            container,
        )?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        coordinator.set_observer(events_tx);
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        let duration = Duration::from_millis(config.menu.animation_duration_ms);
        let theme = Theme::from_options(&config.menu);
        let strip_animator = OffsetAnimator::new(config.ui.scroll.clone(), duration);
        let content_animator = OffsetAnimator::new(config.ui.scroll.clone(), duration);

        let mut app = Self {
            config,
            coordinator,
            theme,
            strip_animator,
            content_animator,
            completion_tx,
            completion_rx,
            events_rx,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            drag: None,
            area,
            should_quit: false,
            status_message: None,
            pending_key: None,
            show_log: false,
            background_index: 0,
        };
        app.apply_commands(Instant::now());
        Ok(app)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn current_page(&self) -> usize {
        self.coordinator.current_page_index()
    }

    pub fn strip_offset(&self) -> f64 {
        self.strip_animator.offset()
    }

    pub fn content_offset(&self) -> f64 {
        self.content_animator.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|drag| !drag.released)
    }

    /// Whether the main loop should poll at the animation frame rate
    pub fn needs_animation_tick(&self) -> bool {
        self.strip_animator.is_animating() || self.content_animator.is_animating()
    }

    pub fn last_event(&self) -> Option<&NavigationEvent> {
        self.event_log.back()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Screen regions for the current terminal area
    pub fn layout(&self) -> AppLayout {
        let status = self.config.ui.show_status_bar && self.area.height > 1;
        let body_height = if status {
            self.area.height - 1
        } else {
            self.area.height
        };
        let frames = self.coordinator.frames();

        AppLayout {
            menu: to_cells(&frames.menu, self.area),
            content: to_cells(&frames.content, self.area),
            separator: frames.separator.map(|rect| to_cells(&rect, self.area)),
            status: status.then(|| Rect::new(self.area.x, self.area.y + body_height, self.area.width, 1)),
        }
    }

    // Host side of the coordinator

    /// Execute queued commands on the animators
    pub fn apply_commands(&mut self, now: Instant) {
        for command in self.coordinator.take_commands() {
            match command {
                Command::MoveStrip {
                    offset, animated, ..
                } => {
                    if animated {
                        self.strip_animator.animate_to(offset, None, now);
                    } else {
                        self.strip_animator.set_offset(offset);
                    }
                }
                Command::ScrollContent {
                    offset,
                    animated,
                    transition,
                    ..
                } => {
                    if animated {
                        let tag = transition.map(Completion::Transition);
                        if let Some(done) = self.content_animator.animate_to(offset, tag, now) {
                            self.complete(done);
                        }
                    } else {
                        self.content_animator.set_offset(offset);
                    }
                }
                Command::Restyle {
                    background_color, ..
                } => self.theme.set_menu_background(&background_color),
            }
        }
    }

    fn complete(&self, completion: Completion) {
        // The receiver lives as long as the app
        let _ = self.completion_tx.send(completion);
    }

    /// Advance animations, deliver completions and collect notifications
    pub fn tick(&mut self, now: Instant) {
        self.strip_animator.update(now);
        if let Some(done) = self.content_animator.update(now) {
            self.complete(done);
        }

        // The pager keeps reporting its offset while it decelerates
        if self.drag.is_some_and(|drag| drag.released) {
            self.coordinator
                .scroll_offset_changed(self.content_animator.offset());
        }

        self.process_completions();
        self.apply_commands(now);
        self.drain_events();
    }

    fn process_completions(&mut self) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            match completion {
                Completion::Transition(transition) => {
                    self.coordinator.animation_completed(transition);
                }
                Completion::Deceleration => {
                    self.drag = None;
                    self.coordinator.deceleration_ended();
                }
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            debug!(%event, "Navigation event");
            if self.event_log.len() == EVENT_LOG_CAPACITY {
                self.event_log.pop_front();
            }
            self.event_log.push_back(event);
        }
    }

    /// Apply commands and collect notifications after an input
    fn after_input(&mut self) {
        let now = Instant::now();
        self.apply_commands(now);
        self.process_completions();
        self.apply_commands(now);
        self.drain_events();
    }

    // Inputs

    pub fn swipe(&mut self, direction: SwipeDirection) {
        self.coordinator.swipe(direction);
        self.after_input();
    }

    pub fn tap(&mut self, index: usize) {
        self.coordinator.tap(index);
        self.after_input();
    }

    /// Tap the item `delta` places away from the current page
    pub fn tap_relative(&mut self, delta: isize) {
        let base = self.coordinator.state().base_page();
        if let Some(index) = base.checked_add_signed(delta) {
            if index < self.coordinator.item_count() {
                self.tap(index);
            }
        }
    }

    pub fn move_to_page(&mut self, page: usize) {
        self.coordinator.move_to_page(page, true);
        self.after_input();
    }

    pub fn move_to_last_page(&mut self) {
        let last = self.coordinator.item_count().saturating_sub(1);
        self.move_to_page(last);
    }

    /// Drag the content by `delta` cells; positive reveals the next page
    pub fn drag_by(&mut self, delta: f64) {
        let offset = self.begin_drag(None).offset + delta;
        self.drag_to(offset);
    }

    fn begin_drag(&mut self, column: Option<u16>) -> Drag {
        match self.drag {
            Some(drag) if !drag.released => drag,
            _ => {
                // Grabbing the content stops whatever it was doing
                self.coordinator.begin_drag();
                self.content_animator.cancel();
                let offset = self.content_animator.offset();
                let drag = Drag {
                    origin_offset: offset,
                    offset,
                    origin_column: column,
                    released: false,
                };
                self.drag = Some(drag);
                drag
            }
        }
    }

    fn drag_to(&mut self, offset: f64) {
        self.coordinator.scroll_offset_changed(offset);
        let tracked = self.coordinator.pager().offset();
        self.content_animator.set_offset(tracked);
        if let Some(drag) = self.drag.as_mut() {
            drag.offset = tracked;
        }
        self.after_input();
    }

    /// Let go of the content; it settles on the nearest page
    pub fn release(&mut self) {
        let Some(drag) = self.drag.as_mut().filter(|drag| !drag.released) else {
            return;
        };
        drag.released = true;
        let translation = drag.origin_offset - drag.offset;

        self.coordinator.deceleration_will_begin(translation);
        self.decelerate_to_rest();
        self.after_input();
    }

    /// Glide the content to the current page; landing ends the drag
    fn decelerate_to_rest(&mut self) {
        let pager = self.coordinator.pager();
        let rest = pager.offset_for(pager.current_page());
        if let Some(done) =
            self.content_animator
                .animate_to(rest, Some(Completion::Deceleration), Instant::now())
        {
            self.complete(done);
        }
    }

    pub fn scroll_strip_by(&mut self, delta: f64) {
        let target = self.strip_animator.offset() + delta;
        let offset = self.coordinator.scroll_strip_to(target);
        self.strip_animator.set_offset(offset);
    }

    pub fn cycle_background(&mut self) {
        self.background_index = (self.background_index + 1) % BACKGROUNDS.len();
        self.coordinator
            .change_background_color(BACKGROUNDS[self.background_index], true);
        self.after_input();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        let container = container_size(self.area, self.config.ui.show_status_bar);
        self.coordinator.on_container_resized(container);
        if let Some(drag) = self.drag.as_mut() {
            drag.offset = self.coordinator.pager().offset();
            drag.origin_offset = drag.offset;
        }
        self.after_input();

        // Relayout snaps the content and drops any deceleration in flight
        if self.drag.is_some_and(|drag| drag.released) {
            self.decelerate_to_rest();
            self.after_input();
        }
    }

    // Mouse

    pub fn press(&mut self, column: u16, row: u16) {
        let layout = self.layout();
        if contains(layout.menu, column, row) {
            let x = f64::from(column - layout.menu.x);
            if let Some(index) = self.coordinator.menu_strip().item_at(x) {
                self.tap(index);
            }
        } else if contains(layout.content, column, row) {
            self.begin_drag(Some(column));
        }
    }

    pub fn drag_mouse_to(&mut self, column: u16) {
        let Some(drag) = self.drag.filter(|drag| !drag.released) else {
            return;
        };
        let Some(origin) = drag.origin_column else {
            return;
        };
        let offset = drag.origin_offset + f64::from(origin) - f64::from(column);
        self.drag_to(offset);
    }

    pub fn wheel(&mut self, column: u16, row: u16, delta: i16) {
        let layout = self.layout();
        if contains(layout.menu, column, row) {
            let step = f64::from(self.config.ui.scroll.drag_step.max(1));
            self.scroll_strip_by(f64::from(delta) * step);
        }
    }
}

/// Size handed to the coordinator: the terminal minus the status bar
pub fn container_size(area: Rect, show_status_bar: bool) -> Size {
    let height = if show_status_bar {
        area.height.saturating_sub(1)
    } else {
        area.height
    };
    Size::new(f64::from(area.width), f64::from(height))
}

fn to_cells(rect: &pagemenu_core::Rect, area: Rect) -> Rect {
    let clamp = |value: f64| value.round().clamp(0.0, f64::from(u16::MAX)) as u16;
    Rect::new(
        area.x.saturating_add(clamp(rect.x)),
        area.y.saturating_add(clamp(rect.y)),
        clamp(rect.width),
        clamp(rect.height),
    )
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
