use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use pagemenu_core::{AppConfig, SwipeDirection};
use pagemenu_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    widgets,
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    let event_handler = EventHandler::from_config(&config.ui);

    // Build the app before touching the terminal so config errors print normally
    let (width, height) = terminal::size()?;
    let mut app = App::new(config, Rect::new(0, 0, width, height))?;
    info!(
        pages = app.coordinator.item_count(),
        width, height, "Starting terminal demo"
    );
    app.set_status(format!(
        "{} pages, press e for the event log",
        app.coordinator.item_count()
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pagemenu"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        // Advance animations and deliver completions
        app.tick(Instant::now());

        terminal.draw(|frame| widgets::draw(frame, app))?;

        // Poll at the frame rate while something is moving
        let event = if app.needs_animation_tick() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Mouse(mouse) => handle_action(app, handle_mouse_event(mouse)),
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action) {
    if action == Action::None {
        return;
    }

    // Anything but a first 'g' ends a pending sequence
    if action != Action::PendingG {
        app.pending_key = None;
    }
    app.clear_status();

    let step = f64::from(app.config.ui.scroll.drag_step.max(1));
    match action {
        Action::Quit => app.should_quit = true,
        Action::SwipeNext => app.swipe(SwipeDirection::Left),
        Action::SwipePrev => app.swipe(SwipeDirection::Right),
        Action::TapNext => app.tap_relative(1),
        Action::TapPrev => app.tap_relative(-1),
        Action::FirstPage => app.move_to_page(0),
        Action::LastPage => app.move_to_last_page(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::DragNext => app.drag_by(step),
        Action::DragPrev => app.drag_by(-step),
        Action::Release | Action::Lift => app.release(),
        Action::StripLeft => app.scroll_strip_by(-step),
        Action::StripRight => app.scroll_strip_by(step),
        Action::CycleBackground => app.cycle_background(),
        Action::ToggleLog => app.show_log = !app.show_log,
        Action::Press { column, row } => app.press(column, row),
        Action::DragTo { column } => app.drag_mouse_to(column),
        Action::Wheel { column, row, delta } => app.wheel(column, row, delta),
        Action::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pagemenu_core::NavPhase;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        App::new(config, Rect::new(0, 0, 80, 24)).unwrap()
    }

    fn press(app: &mut App, keymap: &Keymap, code: KeyCode) {
        let action = handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app, keymap);
        handle_action(app, action);
    }

    #[test]
    fn test_keys_drive_navigation() {
        let mut app = app();
        let keymap = Keymap::default();

        press(&mut app, &keymap, KeyCode::Tab);
        assert_eq!(app.current_page(), 1);
        press(&mut app, &keymap, KeyCode::Char('G'));
        assert_eq!(app.current_page(), 3);
        press(&mut app, &keymap, KeyCode::BackTab);
        assert_eq!(app.current_page(), 2);
    }

    #[test]
    fn test_gg_goes_to_first_page() {
        let mut app = app();
        let keymap = Keymap::default();
        app.move_to_page(3);

        press(&mut app, &keymap, KeyCode::Char('g'));
        assert_eq!(app.pending_key, Some('g'));
        assert_eq!(app.current_page(), 3);
        press(&mut app, &keymap, KeyCode::Char('g'));
        assert_eq!(app.pending_key, None);
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_other_key_cancels_pending_g() {
        let mut app = app();
        let keymap = Keymap::default();

        press(&mut app, &keymap, KeyCode::Char('g'));
        press(&mut app, &keymap, KeyCode::Char('e'));
        assert_eq!(app.pending_key, None);
        assert!(app.show_log);
    }

    #[test]
    fn test_drag_and_release_keys() {
        let mut app = app();
        let keymap = Keymap::default();

        for _ in 0..12 {
            press(&mut app, &keymap, KeyCode::Char('L'));
        }
        assert_eq!(app.coordinator.state().phase(), NavPhase::UserDraggingContent);
        assert_eq!(app.current_page(), 1);

        press(&mut app, &keymap, KeyCode::Char(' '));
        app.tick(Instant::now());
        assert_eq!(app.coordinator.state().phase(), NavPhase::Idle);
        assert_eq!(app.content_offset(), 80.0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        handle_action(&mut app, Action::Quit);
        assert!(app.should_quit);
    }
}
