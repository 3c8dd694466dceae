use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwipeNext,
    SwipePrev,
    TapNext,
    TapPrev,
    FirstPage,
    LastPage,
    PendingG, // First 'g' press, waiting for second 'g'
    DragNext,
    DragPrev,
    Release,
    StripLeft,
    StripRight,
    CycleBackground,
    ToggleLog,
    // Mouse
    Press { column: u16, row: u16 },
    DragTo { column: u16 },
    Lift,
    Wheel { column: u16, row: u16, delta: i16 },
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = normalize(key);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Terminals disagree on whether Shift is reported with a character; uppercase
/// letters and BackTab always carry it and other characters never do.
fn normalize(key: KeyEvent) -> KeyBinding {
    let mut modifiers = key.modifiers;
    match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers.insert(KeyModifiers::SHIFT),
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => modifiers.remove(KeyModifiers::SHIFT),
        KeyCode::BackTab => modifiers.insert(KeyModifiers::SHIFT),
        _ => {}
    }
    KeyBinding::new(key.code, modifiers)
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Press {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::Drag(MouseButton::Left) => Action::DragTo {
            column: mouse.column,
        },
        MouseEventKind::Up(MouseButton::Left) => Action::Lift,
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::Wheel {
            column: mouse.column,
            row: mouse.row,
            delta: 1,
        },
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::Wheel {
            column: mouse.column,
            row: mouse.row,
            delta: -1,
        },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagemenu_core::AppConfig;
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(AppConfig::default(), Rect::new(0, 0, 80, 24)).unwrap()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_configured_keys() {
        let app = app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('l'), KeyModifiers::NONE), &app, &keymap),
            Action::SwipeNext
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Tab, KeyModifiers::NONE), &app, &keymap),
            Action::TapNext
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_shift_is_normalized() {
        let app = app();
        let keymap = Keymap::default();

        // Some terminals omit Shift on uppercase letters
        assert_eq!(
            handle_key_event(key(KeyCode::Char('L'), KeyModifiers::NONE), &app, &keymap),
            Action::DragNext
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT), &app, &keymap),
            Action::LastPage
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char(']'), KeyModifiers::SHIFT), &app, &keymap),
            Action::StripRight
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        let keymap = Keymap::default();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::FirstPage);
    }

    #[test]
    fn test_mouse_events() {
        let event = |kind| MouseEvent {
            kind,
            column: 7,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left))),
            Action::Press { column: 7, row: 1 }
        );
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Drag(MouseButton::Left))),
            Action::DragTo { column: 7 }
        );
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Up(MouseButton::Left))),
            Action::Lift
        );
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::ScrollUp)),
            Action::Wheel {
                column: 7,
                row: 1,
                delta: -1
            }
        );
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Down(MouseButton::Right))),
            Action::None
        );
    }
}
