use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use pagemenu_core::config::UiConfig;

use crate::scroll::ScrollConfigExt;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while strip or content is animating
    animation_tick: Duration,
}

impl EventHandler {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            animation_tick: config.scroll.animation_tick_duration(),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the animation frame interval
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Click, drag, release or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_follow_config() {
        let mut config = UiConfig::default();
        config.tick_rate_ms = 250;
        config.scroll.animation_fps = 50;

        let handler = EventHandler::from_config(&config);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
        assert_eq!(handler.animation_tick, Duration::from_millis(20));
    }
}
