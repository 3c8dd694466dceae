mod content;
mod event_log;
mod menu_strip;
mod status_bar;

pub use content::{render_pages, ContentWidget};
pub use event_log::EventLogWidget;
pub use menu_strip::{render_strip, MenuStripWidget};
pub use status_bar::StatusBarWidget;

use ratatui::{style::Style, Frame};

use crate::app::App;

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();

    ContentWidget::render(frame, layout.content, app);
    if let Some(separator) = layout.separator {
        frame
            .buffer_mut()
            .set_style(separator, Style::default().bg(app.theme.separator));
    }
    MenuStripWidget::render(frame, layout.menu, app);

    if let Some(status) = layout.status {
        StatusBarWidget::render(frame, status, app);
    }
    if app.show_log {
        EventLogWidget::render(frame, frame.area(), app);
    }
}
