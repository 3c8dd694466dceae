use pagemenu_core::{DisplayMode, ScrollingPolicy};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HELP_HINT: &str = " q:quit h/l:swipe tab:tap H/L:drag e:events ";

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let line = status_line(app, area.width);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Short label for the menu's display mode
pub fn mode_label(mode: &DisplayMode) -> &'static str {
    match mode {
        DisplayMode::SegmentedControl => "SEGMENTED",
        DisplayMode::FixedItemWidth {
            scrolling: ScrollingPolicy::PagingEnabled,
            ..
        } => "FIXED/PAGING",
        DisplayMode::FixedItemWidth { .. } => "FIXED",
        DisplayMode::FlexibleItemWidth {
            scrolling: ScrollingPolicy::PagingEnabled,
            ..
        } => "FLEX/PAGING",
        DisplayMode::FlexibleItemWidth { .. } => "FLEX",
    }
}

fn status_text(app: &App) -> String {
    if let Some(msg) = &app.status_message {
        return format!(" {}", msg);
    }

    let page = app.current_page();
    let title = app
        .coordinator
        .menu_strip()
        .item(page)
        .map_or("", |item| item.title.as_str());
    let mut text = format!(
        " {} | {} | {}/{} {}",
        app.coordinator.state().phase().as_str().to_uppercase(),
        mode_label(&app.coordinator.options().display_mode),
        page + 1,
        app.coordinator.item_count(),
        title,
    );
    if let Some(event) = app.last_event() {
        text.push_str(&format!(" | {}", event));
    }
    text
}

fn status_line(app: &App, width: u16) -> Line<'static> {
    let theme = &app.theme;
    let base = Style::default().bg(theme.status_bg);
    let status = status_text(app);

    let width = width as usize;
    let hint = if status.width() + HELP_HINT.width() <= width {
        HELP_HINT
    } else {
        ""
    };
    let padding = width.saturating_sub(status.width() + hint.width());

    Line::from(vec![
        Span::styled(
            status,
            base.fg(theme.status_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), base),
        Span::styled(hint, base.fg(theme.hint)),
    ])
}
