use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::app::App;

pub struct EventLogWidget;

impl EventLogWidget {
    /// Popup listing the most recent navigation notifications, newest first
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let popup_width = 40u16.min(area.width.saturating_sub(4));
        let popup_height = 14u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Events ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.status_bg));

        let visible = block.inner(popup_area).height as usize;
        let items: Vec<ListItem> = app
            .event_log
            .iter()
            .rev()
            .take(visible)
            .enumerate()
            .map(|(i, event)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(app.theme.status_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.hint)
                };
                ListItem::new(Line::from(Span::styled(format!(" {}", event), style)))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), popup_area);
    }
}

/// Center a `width` x `height` rect inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
