use pagemenu_core::pager::Page;
use pagemenu_core::PageConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct ContentWidget;

impl ContentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        render_pages(
            frame.buffer_mut(),
            area,
            app.coordinator.pager().pages(),
            app.content_offset(),
            &app.theme,
        );
    }
}

/// Paint the pages side by side, scrolled horizontally by `offset` cells
pub fn render_pages(
    buf: &mut Buffer,
    area: Rect,
    pages: &[Page<PageConfig>],
    offset: f64,
    theme: &Theme,
) {
    buf.set_style(area, Style::default().bg(theme.page_bg));
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = i64::from(area.width);
    let total = pages.len();
    for page in pages {
        let left = (page.index as f64 * f64::from(area.width) - offset).round() as i64;
        if left + width <= 0 || left >= width {
            continue;
        }

        // Pages are drawn off-screen at full size, then clipped into place
        let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
        render_page(&mut scratch, &page.handle, page.index, total, theme);
        blit(&scratch, buf, area, left);
    }
}

fn render_page(buf: &mut Buffer, page: &PageConfig, index: usize, total: usize, theme: &Theme) {
    let area = buf.area;
    let block = Block::default()
        .title(format!(" {} ", page.title))
        .title_bottom(format!(" {}/{} ", index + 1, total))
        .title_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.page_border))
        .style(Style::default().fg(theme.page_fg).bg(theme.page_bg));

    Paragraph::new(page.body.as_str())
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
}

/// Copy `src` into `area` of `dst` with its left edge at column `left`
fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, left: i64) {
    for x in 0..src.area.width {
        let col = left + i64::from(x);
        if col < 0 || col >= i64::from(area.width) {
            continue;
        }
        for y in 0..src.area.height.min(area.height) {
            let (Some(cell), Some(target)) = (
                src.cell((x, y)),
                dst.cell_mut((area.x + col as u16, area.y + y)),
            ) else {
                continue;
            };
            *target = cell.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page<PageConfig>> {
        vec![
            Page {
                index: 0,
                handle: PageConfig::new("One", "first body"),
            },
            Page {
                index: 1,
                handle: PageConfig::new("Two", "second body"),
            },
        ]
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()).to_string())
            .collect()
    }

    #[test]
    fn test_first_page_at_rest() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        render_pages(&mut buf, area, &pages(), 0.0, &Theme::default());

        assert!(row(&buf, 0).starts_with("┌ One "));
        assert!(row(&buf, 1).starts_with("│first body"));
        assert!(row(&buf, 4).contains(" 1/2 "));
    }

    #[test]
    fn test_pages_are_clipped_mid_scroll() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        render_pages(&mut buf, area, &pages(), 10.0, &Theme::default());

        let top = row(&buf, 0);
        // Right half of page one, then left half of page two
        assert!(top.starts_with("─"));
        assert_eq!(buf[(9, 0)].symbol(), "┐");
        assert_eq!(buf[(10, 0)].symbol(), "┌");
        assert!(row(&buf, 1).contains("│second"));
    }

    #[test]
    fn test_offset_area_is_respected() {
        let area = Rect::new(0, 3, 20, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 8));
        render_pages(&mut buf, area, &pages(), 20.0, &Theme::default());

        assert!(row(&buf, 0).trim().is_empty());
        assert!(row(&buf, 3).starts_with("┌ Two "));
    }
}
