use pagemenu_core::{ItemMode, LayoutOptions, MenuItem, MenuStrip};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::theme::Theme;

pub struct MenuStripWidget;

impl MenuStripWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        render_strip(
            frame.buffer_mut(),
            area,
            app.coordinator.menu_strip(),
            app.coordinator.options(),
            app.strip_offset(),
            &app.theme,
        );
    }
}

/// Paint the strip scrolled to `offset` into `area`
pub fn render_strip(
    buf: &mut Buffer,
    area: Rect,
    strip: &MenuStrip,
    options: &LayoutOptions,
    offset: f64,
    theme: &Theme,
) {
    buf.set_style(area, Style::default().bg(theme.menu_bg));

    for item in strip.items() {
        let left = (item.x - offset).round() as i64;
        let right = (item.x + item.width() - offset).round() as i64;
        if right <= 0 || left >= i64::from(area.width) {
            continue;
        }
        render_item(buf, area, item, options, offset, theme);
    }
}

fn render_item(
    buf: &mut Buffer,
    area: Rect,
    item: &MenuItem,
    options: &LayoutOptions,
    offset: f64,
    theme: &Theme,
) {
    let g = &item.geometry;
    let selected = item.is_selected();
    let col = |x: f64| (x - offset).round() as i64;

    let frame_bg = if selected {
        theme.menu_selected_bg
    } else {
        theme.menu_bg
    };
    let (slot_bg, fg, border) = if selected {
        (theme.item_selected_bg, theme.selected_text, theme.selected_border)
    } else {
        (theme.item_bg, theme.text, theme.border)
    };

    let frame_left = col(item.x);
    let frame_right = col(item.x + item.width());
    let slot_left = col(item.x + g.outer_margin.horizontal);
    let slot_right = col(item.x + g.outer_margin.horizontal + g.slot_size.width);
    let label_left = col(item.x + g.outer_margin.horizontal + g.label_margin.horizontal);
    let label_width = g.label_size.width.round().max(0.0) as usize;

    let slot_top = g.outer_margin.vertical.round() as u16;
    let slot_bottom = (g.outer_margin.vertical + g.slot_size.height).round() as u16;
    let label_row = (g.outer_margin.vertical + g.label_margin.vertical).round() as u16;

    for row in 0..area.height {
        fill(buf, area, row, frame_left, frame_right, Style::default().bg(frame_bg));
        if (slot_top..slot_bottom).contains(&row) {
            fill(buf, area, row, slot_left, slot_right, Style::default().bg(slot_bg));
        }
    }

    if label_row >= area.height {
        return;
    }

    let label = fit(&item.title, label_width);
    let mut style = Style::default().fg(fg).bg(slot_bg);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    put(buf, area, label_row, label_left, &label, style);

    if let ItemMode::RoundRect { border_width, .. } = options.item_mode {
        if border_width > 0.0 && slot_right - slot_left >= 2 && label_left > slot_left {
            let border_style = Style::default().fg(border).bg(slot_bg);
            put(buf, area, label_row, slot_left, "(", border_style);
            put(buf, area, label_row, slot_right - 1, ")", border_style);
        }
    }
}

/// Center `title` in `width` cells, truncating when it does not fit
fn fit(title: &str, width: usize) -> String {
    let mut text = String::new();
    let mut used = 0;
    for c in title.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        text.push(c);
        used += w;
    }

    let pad = (width - used) / 2;
    format!("{}{}{}", " ".repeat(pad), text, " ".repeat(width - used - pad))
}

fn fill(buf: &mut Buffer, area: Rect, row: u16, left: i64, right: i64, style: Style) {
    let left = left.max(0);
    let right = right.min(i64::from(area.width));
    if left >= right {
        return;
    }
    let rect = Rect::new(area.x + left as u16, area.y + row, (right - left) as u16, 1);
    buf.set_style(rect, style);
}

/// Write `text` starting at column `col` of `area`, dropping what falls outside
fn put(buf: &mut Buffer, area: Rect, row: u16, col: i64, text: &str, style: Style) {
    let mut x = col;
    for c in text.chars() {
        let w = c.width().unwrap_or(0) as i64;
        if w == 0 {
            continue;
        }
        if x >= 0 && x + w <= i64::from(area.width) {
            if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + row)) {
                cell.set_symbol(&c.to_string()).set_style(style);
            }
        }
        x += w;
    }
    debug_assert!(x - col == text.width() as i64);
}
