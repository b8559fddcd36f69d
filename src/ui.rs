//! Renders the building and the prompt/feedback text area.
//!
//! Drawing goes straight through `Buffer` cells with every write clipped to
//! the visible area, so an undersized terminal truncates the picture instead
//! of panicking.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::style::{Color, Modifier, Style};

use crate::app::App;
use crate::layout::BuildingLayout;

/// Full-screen redraw: roof, walls, windows, then the text area below.
pub fn draw(frame: &mut Frame, app: &App, layout: &BuildingLayout) {
    let area = frame.area();
    let (x, y) = (area.x, area.y);
    let buf = frame.buffer_mut();
    draw_roof(buf, layout, x, y);
    draw_walls(buf, layout, x, y);
    for index in 1..=layout.window_count() {
        draw_window(buf, app, layout, x, y, index);
    }
    draw_text_area(buf, app, layout, x, y);
}

fn draw_roof(buf: &mut Buffer, layout: &BuildingLayout, x: u16, y: u16) {
    let width = layout.building_width();
    // ridge line, then the sloped eaves spreading down to the wall corners
    for rx in x..=x + width - 2 {
        put(buf, rx, y, "─");
    }
    put(buf, x + 2, y, "/");
    put(buf, x + 1, y + 1, "/");
    put(buf, x, y + 2, "/");
    put(buf, x + width - 2, y, "\\");
    put(buf, x + width - 1, y + 1, "\\");
    put(buf, x + width, y + 2, "\\");
}

fn draw_walls(buf: &mut Buffer, layout: &BuildingLayout, x: u16, y: u16) {
    rect(
        buf,
        x,
        y + layout.roof_height(),
        x + layout.building_width(),
        y + layout.building_height(),
    );
}

fn draw_window(buf: &mut Buffer, app: &App, layout: &BuildingLayout, x: u16, y: u16, index: u16) {
    let wx = x + layout.offset_x(index);
    let wy = y + layout.offset_y(index);
    rect(
        buf,
        wx,
        wy,
        wx + layout.window_width(),
        wy + layout.window_height(),
    );

    let lit = app.windows().get(index).unwrap_or(false);
    let style = if lit {
        Style::new().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
    } else {
        Style::new().fg(Color::Yellow)
    };
    // single-digit labels get nudged toward the center of the box
    let pad = u16::from(index < 10);
    set_line(buf, wx + 1 + pad, wy + 1, &index.to_string(), style);
}

fn draw_text_area(buf: &mut Buffer, app: &App, layout: &BuildingLayout, x: u16, y: u16) {
    let base = y + layout.building_height();
    let prompt = format!(
        "[{:>3}] Enter switch number: {}",
        app.selector().value(),
        app.selector().buffer()
    );
    set_line(buf, x, base + 1, &prompt, Style::new());
    set_line(
        buf,
        x,
        base + 2,
        &format!("{:?}", app.last_changes()),
        Style::new(),
    );
    set_line(
        buf,
        x,
        base + 3,
        &format!("{:?}", app.windows().lit_indices()),
        Style::new(),
    );
    set_line(
        buf,
        x,
        base + 4,
        "Press 'C' to clear or 'Q' to quit",
        Style::new(),
    );
}

/// Box-drawing rectangle with inclusive corner coordinates.
fn rect(buf: &mut Buffer, x0: u16, y0: u16, x1: u16, y1: u16) {
    for x in x0 + 1..x1 {
        put(buf, x, y0, "─");
        put(buf, x, y1, "─");
    }
    for y in y0 + 1..y1 {
        put(buf, x0, y, "│");
        put(buf, x1, y, "│");
    }
    put(buf, x0, y0, "┌");
    put(buf, x1, y0, "┐");
    put(buf, x0, y1, "└");
    put(buf, x1, y1, "┘");
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
    }
}

fn set_line(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) {
    let area = buf.area;
    if y >= area.bottom() || x >= area.right() {
        return;
    }
    buf.set_stringn(x, y, text, usize::from(area.right() - x), style);
}
