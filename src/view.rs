//! Demo screen layout: planets list, accent combo box and status bar

use crate::app::{App, Focus};
use items_tui::error::GuiResult;
use items_tui::ui::render_items_control;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) -> GuiResult<()> {
    let area = frame.area();

    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let list_inner = draw_panel(frame, columns[0], " Planets ", app.focus == Focus::List);
    let combo_panel = draw_panel(frame, columns[1], " Accent ", app.focus == Focus::Combo);
    let combo_area = Rect {
        height: combo_panel.height.min(1),
        ..combo_panel
    };

    render_items_control(frame, list_inner, &mut app.planets, &app.context)?;
    // Drawn last so the open dropdown covers the list
    render_items_control(frame, combo_area, &mut app.accents, &app.context)?;

    draw_status_bar(frame, rows[1], app);
    Ok(())
}

/// Draw a bordered panel and return its inner area
fn draw_panel(frame: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Draw the status bar
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Tab:focus  ↑/↓/wheel:select  Enter:open  q:quit ",
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = app.status() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
