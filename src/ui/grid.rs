use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::Card;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Rendered height of one card cell, borders included.
const CELL_HEIGHT: u16 = 4;

/// Draws a card grid: rows of `columns` cells, the selected cell
/// highlighted, scrolled so the selection stays visible. An empty card
/// list degrades to an informational empty state.
pub fn render_grid(
    frame: &mut Frame<'_>,
    area: Rect,
    cards: &[Card],
    columns: u16,
    selected: Option<usize>,
) {
    if cards.is_empty() {
        let empty = Paragraph::new("No movies to show.").style(Style::default().fg(MUTED_TEXT));
        frame.render_widget(empty, area);
        return;
    }

    let columns = columns.max(1) as usize;
    let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows: Vec<&[Card]> = cards.chunks(columns).collect();
    for (slot, row_idx) in (first_row..rows.len()).take(visible_rows).enumerate() {
        let y_offset = (slot as u16) * CELL_HEIGHT;
        let height = CELL_HEIGHT.min(area.height.saturating_sub(y_offset));
        if height == 0 {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height,
        };
        render_row(frame, row_area, rows[row_idx], columns, {
            selected.filter(|s| s / columns == row_idx).map(|s| s % columns)
        });
    }
}

fn render_row(
    frame: &mut Frame<'_>,
    area: Rect,
    row: &[Card],
    columns: usize,
    selected_col: Option<usize>,
) {
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (col, card) in row.iter().enumerate() {
        let is_selected = selected_col == Some(col);
        render_cell(frame, cells[col], card, is_selected);
    }
}

fn render_cell(frame: &mut Frame<'_>, area: Rect, card: &Card, selected: bool) {
    let border_color = if selected { HEADER_TEXT } else { GLOBAL_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let poster_line = match &card.poster_url {
        Some(url) => truncate_label(url, inner_width),
        None => "No poster".to_string(),
    };

    let mut text = vec![
        Line::styled(poster_line, Style::default().fg(MUTED_TEXT)),
        Line::styled(
            truncate_label(&card.title, inner_width),
            Style::default().fg(HEADER_TEXT),
        ),
    ];
    if selected {
        text.push(Line::styled(
            "Enter: open",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    let mut cell = Paragraph::new(text).block(block);
    if selected {
        cell = cell.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    frame.render_widget(cell, area);
}

/// Char-safe truncation with an ellipsis; widths are terminal cells, so
/// byte slicing would split multi-byte titles.
pub(crate) fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
