use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::grid::render_grid;
use crate::ui::layout::layout_regions;
use crate::ui::nav::NavState;
use crate::ui::pass::PassOutcome;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(header_widget(app), header);

    match app.outcome() {
        PassOutcome::Idle => {
            frame.render_widget(
                Paragraph::new("Loading…").style(Style::default().fg(MUTED_TEXT)),
                body,
            );
        }
        PassOutcome::Home { cards, .. } => draw_home(frame, body, app, cards),
        PassOutcome::Details {
            detail,
            recommendations,
            recommendations_failed,
        } => draw_details(
            frame,
            body,
            app,
            detail,
            recommendations,
            *recommendations_failed,
        ),
        PassOutcome::DetailsFailed { message } => {
            let lines = vec![
                Line::styled(
                    "Failed to load movie details",
                    Style::default().fg(STATUS_ERROR),
                ),
                Line::styled(message.clone(), Style::default().fg(MUTED_TEXT)),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
        }
    }

    frame.render_widget(footer_widget(app, footer), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(MUTED_TEXT);

    let view_label = match app.nav() {
        NavState::Home => "Home".to_string(),
        NavState::Details { movie_id } => format!("Details #{movie_id}"),
    };

    let line = Line::from(vec![
        Span::styled("  moviedeck", Style::default().fg(ACCENT)),
        Span::styled("  │  ", separator_style),
        Span::styled(view_label, text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("category: {}", app.controls().category), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(
            format!("columns: {}", app.controls().grid_columns),
            text_style,
        ),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_home(
    frame: &mut Frame<'_>,
    body: Rect,
    app: &App,
    cards: &Result<Vec<crate::catalog::Card>, crate::api::ApiError>,
) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    let search_focused = app.focus() == Focus::Search;
    let search_border = if search_focused { ACCENT } else { GLOBAL_BORDER };
    let search = Paragraph::new(app.controls().search.clone())
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(search_border))
                .title("Search movie"),
        );
    frame.render_widget(search, regions[0]);

    match cards {
        Ok(cards) => {
            let selected = (app.focus() == Focus::Grid).then(|| app.selection());
            render_grid(
                frame,
                regions[1],
                cards,
                app.controls().grid_columns,
                selected,
            );
        }
        Err(err) => {
            let error = Paragraph::new(err.to_string())
                .style(Style::default().fg(STATUS_ERROR))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, regions[1]);
        }
    }
}

fn draw_details(
    frame: &mut Frame<'_>,
    body: Rect,
    app: &App,
    detail: &crate::catalog::MovieDetail,
    recommendations: &[crate::catalog::Card],
    recommendations_failed: bool,
) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(body);

    let poster_line = match &detail.poster_url {
        Some(url) => Line::styled(url.clone(), Style::default().fg(MUTED_TEXT)),
        None => Line::styled("No poster", Style::default().fg(MUTED_TEXT)),
    };
    let metadata = vec![
        Line::styled(
            detail.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        poster_line,
        Line::from(""),
        Line::styled(detail.overview.clone(), Style::default().fg(HEADER_TEXT)),
    ];
    frame.render_widget(
        Paragraph::new(metadata).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        regions[0],
    );

    let heading = if recommendations_failed {
        Line::styled(
            "Recommendations unavailable",
            Style::default().fg(MUTED_TEXT),
        )
    } else {
        Line::styled("Recommendations", Style::default().fg(ACCENT))
    };
    frame.render_widget(Paragraph::new(heading), regions[1]);

    if !recommendations_failed {
        render_grid(
            frame,
            regions[2],
            recommendations,
            app.controls().grid_columns,
            Some(app.selection()),
        );
    }
}

fn footer_widget(app: &App, area: Rect) -> Paragraph<'static> {
    let hints = match (app.nav(), app.focus()) {
        (NavState::Home, Focus::Search) => {
            " Type to search │ Enter: search │ Tab: grid │ Esc: home │ Ctrl+Q: quit"
        }
        (NavState::Home, Focus::Grid) => {
            " Arrows: move │ Enter: open │ c/C: category │ +/-: columns │ /: search │ Ctrl+Q: quit"
        }
        (NavState::Details { .. }, _) => {
            " Arrows: move │ Enter: open │ Esc: home │ Ctrl+Q: quit"
        }
    };
    let version = format!("v{VERSION} ");

    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
