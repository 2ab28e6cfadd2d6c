use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::App;
use crate::output::NO_ANIMALS;
use crate::types::AnimalKind;

/// Draw the UI layout
pub fn draw_ui(f: &mut Frame, app: &mut App) {
    // Two columns: animal list on the left, details on the right
    let size = f.size();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(size);

    draw_list(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn kind_color(kind: AnimalKind) -> Color {
    match kind {
        AnimalKind::Dog => Color::Yellow,
        AnimalKind::Cat => Color::Magenta,
        AnimalKind::Bird => Color::Cyan,
    }
}

/// Draw the numbered animal list
fn draw_list(f: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.search_mode {
        format!("Search: {}", app.search_query)
    } else {
        "Animals (↑↓: navigate, /: search, q: quit)".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let inner_area = block.inner(area);
    app.set_ui_height(inner_area.height as usize);

    if app.registry.is_empty() {
        let placeholder = Paragraph::new(NO_ANIMALS)
            .style(Style::default().fg(Color::Cyan))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .registry
        .all()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(inner_area.height as usize)
        .map(|(i, animal)| {
            let mut spans = vec![
                Span::raw(format!("{:>2}  ", i + 1)),
                Span::styled(
                    format!("{:<5} ", animal.kind().as_str()),
                    Style::default().fg(kind_color(animal.kind())),
                ),
                Span::raw(animal.name().to_string()),
            ];
            if app.search_results.contains(&i) {
                spans.push(Span::styled(" ●", Style::default().fg(Color::Green)));
            }

            let style = if i == app.cursor_position {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Draw the details of the selected animal
fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Details").borders(Borders::ALL);

    let lines: Vec<Line> = app
        .details()
        .into_iter()
        .map(|(key, value)| {
            if key.is_empty() {
                Line::from(Span::styled(value, Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(vec![
                    Span::styled(format!("{:<7}", key), Style::default().fg(Color::Blue)),
                    Span::raw(value),
                ])
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
