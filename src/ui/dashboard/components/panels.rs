//! Text panels: summary cards, tables, bullet lists and notes

use super::super::utils::panel;
use crate::dashboards::SummaryCard;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table, Wrap};

/// Side-by-side headline cards.
pub fn render_cards(f: &mut Frame, area: Rect, cards: &[SummaryCard]) {
    if cards.is_empty() {
        return;
    }
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (card, card_area) in cards.iter().zip(card_areas.iter()) {
        let tone = card.tone.color();
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().fg(tone).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.note.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel(card.title).border_style(Style::default().fg(tone)));
        f.render_widget(widget, *card_area);
    }
}

/// Table with a bold header row. Widths are given per column.
pub fn render_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    header: &[&str],
    rows: Vec<Row>,
    widths: &[Constraint],
) {
    let header_row = Row::new(header.iter().map(|h| h.to_string())).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(rows, widths.to_vec())
        .header(header_row)
        .column_spacing(1)
        .block(panel(title));
    f.render_widget(table, area);
}

/// Bulleted list, one styled marker per item.
pub fn render_bullets(f: &mut Frame, area: Rect, title: &str, items: &[&str], marker_color: Color) {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(marker_color)),
                Span::styled(*item, Style::default().fg(Color::White)),
            ])
        })
        .collect();
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(title));
    f.render_widget(widget, area);
}

/// Heading-plus-description entries such as recommendations.
pub fn render_entries(
    f: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[(&str, &str)],
    color: Color,
) {
    let mut lines = Vec::with_capacity(entries.len() * 2);
    for (heading, body) in entries {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            *body,
            Style::default().fg(Color::Gray),
        )));
    }
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(title));
    f.render_widget(widget, area);
}

/// Free-text paragraph in a panel.
pub fn render_note(f: &mut Frame, area: Rect, title: &str, text: &str, color: Color) {
    let widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(panel(title));
    f.render_widget(widget, area);
}
