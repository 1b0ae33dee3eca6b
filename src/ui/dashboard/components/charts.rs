//! Chart components
//!
//! Thin wrappers over ratatui's bar and line charts plus text-drawn pie and
//! score bars, all keyed by a caller-supplied color per series or bar.

use super::super::utils::panel;
use crate::format::{percent_of_total, pie_label, plain_number, score_ratio, to_fixed};
use crate::palette::series_color;
use ratatui::Frame;
use ratatui::layout::{Direction, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph, Wrap};

/// Bar heights are scaled so one decimal place survives the integer bars.
const BAR_SCALE: f64 = 10.0;

/// One bar: its label, signed value, color and the text drawn on it.
pub struct BarSpec {
    pub label: String,
    pub value: f64,
    pub color: Color,
    pub text: String,
}

/// A named line of `(x, y)` points.
pub struct Series {
    pub name: String,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

fn bar_height(value: f64) -> u64 {
    (value.abs() * BAR_SCALE).round() as u64
}

/// Single-series bar chart. Negative values are drawn by magnitude.
pub fn render_bar_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    bars: &[BarSpec],
    direction: Direction,
) {
    let bar_widgets: Vec<Bar> = bars
        .iter()
        .map(|spec| {
            Bar::default()
                .value(bar_height(spec.value))
                .label(Line::from(spec.label.clone()))
                .text_value(spec.text.clone())
                .style(Style::default().fg(spec.color))
                .value_style(Style::default().fg(Color::Black).bg(spec.color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(4);
    let chart = BarChart::default()
        .block(panel(title))
        .data(BarGroup::default().bars(&bar_widgets))
        .direction(direction)
        .bar_gap(1);
    let chart = match direction {
        Direction::Vertical => {
            let count = bars.len().max(1) as u16;
            let width = (inner_width / count).saturating_sub(1).clamp(3, 16);
            chart.bar_width(width)
        }
        Direction::Horizontal => chart.bar_width(1),
    };
    f.render_widget(chart, area);
}

/// Bar chart with one group per category and one bar per series.
pub fn render_grouped_bar_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    series: &[(&str, Color)],
    groups: &[(String, Vec<f64>)],
) {
    let legend = legend_title(series.iter().map(|(name, color)| (*name, *color)));
    let group_count = groups.len().max(1) as u16;
    let per_group = area.width.saturating_sub(4) / group_count;
    let bar_width = (per_group / (series.len().max(1) as u16 + 1)).clamp(1, 8);

    let mut chart = BarChart::default()
        .block(panel(title).title(legend))
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1);
    for (label, values) in groups {
        let bars: Vec<Bar> = values
            .iter()
            .zip(series)
            .map(|(value, (_, color))| {
                Bar::default()
                    .value(bar_height(*value))
                    .text_value(plain_number(*value))
                    .style(Style::default().fg(*color))
                    .value_style(Style::default().fg(Color::Black).bg(*color))
            })
            .collect();
        let group = BarGroup::default()
            .label(Line::from(label.clone()))
            .bars(&bars);
        chart = chart.data(group);
    }
    f.render_widget(chart, area);
}

/// Legend line listing each series name in its color.
fn legend_title<'a>(series: impl Iterator<Item = (&'a str, Color)>) -> Line<'a> {
    let mut spans = Vec::new();
    for (name, color) in series {
        spans.push(Span::styled(" ■ ", Style::default().fg(color)));
        spans.push(Span::styled(name, Style::default().fg(Color::Gray)));
    }
    Line::from(spans).right_aligned()
}

/// Line chart over labelled x positions. Each series shares the x labels.
pub fn render_line_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    x_labels: &[String],
    series: &[Series],
) {
    let (y_min, y_max) = y_bounds(series);
    let x_max = (x_labels.len().saturating_sub(1)).max(1) as f64;

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|line| {
            Dataset::default()
                .name(line.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line.color))
                .data(&line.points)
        })
        .collect();

    let x_axis_labels: Vec<Line> = match x_labels {
        [] => Vec::new(),
        [only] => vec![Line::from(only.clone())],
        [first, .., last] => vec![Line::from(first.clone()), Line::from(last.clone())],
    };
    let mid = (y_min + y_max) / 2.0;
    let y_axis_labels = vec![
        Line::from(to_fixed(y_min, 0)),
        Line::from(to_fixed(mid, 0)),
        Line::from(to_fixed(y_max, 0)),
    ];

    let chart = Chart::new(datasets)
        .block(panel(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_axis_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(y_axis_labels),
        );
    f.render_widget(chart, area);
}

/// Y range covering every point with a little headroom, never inverted.
pub fn y_bounds(series: &[Series]) -> (f64, f64) {
    let values = series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y));
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let lower = if min >= 0.0 { 0.0 } else { min * 1.1 };
    let upper = if max > lower { max * 1.1 } else { lower + 1.0 };
    (lower, upper)
}

/// Pie rendered as one proportional bar per slice, labelled
/// `"{name}: {pct}%"` with `places` decimals.
pub fn render_pie(
    f: &mut Frame,
    area: Rect,
    title: &str,
    slices: &[(&str, f64)],
    places: usize,
) {
    let values: Vec<f64> = slices.iter().map(|(_, value)| *value).collect();
    let shares = percent_of_total(&values);
    let bar_room = area.width.saturating_sub(6) as f64;

    let lines: Vec<Line> = slices
        .iter()
        .zip(shares)
        .enumerate()
        .flat_map(|(index, ((name, _), share))| {
            let color = series_color(index);
            let filled = ((share / 100.0) * bar_room).round() as usize;
            [
                Line::from(Span::styled(
                    pie_label(name, share, places),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled("█".repeat(filled), Style::default().fg(color))),
            ]
        })
        .collect();

    let pie = Paragraph::new(lines).block(panel(title));
    f.render_widget(pie, area);
}

/// Labelled 1-10 score bars, one per item.
pub fn render_score_bars(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: &[(&str, f64, Option<&str>)],
    color: Color,
) {
    let bar_room = area.width.saturating_sub(6) as f64;
    let mut lines = Vec::new();
    for (name, score, detail) in items {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", name), Style::default().fg(Color::White)),
            Span::styled(
                format!("{}/10", to_fixed(*score, 1)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
        let filled = (score_ratio(*score) * bar_room).round() as usize;
        let empty = (bar_room as usize).saturating_sub(filled);
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        ]));
        if let Some(detail) = detail {
            lines.push(Line::from(Span::styled(
                *detail,
                Style::default().fg(Color::Gray),
            )));
        }
    }
    let widget = Paragraph::new(lines)
        .block(panel(title))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[f64]) -> Series {
        Series {
            name: "s".to_string(),
            color: Color::White,
            points: points
                .iter()
                .enumerate()
                .map(|(i, y)| (i as f64, *y))
                .collect(),
        }
    }

    #[test]
    fn test_bar_height_uses_magnitude() {
        assert_eq!(bar_height(-3.5), 35);
        assert_eq!(bar_height(131.2), 1312);
        assert_eq!(bar_height(0.0), 0);
    }

    #[test]
    fn test_y_bounds_starts_at_zero_for_positive_data() {
        let (lo, hi) = y_bounds(&[series(&[61.3, 131.2])]);
        assert_eq!(lo, 0.0);
        assert!(hi > 131.2);
    }

    #[test]
    fn test_y_bounds_handles_negative_and_empty() {
        let (lo, hi) = y_bounds(&[series(&[-22.5, 24.7])]);
        assert!(lo < -22.5);
        assert!(hi > 24.7);
        assert_eq!(y_bounds(&[]), (0.0, 1.0));
        assert_eq!(y_bounds(&[series(&[0.0, 0.0])]), (0.0, 1.0));
    }
}
