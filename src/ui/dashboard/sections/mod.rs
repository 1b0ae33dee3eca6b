//! Per-dashboard body renderers.
//!
//! Each submodule draws exactly the blocks its dashboard lists for the
//! active tab. Blocks outside that list are never built.

mod european_rearmament;
mod ifi_exposure;
mod peace_impact;
mod trade_vulnerability;
mod trade_war;

use super::utils::grid;
use crate::dashboards::DashboardView;
use crate::format::plain_number;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of full-width strips such as card rows and intro text.
const STRIP_HEIGHT: u16 = 5;

/// Draws the active tab of `view` into `area`.
pub fn render_view(f: &mut Frame, area: Rect, view: &DashboardView) {
    match view {
        DashboardView::TradeVulnerability(state) => {
            trade_vulnerability::render(f, area, state.active())
        }
        DashboardView::TradeWar(state) => trade_war::render(f, area, state.active()),
        DashboardView::IfiExposure(state) => ifi_exposure::render(f, area, state.active()),
        DashboardView::EuropeanRearmament(state) => {
            european_rearmament::render(f, area, state.active())
        }
        DashboardView::PeaceImpact(state) => peace_impact::render(f, area, state.active()),
    }
}

/// Assigns an area to every block, top to bottom.
///
/// Strip blocks get a fixed-height full-width row each. Runs of other
/// blocks share the remaining height in a two-column grid.
fn place<B: Copy>(area: Rect, blocks: &[B], is_strip: impl Fn(B) -> bool) -> Vec<(B, Rect)> {
    let mut segments: Vec<(bool, Vec<B>)> = Vec::new();
    for &block in blocks {
        let strip = is_strip(block);
        match segments.last_mut() {
            Some((false, members)) if !strip => members.push(block),
            _ => segments.push((strip, vec![block])),
        }
    }

    let constraints: Vec<Constraint> = segments
        .iter()
        .map(|(strip, _)| {
            if *strip {
                Constraint::Length(STRIP_HEIGHT)
            } else {
                Constraint::Fill(1)
            }
        })
        .collect();
    let segment_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut placed = Vec::with_capacity(blocks.len());
    for ((_, members), segment_area) in segments.iter().zip(segment_areas.iter()) {
        for (block, cell) in members.iter().zip(grid(*segment_area, members.len())) {
            placed.push((*block, cell));
        }
    }
    placed
}

/// Year labels for a chart's x axis.
fn year_labels(years: impl Iterator<Item = u16>) -> Vec<String> {
    years.map(|year| year.to_string()).collect()
}

/// `(index, value)` points for a line chart.
fn indexed(values: impl Iterator<Item = f64>) -> Vec<(f64, f64)> {
    values.enumerate().map(|(i, v)| (i as f64, v)).collect()
}

/// Bar text for a dollar figure in billions.
fn dollars(value: f64) -> String {
    format!("${}", plain_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::ifi_exposure::{self, Block, Tab};

    #[test]
    fn test_place_keeps_block_order_and_count() {
        let area = Rect::new(0, 0, 120, 40);
        let blocks = ifi_exposure::visible_blocks(Tab::Terms);
        let placed = place(area, &blocks, |b| b == Block::SummaryCards);
        let order: Vec<Block> = placed.iter().map(|(b, _)| *b).collect();
        assert_eq!(order, blocks);
    }

    #[test]
    fn test_strip_gets_fixed_height() {
        let area = Rect::new(0, 0, 120, 40);
        let blocks = ifi_exposure::visible_blocks(Tab::Historical);
        let placed = place(area, &blocks, |b| b == Block::SummaryCards);
        let (_, cards) = placed
            .iter()
            .find(|(b, _)| *b == Block::SummaryCards)
            .unwrap();
        assert_eq!(cards.height, STRIP_HEIGHT);
        assert_eq!(cards.y + cards.height, 40);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(
            year_labels([2019u16, 2020].into_iter()),
            vec!["2019", "2020"]
        );
        assert_eq!(
            indexed([3.0, 4.5].into_iter()),
            vec![(0.0, 3.0), (1.0, 4.5)]
        );
        assert_eq!(dollars(131.2), "$131.2");
    }
}
