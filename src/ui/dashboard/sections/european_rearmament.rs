use super::{indexed, place, year_labels};
use crate::dashboards::european_rearmament::{
    Block, COMPETITIVE_ADVANTAGES, DEFENSE_PARTICIPATION, DEFENSE_SPENDING, EXPORT_OPPORTUNITIES,
    INTRO, INVESTMENT_FLOWS, INVESTMENT_NOTE, OPPORTUNITY_AREAS, RECOMMENDATIONS,
    SECONDARY_BENEFITS, TRADE_FLOW, TRADE_FLOW_NOTE, Tab, blocks,
};
use crate::format::{plain_number, signed_delta};
use crate::palette::{BLUE, LIGHT_BLUE, Palette, series_color};
use crate::ui::dashboard::components::charts::{
    Series, render_grouped_bar_chart, render_line_chart, render_pie, render_score_bars,
};
use crate::ui::dashboard::components::panels::{
    render_bullets, render_entries, render_note, render_table,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};

/// Height of the projection note under a chart.
const NOTE_HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, tab: Tab) {
    for (block, block_area) in place(area, blocks(tab), |_| false) {
        render_block(f, block_area, block);
    }
}

/// Splits a block area into a chart and a note below it.
fn with_note(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(NOTE_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

fn render_block(f: &mut Frame, area: Rect, block: Block) {
    match block {
        Block::EuropeanSpending => {
            let rows: Vec<Row> = DEFENSE_SPENDING
                .iter()
                .map(|row| {
                    Row::new(vec![
                        Cell::from(row.country),
                        Cell::from(format!("${}", plain_number(row.spending_2021))),
                        Cell::from(format!("${}", plain_number(row.spending_2024))),
                        Cell::from(format!("${}", plain_number(row.target))),
                        Cell::from(Span::styled(
                            format!("{}%", signed_delta(row.target_growth(), 1)),
                            Style::default().fg(Palette::Success.color()),
                        )),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "European Defense Spending Increases ($ billions)",
                &["Country", "2021", "2024", "2027 Target", "Growth"],
                rows,
                &[
                    Constraint::Fill(2),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ],
            );
        }
        Block::OpportunityAreas => {
            let (list, note) = with_note(area);
            render_bullets(
                f,
                list,
                "Key Opportunity Areas",
                OPPORTUNITY_AREAS,
                Palette::Primary.color(),
            );
            render_note(f, note, "Outlook", INTRO, Palette::Info.color());
        }
        Block::CompetitiveAdvantages => render_bullets(
            f,
            area,
            "Vietnam's Competitive Advantages",
            COMPETITIVE_ADVANTAGES,
            Palette::Success.color(),
        ),
        Block::ExportOpportunities => {
            let groups: Vec<(String, Vec<f64>)> = EXPORT_OPPORTUNITIES
                .iter()
                .map(|r| (r.category.to_string(), vec![r.current, r.potential]))
                .collect();
            render_grouped_bar_chart(
                f,
                area,
                "Vietnam's Export Opportunities to Europe ($ billions)",
                &[("Current", BLUE), ("Potential (2027)", LIGHT_BLUE)],
                &groups,
            );
        }
        Block::TradeFlow => {
            let (chart, note) = with_note(area);
            let series = [Series {
                name: "Exports to EU".to_string(),
                color: series_color(1),
                points: indexed(TRADE_FLOW.iter().map(|p| p.value)),
            }];
            render_line_chart(
                f,
                chart,
                "Vietnam-EU Trade Flow Projections ($ billions)",
                &year_labels(TRADE_FLOW.iter().map(|p| p.year)),
                &series,
            );
            render_note(
                f,
                note,
                "Projection",
                TRADE_FLOW_NOTE,
                Palette::Info.color(),
            );
        }
        Block::DefenseParticipation => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);
            let slices: Vec<(&str, f64)> = DEFENSE_PARTICIPATION
                .iter()
                .map(|share| (share.name, share.value))
                .collect();
            render_pie(
                f,
                columns[0],
                "Defense Industry Participation Opportunities",
                &slices,
                0,
            );
            let rows: Vec<Row> = DEFENSE_PARTICIPATION
                .iter()
                .map(|share| Row::new(vec![share.name, share.potential]))
                .collect();
            render_table(
                f,
                columns[1],
                "Potential",
                &["Area", "Potential"],
                rows,
                &[Constraint::Fill(2), Constraint::Fill(1)],
            );
        }
        Block::InvestmentFlows => {
            let (chart, note) = with_note(area);
            let series = [Series {
                name: "Defense-related FDI".to_string(),
                color: series_color(0),
                points: indexed(INVESTMENT_FLOWS.iter().map(|p| p.value)),
            }];
            render_line_chart(
                f,
                chart,
                "Projected European Defense-Related FDI to Vietnam ($ billions)",
                &year_labels(INVESTMENT_FLOWS.iter().map(|p| p.year)),
                &series,
            );
            render_note(
                f,
                note,
                "Projection",
                INVESTMENT_NOTE,
                Palette::Info.color(),
            );
        }
        Block::SecondaryBenefits => {
            let items: Vec<(&str, f64, Option<&str>)> = SECONDARY_BENEFITS
                .iter()
                .map(|b| (b.benefit, b.impact, Some(b.description)))
                .collect();
            render_score_bars(
                f,
                area,
                "Secondary Economic Benefits (Impact Scale 1-10)",
                &items,
                Palette::Secondary.color(),
            );
        }
        Block::Recommendations => render_entries(
            f,
            area,
            "Strategic Recommendations",
            RECOMMENDATIONS,
            Palette::Primary.color(),
        ),
    }
}
