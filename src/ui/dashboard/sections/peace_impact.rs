use super::place;
use crate::classify::sign_color;
use crate::dashboards::peace_impact::{
    Block, COMMODITIES, ECONOMIC_INDICATORS, INTRO, IndicatorChange, KEY_FINDINGS, OPPORTUNITIES,
    RISKS, SECTOR_IMPACT, ScoredItem, TRADE, Tab, blocks,
};
use crate::format::{plain_number, signed_delta, to_fixed};
use crate::palette::{BLUE, LIGHT_BLUE, LIGHT_RED, Palette, RED};
use crate::ui::dashboard::components::charts::{
    render_grouped_bar_chart, render_pie, render_score_bars,
};
use crate::ui::dashboard::components::panels::{render_bullets, render_note, render_table};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};

pub fn render(f: &mut Frame, area: Rect, tab: Tab) {
    for (block, block_area) in place(area, blocks(tab), |_| false) {
        render_block(f, block_area, block);
    }
}

/// Change column text, e.g. `-0.7 %`.
fn change_label(row: &IndicatorChange) -> String {
    format!("{} {}", signed_delta(row.delta(), 1), row.unit)
}

fn score_items(items: &[ScoredItem]) -> Vec<(&str, f64, Option<&str>)> {
    items.iter().map(|i| (i.name, i.score, None)).collect()
}

fn render_block(f: &mut Frame, area: Rect, block: Block) {
    match block {
        Block::EconomicIndicators => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Fill(1)])
                .split(area);
            render_note(f, chunks[0], "Overview", INTRO, Color::White);
            let rows: Vec<Row> = ECONOMIC_INDICATORS
                .iter()
                .map(|row| {
                    Row::new(vec![
                        Cell::from(row.indicator),
                        Cell::from(plain_number(row.before)),
                        Cell::from(plain_number(row.after)),
                        Cell::from(Span::styled(
                            change_label(row),
                            Style::default().fg(row.color().color()),
                        )),
                    ])
                })
                .collect();
            render_table(
                f,
                chunks[1],
                "Economic Indicators: Before vs. After Peace Deal",
                &["Indicator", "Before", "After", "Change"],
                rows,
                &[
                    Constraint::Fill(2),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ],
            );
        }
        Block::Opportunities => render_score_bars(
            f,
            area,
            "Opportunities (1-10)",
            &score_items(OPPORTUNITIES),
            Palette::Success.color(),
        ),
        Block::Risks => render_score_bars(
            f,
            area,
            "Risks (1-10)",
            &score_items(RISKS),
            Palette::Danger.color(),
        ),
        Block::TradeChart => {
            let groups: Vec<(String, Vec<f64>)> = TRADE
                .iter()
                .map(|period| {
                    (
                        period.label.to_string(),
                        vec![
                            period.russia_imports,
                            period.russia_exports,
                            period.ukraine_imports,
                            period.ukraine_exports,
                        ],
                    )
                })
                .collect();
            render_grouped_bar_chart(
                f,
                area,
                "Vietnam's Trade with Russia and Ukraine ($ billions)",
                &[
                    ("Russia imports", RED),
                    ("Russia exports", LIGHT_RED),
                    ("Ukraine imports", BLUE),
                    ("Ukraine exports", LIGHT_BLUE),
                ],
                &groups,
            );
        }
        Block::CommodityImpact => {
            let rows: Vec<Row> = COMMODITIES
                .iter()
                .map(|commodity| {
                    Row::new(vec![
                        Cell::from(commodity.name),
                        Cell::from(Span::styled(
                            format!("{}%", to_fixed(commodity.price_change, 1)),
                            // Falling import prices help Vietnam
                            Style::default().fg(sign_color(commodity.price_change, true).color()),
                        )),
                        Cell::from(format!("${}B", plain_number(commodity.import_volume))),
                        Cell::from(commodity.impact),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Impact on Key Imported Commodities (Post-Peace Estimates)",
                &["Commodity", "Price Change", "Import Volume", "Impact"],
                rows,
                &[
                    Constraint::Fill(2),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(2),
                ],
            );
        }
        Block::SectorImpact => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(area);
            let slices: Vec<(&str, f64)> = SECTOR_IMPACT
                .iter()
                .map(|sector| (sector.name, sector.value))
                .collect();
            render_pie(f, chunks[0], "Sectoral Impact Analysis", &slices, 0);
            let rows: Vec<Row> = SECTOR_IMPACT
                .iter()
                .map(|s| Row::new(vec![s.name, s.impact, s.description]))
                .collect();
            render_table(
                f,
                chunks[1],
                "Sector Details",
                &["Sector", "Impact", "Description"],
                rows,
                &[
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(3),
                ],
            );
        }
        Block::KeyFindings => render_bullets(
            f,
            area,
            "Key Findings",
            KEY_FINDINGS,
            Palette::Primary.color(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_label_carries_unit_and_sign() {
        let inflation = ECONOMIC_INDICATORS
            .iter()
            .find(|row| row.indicator == "Inflation")
            .unwrap();
        assert_eq!(change_label(inflation), "-0.7 %");
        let pmi = ECONOMIC_INDICATORS
            .iter()
            .find(|row| row.indicator == "Manufacturing PMI")
            .unwrap();
        assert_eq!(change_label(pmi), "+1.7 Index");
    }
}
