use super::{dollars, indexed, place, year_labels};
use crate::classify::sign_color;
use crate::dashboards::trade_war::{
    Block, ECONOMIC_INDICATORS, EXPORTS, FDI, INDUSTRY_SHIFT, INTRO, KEY_VULNERABILITIES,
    RISK_FACTORS, Tab, blocks,
};
use crate::format::{plain_number, signed_delta};
use crate::palette::{BLUE, Palette, RED, series_color};
use crate::ui::dashboard::components::charts::{
    BarSpec, Series, render_bar_chart, render_line_chart, render_score_bars,
};
use crate::ui::dashboard::components::panels::{render_bullets, render_note, render_table};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};

pub fn render(f: &mut Frame, area: Rect, tab: Tab) {
    for (block, block_area) in place(area, blocks(tab), |b| b == Block::Intro) {
        render_block(f, block_area, block);
    }
}

fn render_block(f: &mut Frame, area: Rect, block: Block) {
    match block {
        Block::Intro => render_note(f, area, "Overview", INTRO, Color::White),
        Block::ExportChart => {
            let series = [
                Series {
                    name: "To US".to_string(),
                    color: BLUE,
                    points: indexed(EXPORTS.iter().map(|y| y.to_us)),
                },
                Series {
                    name: "To China".to_string(),
                    color: RED,
                    points: indexed(EXPORTS.iter().map(|y| y.to_china)),
                },
                Series {
                    name: "Total".to_string(),
                    color: series_color(1),
                    points: indexed(EXPORTS.iter().map(|y| y.total)),
                },
            ];
            render_line_chart(
                f,
                area,
                "Vietnam's Exports ($ billions)",
                &year_labels(EXPORTS.iter().map(|y| y.year)),
                &series,
            );
        }
        Block::EconomicIndicators => {
            let rows: Vec<Row> = ECONOMIC_INDICATORS
                .iter()
                .map(|indicator| {
                    Row::new(vec![
                        Cell::from(indicator.name),
                        Cell::from(plain_number(indicator.value)),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Key Economic Indicators",
                &["Indicator", "Value"],
                rows,
                &[Constraint::Fill(3), Constraint::Fill(1)],
            );
        }
        Block::FdiChart => {
            let bars: Vec<BarSpec> = FDI
                .iter()
                .map(|year| BarSpec {
                    label: year.year.to_string(),
                    value: year.value,
                    color: sign_color(year.growth, false).color(),
                    text: format!("{} ({})", dollars(year.value), growth_note(year.growth)),
                })
                .collect();
            render_bar_chart(
                f,
                area,
                "Foreign Direct Investment ($ billions)",
                &bars,
                Direction::Horizontal,
            );
        }
        Block::IndustryShift => {
            let rows: Vec<Row> = INDUSTRY_SHIFT
                .iter()
                .map(|industry| {
                    Row::new(vec![
                        Cell::from(industry.name),
                        Cell::from(format!("{}%", plain_number(industry.share))),
                        Cell::from(Span::styled(
                            industry.change,
                            Style::default().fg(Palette::Success.color()),
                        )),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Manufacturing Relocation to Vietnam",
                &["Industry", "Share", "YoY Change"],
                rows,
                &[
                    Constraint::Fill(3),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ],
            );
        }
        Block::RiskFactors => {
            let items: Vec<(&str, f64, Option<&str>)> = RISK_FACTORS
                .iter()
                .map(|risk| (risk.factor, risk.risk, None))
                .collect();
            render_score_bars(
                f,
                area,
                "Trade War Risk Factors (1-10 scale)",
                &items,
                Palette::Danger.color(),
            );
        }
        Block::KeyVulnerabilities => {
            render_bullets(
                f,
                area,
                "Key Vulnerabilities",
                KEY_VULNERABILITIES,
                Palette::Danger.color(),
            );
        }
    }
}

/// Growth note shown beside an FDI year, e.g. `+12.5%`.
fn growth_note(growth: f64) -> String {
    format!("{}%", signed_delta(growth, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_note_is_signed() {
        assert_eq!(growth_note(12.5), "+12.5%");
        assert_eq!(growth_note(-3.0), "-3.0%");
        assert_eq!(growth_note(0.0), "+0.0%");
    }
}
