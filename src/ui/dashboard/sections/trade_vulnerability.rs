use super::{indexed, place, year_labels};
use crate::classify::{
    PROVINCE_INDEX, SCENARIO_CELL, SCENARIO_GDP, SCENARIO_JOBS, magnitude_color, timeframe_color,
    vulnerability_color,
};
use crate::dashboards::trade_vulnerability::{
    ALTERNATIVE_MARKETS, Block, EXPORT_CATEGORIES, EXPORT_TREND, GDP_COMPOSITION,
    PROVINCE_VULNERABILITY, TARIFF_SCENARIOS, Tab, blocks, headline_cards, tariff_impact_label,
};
use crate::format::{billions, group_thousands, plain_number, to_fixed};
use crate::palette::{BLUE, Palette};
use crate::ui::dashboard::components::charts::{
    BarSpec, Series, render_bar_chart, render_line_chart, render_pie,
};
use crate::ui::dashboard::components::panels::{render_cards, render_table};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Rect};
use ratatui::prelude::Style;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};

pub fn render(f: &mut Frame, area: Rect, tab: Tab) {
    for (block, block_area) in place(area, blocks(tab), |b| b == Block::HeadlineCards) {
        render_block(f, block_area, block);
    }
}

fn colored(text: String, palette: Palette) -> Cell<'static> {
    Cell::from(Span::styled(text, Style::default().fg(palette.color())))
}

fn render_block(f: &mut Frame, area: Rect, block: Block) {
    match block {
        Block::HeadlineCards => render_cards(f, area, &headline_cards()),
        Block::ExportTrend => {
            let series = [Series {
                name: "US Exports".to_string(),
                color: BLUE,
                points: indexed(EXPORT_TREND.iter().map(|p| p.value)),
            }];
            render_line_chart(
                f,
                area,
                "Vietnam's Exports to US ($ Billions)",
                &year_labels(EXPORT_TREND.iter().map(|p| p.year)),
                &series,
            );
        }
        Block::GdpComposition => {
            let slices: Vec<(&str, f64)> =
                GDP_COMPOSITION.iter().map(|s| (s.name, s.value)).collect();
            render_pie(f, area, "Vietnam's GDP Composition", &slices, 1);
        }
        Block::ExportCategories => {
            let bars: Vec<BarSpec> = EXPORT_CATEGORIES
                .iter()
                .map(|sector| BarSpec {
                    label: sector.name.to_string(),
                    value: sector.value,
                    color: vulnerability_color(sector.level()).color(),
                    text: format!("{}%", plain_number(sector.value)),
                })
                .collect();
            render_bar_chart(
                f,
                area,
                "Export Categories to US (% of Total)",
                &bars,
                Direction::Horizontal,
            );
        }
        Block::SectorVulnerability => {
            let rows: Vec<Row> = EXPORT_CATEGORIES
                .iter()
                .map(|sector| {
                    Row::new(vec![
                        Cell::from(sector.name),
                        Cell::from(billions(sector.value)),
                        colored(
                            sector.vulnerability.to_string(),
                            vulnerability_color(sector.level()),
                        ),
                        Cell::from(tariff_impact_label(sector)),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Sector Vulnerability Analysis",
                &["Sector", "Value ($B)", "Vulnerability", "Tariff Impact"],
                rows,
                &[
                    Constraint::Fill(3),
                    Constraint::Fill(2),
                    Constraint::Fill(2),
                    Constraint::Fill(2),
                ],
            );
        }
        Block::ProvinceIndex => {
            let bars: Vec<BarSpec> = PROVINCE_VULNERABILITY
                .iter()
                .map(|province| BarSpec {
                    label: province.name.to_string(),
                    value: province.index,
                    color: magnitude_color(province.index, &PROVINCE_INDEX).color(),
                    text: format!(
                        "{} ({} jobs)",
                        plain_number(province.index),
                        group_thousands(i64::from(province.jobs))
                    ),
                })
                .collect();
            render_bar_chart(
                f,
                area,
                "Regional Vulnerability Index (1-10)",
                &bars,
                Direction::Horizontal,
            );
        }
        Block::AlternativeMarkets => {
            let rows: Vec<Row> = ALTERNATIVE_MARKETS
                .iter()
                .map(|market| {
                    Row::new(vec![
                        Cell::from(market.name),
                        Cell::from(format!("${}B", plain_number(market.current))),
                        Cell::from(format!("${}B", plain_number(market.potential))),
                        colored(
                            market.timeframe.to_string(),
                            timeframe_color(market.timeframe),
                        ),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Alternative Markets Potential",
                &["Market", "Current", "Potential", "Timeframe"],
                rows,
                &[
                    Constraint::Fill(2),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ],
            );
        }
        Block::ScenarioTable => {
            let rows: Vec<Row> = TARIFF_SCENARIOS
                .iter()
                .map(|scenario| {
                    Row::new(vec![
                        Cell::from(scenario.scenario),
                        colored(
                            format!("{}%", to_fixed(scenario.gdp_impact, 1)),
                            magnitude_color(scenario.gdp_impact, &SCENARIO_CELL),
                        ),
                        colored(
                            group_thousands(scenario.jobs_impact),
                            magnitude_color(scenario.jobs_impact as f64, &SCENARIO_CELL),
                        ),
                        colored(
                            format!("{}%", to_fixed(scenario.export_drop, 1)),
                            magnitude_color(scenario.export_drop, &SCENARIO_CELL),
                        ),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Potential Tariff Scenarios Impact",
                &["Scenario", "GDP Impact", "Jobs Impact", "Export Drop"],
                rows,
                &[
                    Constraint::Fill(3),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ],
            );
        }
        Block::ScenarioGdpImpact => {
            let bars: Vec<BarSpec> = TARIFF_SCENARIOS
                .iter()
                .map(|scenario| BarSpec {
                    label: scenario.scenario.to_string(),
                    value: scenario.gdp_impact,
                    color: magnitude_color(scenario.gdp_impact, &SCENARIO_GDP).color(),
                    text: format!("{}%", to_fixed(scenario.gdp_impact, 1)),
                })
                .collect();
            render_bar_chart(
                f,
                area,
                "GDP Impact by Tariff Scenario",
                &bars,
                Direction::Horizontal,
            );
        }
        Block::ScenarioJobsImpact => {
            let bars: Vec<BarSpec> = TARIFF_SCENARIOS
                .iter()
                .map(|scenario| {
                    let jobs = scenario.jobs_impact as f64;
                    BarSpec {
                        label: scenario.scenario.to_string(),
                        value: jobs,
                        color: magnitude_color(jobs, &SCENARIO_JOBS).color(),
                        text: group_thousands(scenario.jobs_impact),
                    }
                })
                .collect();
            render_bar_chart(
                f,
                area,
                "Jobs Impact by Tariff Scenario",
                &bars,
                Direction::Horizontal,
            );
        }
    }
}
