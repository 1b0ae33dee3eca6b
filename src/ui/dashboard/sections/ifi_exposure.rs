use super::{indexed, place, year_labels};
use crate::dashboards::ifi_exposure::{
    Block, ECONOMIC_INDICATORS, FUNDING_BY_INSTITUTION, HISTORICAL_FUNDING, INSTITUTIONS,
    LOAN_TERMS, SECTOR_DISTRIBUTION, Tab, stacked_funding, summary_cards, visible_blocks,
};
use crate::format::{group_thousands, plain_number};
use crate::palette::{Palette, series_color};
use crate::ui::dashboard::components::charts::{
    BarSpec, Series, render_bar_chart, render_line_chart, render_pie,
};
use crate::ui::dashboard::components::panels::{render_cards, render_table};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Cell, Row};

pub fn render(f: &mut Frame, area: Rect, tab: Tab) {
    let blocks = visible_blocks(tab);
    for (block, block_area) in place(area, &blocks, |b| b == Block::SummaryCards) {
        render_block(f, block_area, block);
    }
}

/// One line per institution, each stacked on the ones before it.
fn stacked_series() -> Vec<Series> {
    let stacked: Vec<[f64; 5]> = HISTORICAL_FUNDING.iter().map(stacked_funding).collect();
    INSTITUTIONS
        .iter()
        .enumerate()
        .map(|(i, name)| Series {
            name: name.to_string(),
            color: series_color(i),
            points: indexed(stacked.iter().map(|year| year[i])),
        })
        .collect()
}

fn render_block(f: &mut Frame, area: Rect, block: Block) {
    match block {
        Block::FundingByInstitution => {
            let bars: Vec<BarSpec> = FUNDING_BY_INSTITUTION
                .iter()
                .enumerate()
                .map(|(i, funding)| BarSpec {
                    label: funding.name.to_string(),
                    value: funding.amount,
                    color: series_color(i),
                    text: format!(
                        "${}M, {} projects",
                        group_thousands(funding.amount as i64),
                        funding.projects
                    ),
                })
                .collect();
            render_bar_chart(
                f,
                area,
                "Current Funding by Institution (Million USD)",
                &bars,
                Direction::Horizontal,
            );
        }
        Block::SectorDistribution => {
            let slices: Vec<(&str, f64)> = SECTOR_DISTRIBUTION
                .iter()
                .map(|s| (s.name, s.value))
                .collect();
            render_pie(f, area, "Sector Distribution of IFI Funding", &slices, 0);
        }
        Block::HistoricalFunding => render_line_chart(
            f,
            area,
            "Historical Funding Trends (2015-2023, Million USD)",
            &year_labels(HISTORICAL_FUNDING.iter().map(|y| y.year)),
            &stacked_series(),
        ),
        Block::EconomicIndicators => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            let years = year_labels(ECONOMIC_INDICATORS.iter().map(|y| y.year));
            let gdp = [Series {
                name: "GDP ($B)".to_string(),
                color: Palette::Primary.color(),
                points: indexed(ECONOMIC_INDICATORS.iter().map(|y| y.gdp)),
            }];
            render_line_chart(
                f,
                columns[0],
                "Economic Indicators & IFI Dependency",
                &years,
                &gdp,
            );
            let ratios = [
                Series {
                    name: "Public Debt (% GDP)".to_string(),
                    color: Palette::Danger.color(),
                    points: indexed(ECONOMIC_INDICATORS.iter().map(|y| y.debt)),
                },
                Series {
                    name: "IFI Dependency (%)".to_string(),
                    color: Palette::Warning.color(),
                    points: indexed(ECONOMIC_INDICATORS.iter().map(|y| y.ifi_dependency)),
                },
            ];
            render_line_chart(f, columns[1], "Debt and Dependency (%)", &years, &ratios);
        }
        Block::LoanTerms => {
            let rows: Vec<Row> = LOAN_TERMS
                .iter()
                .map(|terms| {
                    let grace = plain_number(terms.average_grace_period);
                    Row::new(vec![
                        Cell::from(terms.institution),
                        Cell::from(format!("{}%", plain_number(terms.average_interest))),
                        Cell::from(format!("{} years", plain_number(terms.average_term))),
                        Cell::from(format!("{} years", grace)),
                    ])
                })
                .collect();
            render_table(
                f,
                area,
                "Loan Terms by Institution",
                &["Institution", "Avg. Interest", "Avg. Term", "Grace Period"],
                rows,
                &[
                    Constraint::Fill(2),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                    Constraint::Fill(1),
                ],
            );
        }
        Block::SummaryCards => render_cards(f, area, &summary_cards()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_series_top_line_is_total() {
        let series = stacked_series();
        assert_eq!(series.len(), INSTITUTIONS.len());
        let top = series.last().unwrap();
        let (_, latest_total) = *top.points.last().unwrap();
        let current_total: f64 = FUNDING_BY_INSTITUTION.iter().map(|f| f.amount).sum();
        assert_eq!(latest_total, current_total);
    }
}
