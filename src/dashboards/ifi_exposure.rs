//! Vietnam's exposure to international financial institutions (IFIs).
//!
//! Unlike the other dashboards, part of this one sits outside the tab area:
//! the funding and sector blocks above the tabs and the summary cards below
//! them are always shown.

use super::{Slice, SummaryCard, TabSet};
use crate::format::{plain_number, to_fixed};
use crate::palette::Palette;

pub const TITLE: &str = "Vietnam's Economic Exposure to International Financial Institutions";
pub const SUBTITLE: &str =
    "Analysis of Vietnam's dependency on funding from major global financial institutions";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Historical,
    Economic,
    Terms,
}

impl TabSet for Tab {
    const ALL: &'static [Self] = &[Tab::Historical, Tab::Economic, Tab::Terms];

    fn title(self) -> &'static str {
        match self {
            Tab::Historical => "Historical Funding",
            Tab::Economic => "Economic Indicators",
            Tab::Terms => "Loan Terms",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Block {
    FundingByInstitution,
    SectorDistribution,
    HistoricalFunding,
    EconomicIndicators,
    LoanTerms,
    SummaryCards,
}

/// Blocks above the tab area, shown on every tab.
pub const LEADING_BLOCKS: &[Block] = &[Block::FundingByInstitution, Block::SectorDistribution];

/// Blocks below the tab area, shown on every tab.
pub const TRAILING_BLOCKS: &[Block] = &[Block::SummaryCards];

pub fn blocks(tab: Tab) -> &'static [Block] {
    match tab {
        Tab::Historical => &[Block::HistoricalFunding],
        Tab::Economic => &[Block::EconomicIndicators],
        Tab::Terms => &[Block::LoanTerms],
    }
}

/// Everything drawn for `tab`: leading blocks, the tab's own, then trailing.
pub fn visible_blocks(tab: Tab) -> Vec<Block> {
    LEADING_BLOCKS
        .iter()
        .chain(blocks(tab))
        .chain(TRAILING_BLOCKS)
        .copied()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstitutionFunding {
    pub name: &'static str,
    /// Active funding, $M.
    pub amount: f64,
    pub projects: u32,
}

/// Funding per institution for one year, $M, ordered as [`INSTITUTIONS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalFunding {
    pub year: u16,
    pub amounts: [f64; 5],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicYear {
    pub year: u16,
    /// $B.
    pub gdp: f64,
    /// Public debt, percent of GDP.
    pub debt: f64,
    /// IFI funding, percent of budget.
    pub ifi_dependency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub institution: &'static str,
    pub average_interest: f64,
    pub average_term: f64,
    pub average_grace_period: f64,
}

/// Series names for [`HistoricalFunding::amounts`].
pub const INSTITUTIONS: [&str; 5] = ["World Bank", "ADB", "IMF", "AIIB", "NDB"];

pub const FUNDING_BY_INSTITUTION: &[InstitutionFunding] = &[
    InstitutionFunding {
        name: "World Bank",
        amount: 2430.0,
        projects: 42,
    },
    InstitutionFunding {
        name: "ADB",
        amount: 1860.0,
        projects: 35,
    },
    InstitutionFunding {
        name: "IMF",
        amount: 720.0,
        projects: 4,
    },
    InstitutionFunding {
        name: "AIIB",
        amount: 510.0,
        projects: 8,
    },
    InstitutionFunding {
        name: "NDB",
        amount: 280.0,
        projects: 3,
    },
];

pub const HISTORICAL_FUNDING: &[HistoricalFunding] = &[
    HistoricalFunding {
        year: 2015,
        amounts: [1250.0, 980.0, 480.0, 0.0, 0.0],
    },
    HistoricalFunding {
        year: 2016,
        amounts: [1420.0, 1050.0, 510.0, 120.0, 0.0],
    },
    HistoricalFunding {
        year: 2017,
        amounts: [1680.0, 1180.0, 550.0, 210.0, 0.0],
    },
    HistoricalFunding {
        year: 2018,
        amounts: [1820.0, 1340.0, 620.0, 280.0, 60.0],
    },
    HistoricalFunding {
        year: 2019,
        amounts: [2010.0, 1520.0, 680.0, 350.0, 120.0],
    },
    HistoricalFunding {
        year: 2020,
        amounts: [2250.0, 1670.0, 750.0, 420.0, 180.0],
    },
    HistoricalFunding {
        year: 2021,
        amounts: [2320.0, 1740.0, 740.0, 460.0, 220.0],
    },
    HistoricalFunding {
        year: 2022,
        amounts: [2380.0, 1790.0, 730.0, 480.0, 240.0],
    },
    HistoricalFunding {
        year: 2023,
        amounts: [2430.0, 1860.0, 720.0, 510.0, 280.0],
    },
];

pub const SECTOR_DISTRIBUTION: &[Slice] = &[
    Slice {
        name: "Infrastructure",
        value: 38.0,
    },
    Slice {
        name: "Energy",
        value: 22.0,
    },
    Slice {
        name: "Health",
        value: 14.0,
    },
    Slice {
        name: "Education",
        value: 10.0,
    },
    Slice {
        name: "Agriculture",
        value: 8.0,
    },
    Slice {
        name: "Financial Sector",
        value: 5.0,
    },
    Slice {
        name: "Other",
        value: 3.0,
    },
];

pub const ECONOMIC_INDICATORS: &[EconomicYear] = &[
    EconomicYear {
        year: 2015,
        gdp: 193.24,
        debt: 57.4,
        ifi_dependency: 4.2,
    },
    EconomicYear {
        year: 2016,
        gdp: 205.28,
        debt: 59.8,
        ifi_dependency: 4.5,
    },
    EconomicYear {
        year: 2017,
        gdp: 223.78,
        debt: 61.3,
        ifi_dependency: 4.8,
    },
    EconomicYear {
        year: 2018,
        gdp: 245.21,
        debt: 55.6,
        ifi_dependency: 5.1,
    },
    EconomicYear {
        year: 2019,
        gdp: 261.92,
        debt: 54.3,
        ifi_dependency: 5.3,
    },
    EconomicYear {
        year: 2020,
        gdp: 271.16,
        debt: 56.8,
        ifi_dependency: 5.9,
    },
    EconomicYear {
        year: 2021,
        gdp: 282.54,
        debt: 58.4,
        ifi_dependency: 5.7,
    },
    EconomicYear {
        year: 2022,
        gdp: 308.67,
        debt: 57.2,
        ifi_dependency: 5.5,
    },
    EconomicYear {
        year: 2023,
        gdp: 327.45,
        debt: 56.6,
        ifi_dependency: 5.8,
    },
];

pub const LOAN_TERMS: &[LoanTerms] = &[
    LoanTerms {
        institution: "World Bank",
        average_interest: 1.8,
        average_term: 25.0,
        average_grace_period: 5.0,
    },
    LoanTerms {
        institution: "ADB",
        average_interest: 2.1,
        average_term: 22.0,
        average_grace_period: 4.0,
    },
    LoanTerms {
        institution: "IMF",
        average_interest: 1.6,
        average_term: 10.0,
        average_grace_period: 3.0,
    },
    LoanTerms {
        institution: "AIIB",
        average_interest: 2.3,
        average_term: 20.0,
        average_grace_period: 4.0,
    },
    LoanTerms {
        institution: "NDB",
        average_interest: 2.5,
        average_term: 18.0,
        average_grace_period: 3.0,
    },
];

/// Share of the annual public investment budget funded by IFIs.
const PUBLIC_INVESTMENT_SHARE: f64 = 18.4;

/// Running totals of each year's funding, bottom series first, for a
/// stacked area chart.
pub fn stacked_funding(entry: &HistoricalFunding) -> [f64; 5] {
    let mut stacked = [0.0; 5];
    let mut running = 0.0;
    for (slot, amount) in stacked.iter_mut().zip(entry.amounts) {
        running += amount;
        *slot = running;
    }
    stacked
}

pub fn summary_cards() -> Vec<SummaryCard> {
    let total_millions: f64 = FUNDING_BY_INSTITUTION.iter().map(|f| f.amount).sum();
    let projects: u32 = FUNDING_BY_INSTITUTION.iter().map(|f| f.projects).sum();
    vec![
        SummaryCard {
            title: "Total IFI Funding",
            value: format!("${}B", to_fixed(total_millions / 1000.0, 2)),
            note: "Active portfolio across all institutions".to_string(),
            tone: Palette::Primary,
        },
        SummaryCard {
            title: "% of Public Investment",
            value: format!("{}%", plain_number(PUBLIC_INVESTMENT_SHARE)),
            note: "Of annual public investment budget".to_string(),
            tone: Palette::Primary,
        },
        SummaryCard {
            title: "Active Projects",
            value: projects.to_string(),
            note: "Across all international financial institutions".to_string(),
            tone: Palette::Primary,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_cards_derive_from_funding() {
        let cards = summary_cards();
        assert_eq!(cards[0].value, "$5.80B");
        assert_eq!(cards[1].value, "18.4%");
        assert_eq!(cards[2].value, "92");
    }

    #[test]
    fn test_stacked_funding_is_cumulative() {
        let last = HISTORICAL_FUNDING.last().unwrap();
        let stacked = stacked_funding(last);
        assert_eq!(stacked[0], 2430.0);
        assert_eq!(stacked[4], 5800.0);
        assert!(stacked.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_latest_history_matches_current_funding() {
        let last = HISTORICAL_FUNDING.last().unwrap();
        for (current, amount) in FUNDING_BY_INSTITUTION.iter().zip(last.amounts) {
            assert_eq!(current.amount, amount, "{}", current.name);
        }
    }

    #[test]
    fn test_each_tab_shows_one_block() {
        for tab in Tab::ALL {
            assert_eq!(blocks(*tab).len(), 1);
            assert!(!LEADING_BLOCKS.contains(&blocks(*tab)[0]));
        }
    }

    #[test]
    fn test_visible_blocks_wrap_tab_content() {
        assert_eq!(
            visible_blocks(Tab::Economic),
            vec![
                Block::FundingByInstitution,
                Block::SectorDistribution,
                Block::EconomicIndicators,
                Block::SummaryCards,
            ]
        );
    }
}
