//! Vietnam-US trade vulnerability: exposure of exports to US tariffs.

use super::{Slice, SummaryCard, TabSet, YearPoint};
use crate::classify::VulnerabilityLevel;
use crate::format::{billions, growth_percent, percent_of_total, plain_number, to_fixed};
use crate::palette::Palette;

pub const TITLE: &str = "Vietnam-US Trade Vulnerability Dashboard";
pub const SUBTITLE: &str = "Analysis of potential US tariff impacts on Vietnam's economy";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Overview,
    Sectors,
    Scenarios,
}

impl TabSet for Tab {
    const ALL: &'static [Self] = &[Tab::Overview, Tab::Sectors, Tab::Scenarios];

    fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Sectors => "Sector Analysis",
            Tab::Scenarios => "Tariff Scenarios",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Block {
    HeadlineCards,
    ExportTrend,
    GdpComposition,
    ExportCategories,
    SectorVulnerability,
    ProvinceIndex,
    AlternativeMarkets,
    ScenarioTable,
    ScenarioGdpImpact,
    ScenarioJobsImpact,
}

/// Blocks shown on `tab`, in layout order.
pub fn blocks(tab: Tab) -> &'static [Block] {
    match tab {
        Tab::Overview => &[
            Block::HeadlineCards,
            Block::ExportTrend,
            Block::GdpComposition,
        ],
        Tab::Sectors => &[
            Block::ExportCategories,
            Block::SectorVulnerability,
            Block::ProvinceIndex,
            Block::AlternativeMarkets,
        ],
        Tab::Scenarios => &[
            Block::ScenarioTable,
            Block::ScenarioGdpImpact,
            Block::ScenarioJobsImpact,
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorRecord {
    pub name: &'static str,
    /// Export value, $B.
    pub value: f64,
    /// Vulnerability label as published, e.g. "Very High".
    pub vulnerability: &'static str,
    /// Projected tariff cost, $B.
    pub tariff_impact: f64,
}

impl SectorRecord {
    pub fn level(&self) -> VulnerabilityLevel {
        VulnerabilityLevel::from_label(self.vulnerability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioRecord {
    pub scenario: &'static str,
    /// Percent of GDP.
    pub gdp_impact: f64,
    pub jobs_impact: i64,
    /// Percent of exports.
    pub export_drop: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvinceRecord {
    pub name: &'static str,
    /// Vulnerability index on a 0-10 scale.
    pub index: f64,
    pub jobs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketRecord {
    pub name: &'static str,
    pub current: f64,
    pub potential: f64,
    pub timeframe: &'static str,
}

/// Exports to the US, $B.
pub const EXPORT_TREND: &[YearPoint] = &[
    YearPoint {
        year: 2019,
        value: 61.3,
    },
    YearPoint {
        year: 2020,
        value: 76.4,
    },
    YearPoint {
        year: 2021,
        value: 96.3,
    },
    YearPoint {
        year: 2022,
        value: 109.1,
    },
    YearPoint {
        year: 2023,
        value: 124.5,
    },
    YearPoint {
        year: 2024,
        value: 131.2,
    },
];

pub const EXPORT_CATEGORIES: &[SectorRecord] = &[
    SectorRecord {
        name: "Electronics",
        value: 34.2,
        vulnerability: "High",
        tariff_impact: 9.2,
    },
    SectorRecord {
        name: "Textiles & Apparel",
        value: 22.8,
        vulnerability: "Very High",
        tariff_impact: 12.5,
    },
    SectorRecord {
        name: "Furniture",
        value: 14.3,
        vulnerability: "Medium",
        tariff_impact: 5.7,
    },
    SectorRecord {
        name: "Footwear",
        value: 13.5,
        vulnerability: "High",
        tariff_impact: 8.1,
    },
    SectorRecord {
        name: "Machinery",
        value: 8.7,
        vulnerability: "Medium",
        tariff_impact: 4.3,
    },
    SectorRecord {
        name: "Agricultural Products",
        value: 6.5,
        vulnerability: "Low",
        tariff_impact: 2.1,
    },
];

pub const GDP_COMPOSITION: &[Slice] = &[
    Slice {
        name: "US Exports",
        value: 28.4,
    },
    Slice {
        name: "Other Exports",
        value: 32.6,
    },
    Slice {
        name: "Domestic Economy",
        value: 39.0,
    },
];

pub const TARIFF_SCENARIOS: &[ScenarioRecord] = &[
    ScenarioRecord {
        scenario: "Baseline (Current)",
        gdp_impact: 0.0,
        jobs_impact: 0,
        export_drop: 0.0,
    },
    ScenarioRecord {
        scenario: "Mild Tariffs (5-10%)",
        gdp_impact: -1.2,
        jobs_impact: -120_000,
        export_drop: -8.4,
    },
    ScenarioRecord {
        scenario: "Moderate Tariffs (15-25%)",
        gdp_impact: -3.5,
        jobs_impact: -345_000,
        export_drop: -19.7,
    },
    ScenarioRecord {
        scenario: "Severe Tariffs (30-45%)",
        gdp_impact: -7.8,
        jobs_impact: -780_000,
        export_drop: -31.5,
    },
];

pub const PROVINCE_VULNERABILITY: &[ProvinceRecord] = &[
    ProvinceRecord {
        name: "Ho Chi Minh City",
        index: 8.7,
        jobs: 820_000,
    },
    ProvinceRecord {
        name: "Binh Duong",
        index: 8.5,
        jobs: 640_000,
    },
    ProvinceRecord {
        name: "Dong Nai",
        index: 8.3,
        jobs: 530_000,
    },
    ProvinceRecord {
        name: "Hanoi",
        index: 7.2,
        jobs: 410_000,
    },
    ProvinceRecord {
        name: "Bac Ninh",
        index: 7.0,
        jobs: 390_000,
    },
    ProvinceRecord {
        name: "Hai Phong",
        index: 6.8,
        jobs: 320_000,
    },
];

pub const ALTERNATIVE_MARKETS: &[MarketRecord] = &[
    MarketRecord {
        name: "EU",
        current: 14.2,
        potential: 19.5,
        timeframe: "Medium",
    },
    MarketRecord {
        name: "Japan",
        current: 8.7,
        potential: 12.3,
        timeframe: "Short",
    },
    MarketRecord {
        name: "South Korea",
        current: 7.8,
        potential: 10.6,
        timeframe: "Short",
    },
    MarketRecord {
        name: "ASEAN",
        current: 9.5,
        potential: 16.2,
        timeframe: "Medium",
    },
    MarketRecord {
        name: "China",
        current: 15.6,
        potential: 21.3,
        timeframe: "Long",
    },
];

/// Redirection capacity estimate quoted by the analysis.
const ALTERNATIVE_MARKET_CAPACITY: f64 = 79.8;

/// Share of US-bound exports in High or Very High vulnerability sectors.
pub fn high_risk_export_share() -> f64 {
    EXPORT_CATEGORIES
        .iter()
        .filter(|sector| {
            matches!(
                sector.level(),
                VulnerabilityLevel::High | VulnerabilityLevel::VeryHigh
            )
        })
        .map(|sector| sector.value)
        .sum()
}

/// The four overview KPI cards.
pub fn headline_cards() -> Vec<SummaryCard> {
    let mut cards = Vec::with_capacity(4);

    if let [.., previous, latest] = EXPORT_TREND {
        cards.push(SummaryCard {
            title: "US Exports (2024)",
            value: format!("${}B", plain_number(latest.value)),
            note: format!(
                "{}% vs {}",
                to_fixed(growth_percent(previous.value, latest.value), 1),
                previous.year
            ),
            tone: Palette::Success,
        });
    }

    let values: Vec<f64> = GDP_COMPOSITION.iter().map(|s| s.value).collect();
    let shares = percent_of_total(&values);
    let us_share = shares.first().copied().unwrap_or_default();
    cards.push(SummaryCard {
        title: "GDP Vulnerability",
        value: format!("{}%", to_fixed(us_share, 1)),
        note: "% of GDP exposed to US market".to_string(),
        tone: Palette::Warning,
    });

    cards.push(SummaryCard {
        title: "High-Risk Exports",
        value: format!("{}%", to_fixed(high_risk_export_share(), 1)),
        note: "% of US exports in vulnerable sectors".to_string(),
        tone: Palette::Danger,
    });

    cards.push(SummaryCard {
        title: "Alternative Markets",
        value: format!("{}%", to_fixed(ALTERNATIVE_MARKET_CAPACITY, 1)),
        note: "Potential export redirection capacity".to_string(),
        tone: Palette::Success,
    });

    cards
}

/// Tariff cost of a sector formatted for the vulnerability table.
pub fn tariff_impact_label(sector: &SectorRecord) -> String {
    billions(sector.tariff_impact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{PROVINCE_INDEX, SCENARIO_GDP, magnitude_color};

    #[test]
    fn test_sector_labels_are_known_levels() {
        for sector in EXPORT_CATEGORIES {
            assert_ne!(
                sector.level(),
                VulnerabilityLevel::Unknown,
                "{}",
                sector.name
            );
        }
        assert_eq!(EXPORT_CATEGORIES[1].level(), VulnerabilityLevel::VeryHigh);
    }

    #[test]
    fn test_headline_cards_derive_from_datasets() {
        let cards = headline_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "$131.2B");
        assert_eq!(cards[0].note, "5.4% vs 2023");
        assert_eq!(cards[1].value, "28.4%");
        assert_eq!(cards[2].value, "70.5%");
        assert_eq!(cards[3].value, "79.8%");
    }

    #[test]
    fn test_province_examples() {
        let color_of = |name: &str| {
            let province = PROVINCE_VULNERABILITY
                .iter()
                .find(|p| p.name == name)
                .unwrap();
            magnitude_color(province.index, &PROVINCE_INDEX)
        };
        assert_eq!(color_of("Ho Chi Minh City"), Palette::Danger);
        assert_eq!(color_of("Hanoi"), Palette::Warning);
        assert_eq!(color_of("Bac Ninh"), Palette::Info);
        assert_eq!(color_of("Hai Phong"), Palette::Info);
    }

    #[test]
    fn test_scenario_banding_over_dataset() {
        let colors: Vec<_> = TARIFF_SCENARIOS
            .iter()
            .map(|s| magnitude_color(s.gdp_impact, &SCENARIO_GDP))
            .collect();
        assert_eq!(
            colors,
            vec![
                Palette::Neutral,
                Palette::Warning,
                Palette::Danger,
                Palette::Danger
            ]
        );
    }

    #[test]
    fn test_export_trend_is_ordered_by_year() {
        assert!(EXPORT_TREND.windows(2).all(|w| w[0].year < w[1].year));
    }
}
