//! Vietnam's position in the US-China trade war.

use super::TabSet;

pub const TITLE: &str = "Vietnam's Position in the US-China Trade War";
pub const INTRO: &str = "Vietnam has emerged as one of the biggest beneficiaries of the US-China trade tensions, with significant manufacturing relocation from China and increased exports to both countries.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Overview,
    Trade,
    Risks,
}

impl TabSet for Tab {
    const ALL: &'static [Self] = &[Tab::Overview, Tab::Trade, Tab::Risks];

    fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trade => "Trade Data",
            Tab::Risks => "Risks",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Block {
    Intro,
    ExportChart,
    EconomicIndicators,
    FdiChart,
    IndustryShift,
    RiskFactors,
    KeyVulnerabilities,
}

pub fn blocks(tab: Tab) -> &'static [Block] {
    match tab {
        Tab::Overview => &[Block::Intro, Block::ExportChart, Block::EconomicIndicators],
        Tab::Trade => &[Block::ExportChart, Block::FdiChart, Block::IndustryShift],
        Tab::Risks => &[Block::RiskFactors, Block::KeyVulnerabilities],
    }
}

/// Exports by destination, $B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeYear {
    pub year: u16,
    pub to_us: f64,
    pub to_china: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdiYear {
    pub year: u16,
    /// Inflows, $B.
    pub value: f64,
    /// Year-on-year growth, percent.
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryShift {
    pub name: &'static str,
    pub share: f64,
    pub change: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactor {
    pub factor: &'static str,
    /// Severity on a 1-10 scale.
    pub risk: f64,
}

pub const EXPORTS: &[TradeYear] = &[
    TradeYear {
        year: 2018,
        to_us: 47.5,
        to_china: 41.3,
        total: 243.5,
    },
    TradeYear {
        year: 2019,
        to_us: 61.3,
        to_china: 41.4,
        total: 264.2,
    },
    TradeYear {
        year: 2020,
        to_us: 76.4,
        to_china: 48.9,
        total: 281.5,
    },
    TradeYear {
        year: 2021,
        to_us: 96.3,
        to_china: 55.9,
        total: 336.3,
    },
    TradeYear {
        year: 2022,
        to_us: 109.1,
        to_china: 57.7,
        total: 371.9,
    },
    TradeYear {
        year: 2023,
        to_us: 112.4,
        to_china: 60.2,
        total: 392.8,
    },
    TradeYear {
        year: 2024,
        to_us: 118.6,
        to_china: 63.1,
        total: 413.5,
    },
];

pub const FDI: &[FdiYear] = &[
    FdiYear {
        year: 2018,
        value: 19.1,
        growth: 9.1,
    },
    FdiYear {
        year: 2019,
        value: 20.4,
        growth: 6.8,
    },
    FdiYear {
        year: 2020,
        value: 15.8,
        growth: -22.5,
    },
    FdiYear {
        year: 2021,
        value: 19.7,
        growth: 24.7,
    },
    FdiYear {
        year: 2022,
        value: 22.4,
        growth: 13.7,
    },
    FdiYear {
        year: 2023,
        value: 25.8,
        growth: 15.2,
    },
    FdiYear {
        year: 2024,
        value: 27.1,
        growth: 5.0,
    },
];

pub const INDUSTRY_SHIFT: &[IndustryShift] = &[
    IndustryShift {
        name: "Electronics",
        share: 32.0,
        change: "+15%",
    },
    IndustryShift {
        name: "Textiles",
        share: 24.0,
        change: "+10%",
    },
    IndustryShift {
        name: "Furniture",
        share: 18.0,
        change: "+22%",
    },
    IndustryShift {
        name: "Machinery",
        share: 14.0,
        change: "+8%",
    },
    IndustryShift {
        name: "Footwear",
        share: 12.0,
        change: "+5%",
    },
];

pub const ECONOMIC_INDICATORS: &[Indicator] = &[
    Indicator {
        name: "GDP Growth (%)",
        value: 6.5,
    },
    Indicator {
        name: "Manufacturing PMI",
        value: 53.2,
    },
    Indicator {
        name: "Trade Balance ($ bn)",
        value: 4.8,
    },
    Indicator {
        name: "Inflation (%)",
        value: 3.2,
    },
    Indicator {
        name: "FDI as % of GDP",
        value: 6.8,
    },
];

pub const RISK_FACTORS: &[RiskFactor] = &[
    RiskFactor {
        factor: "Supply Chain Dependence on China",
        risk: 7.8,
    },
    RiskFactor {
        factor: "Tariff Vulnerability",
        risk: 6.2,
    },
    RiskFactor {
        factor: "US-Vietnam Trade Friction",
        risk: 4.5,
    },
    RiskFactor {
        factor: "Exchange Rate Volatility",
        risk: 5.3,
    },
    RiskFactor {
        factor: "Labor Cost Increases",
        risk: 6.7,
    },
];

pub const KEY_VULNERABILITIES: &[&str] = &[
    "Heavy dependence on imported raw materials and components from China",
    "US concerns about currency manipulation and trade surplus",
    "Limited infrastructure capacity for rapid industrial expansion",
    "Rising labor costs eroding competitive advantage",
    "Potential for \"transshipment\" accusations (Chinese goods routed through Vietnam)",
];


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_tab_repeats_export_chart() {
        assert!(blocks(Tab::Overview).contains(&Block::ExportChart));
        assert!(blocks(Tab::Trade).contains(&Block::ExportChart));
        assert!(!blocks(Tab::Risks).contains(&Block::ExportChart));
    }

    #[test]
    fn test_tab_names_parse() {
        assert_eq!("trade".parse::<Tab>().unwrap(), Tab::Trade);
        assert_eq!(Tab::Risks.to_string(), "risks");
    }
}
