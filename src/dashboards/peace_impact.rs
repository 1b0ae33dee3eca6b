//! Impact of a Russia-Ukraine peace deal on Vietnam's economy.

use super::TabSet;
use crate::classify::sign_color;
use crate::palette::Palette;

pub const TITLE: &str = "Impact of Russia-Ukraine Peace Deal on Vietnam's Economy";
pub const INTRO: &str = "While Vietnam's direct trade with Russia and Ukraine is limited, a peace deal would affect Vietnam's economy through global commodity markets, trade flows, and regional stability.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Overview,
    Trade,
    Sectors,
}

impl TabSet for Tab {
    const ALL: &'static [Self] = &[Tab::Overview, Tab::Trade, Tab::Sectors];

    fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trade => "Trade Impact",
            Tab::Sectors => "Sector Analysis",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Block {
    EconomicIndicators,
    Opportunities,
    Risks,
    TradeChart,
    CommodityImpact,
    SectorImpact,
    KeyFindings,
}

pub fn blocks(tab: Tab) -> &'static [Block] {
    match tab {
        Tab::Overview => &[
            Block::EconomicIndicators,
            Block::Opportunities,
            Block::Risks,
        ],
        Tab::Trade => &[Block::TradeChart, Block::CommodityImpact],
        Tab::Sectors => &[Block::SectorImpact, Block::KeyFindings],
    }
}

/// Trade with Russia and Ukraine for one period, $B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradePeriod {
    pub label: &'static str,
    pub russia_imports: f64,
    pub russia_exports: f64,
    pub ukraine_imports: f64,
    pub ukraine_exports: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commodity {
    pub name: &'static str,
    /// Percent.
    pub price_change: f64,
    /// $B.
    pub import_volume: f64,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorImpact {
    pub name: &'static str,
    pub value: f64,
    pub impact: &'static str,
    pub description: &'static str,
}

/// Before/after estimate for one economic indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorChange {
    pub indicator: &'static str,
    pub before: f64,
    pub after: f64,
    pub unit: &'static str,
}

impl IndicatorChange {
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }

    /// Inflation improves when it falls; every other indicator when it rises.
    pub fn lower_is_better(&self) -> bool {
        self.indicator == "Inflation"
    }

    pub fn color(&self) -> Palette {
        sign_color(self.delta(), self.lower_is_better())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem {
    pub name: &'static str,
    /// Score on a 1-10 scale.
    pub score: f64,
}

pub const TRADE: &[TradePeriod] = &[
    TradePeriod {
        label: "2022",
        russia_imports: 2.5,
        russia_exports: 0.9,
        ukraine_imports: 0.3,
        ukraine_exports: 0.1,
    },
    TradePeriod {
        label: "2023",
        russia_imports: 1.8,
        russia_exports: 0.7,
        ukraine_imports: 0.2,
        ukraine_exports: 0.08,
    },
    TradePeriod {
        label: "2024",
        russia_imports: 1.6,
        russia_exports: 0.6,
        ukraine_imports: 0.15,
        ukraine_exports: 0.07,
    },
    TradePeriod {
        label: "Post-Peace (Est.)",
        russia_imports: 2.2,
        russia_exports: 1.1,
        ukraine_imports: 0.4,
        ukraine_exports: 0.2,
    },
];

pub const COMMODITIES: &[Commodity] = &[
    Commodity {
        name: "Wheat",
        price_change: -8.5,
        import_volume: 0.8,
        impact: "Moderate Positive",
    },
    Commodity {
        name: "Petroleum",
        price_change: -5.3,
        import_volume: 2.7,
        impact: "Strong Positive",
    },
    Commodity {
        name: "Fertilizer",
        price_change: -12.1,
        import_volume: 1.4,
        impact: "Strong Positive",
    },
    Commodity {
        name: "Steel",
        price_change: -3.2,
        import_volume: 1.1,
        impact: "Mild Positive",
    },
    Commodity {
        name: "Sunflower Oil",
        price_change: -15.4,
        import_volume: 0.3,
        impact: "Moderate Positive",
    },
];

pub const SECTOR_IMPACT: &[SectorImpact] = &[
    SectorImpact {
        name: "Manufacturing",
        value: 35.0,
        impact: "Positive",
        description: "Lower input costs, increased orders",
    },
    SectorImpact {
        name: "Agriculture",
        value: 25.0,
        impact: "Mixed",
        description: "Lower fertilizer costs, potential export competition",
    },
    SectorImpact {
        name: "Energy",
        value: 15.0,
        impact: "Positive",
        description: "Lower fuel import costs",
    },
    SectorImpact {
        name: "Tourism",
        value: 12.0,
        impact: "Positive",
        description: "Improved global sentiment, potential Russian tourism",
    },
    SectorImpact {
        name: "Construction",
        value: 8.0,
        impact: "Positive",
        description: "Lower material costs",
    },
    SectorImpact {
        name: "Other",
        value: 5.0,
        impact: "Neutral",
        description: "Limited direct impact",
    },
];

pub const ECONOMIC_INDICATORS: &[IndicatorChange] = &[
    IndicatorChange {
        indicator: "GDP Growth",
        before: 6.0,
        after: 6.4,
        unit: "%",
    },
    IndicatorChange {
        indicator: "Inflation",
        before: 3.5,
        after: 2.8,
        unit: "%",
    },
    IndicatorChange {
        indicator: "Trade Balance",
        before: 4.2,
        after: 5.1,
        unit: "$ bn",
    },
    IndicatorChange {
        indicator: "FDI Inflows",
        before: 15.8,
        after: 17.3,
        unit: "$ bn",
    },
    IndicatorChange {
        indicator: "Manufacturing PMI",
        before: 52.4,
        after: 54.1,
        unit: "Index",
    },
];

pub const OPPORTUNITIES: &[ScoredItem] = &[
    ScoredItem {
        name: "Reduced input costs",
        score: 8.5,
    },
    ScoredItem {
        name: "Increased Russian tourism",
        score: 6.2,
    },
    ScoredItem {
        name: "Agricultural exports to Russia",
        score: 7.0,
    },
    ScoredItem {
        name: "Infrastructure projects",
        score: 5.8,
    },
    ScoredItem {
        name: "Technology partnerships",
        score: 4.5,
    },
];

pub const RISKS: &[ScoredItem] = &[
    ScoredItem {
        name: "Ukrainian agricultural competition",
        score: 4.3,
    },
    ScoredItem {
        name: "Russian market volatility",
        score: 5.1,
    },
    ScoredItem {
        name: "Sanctions uncertainty",
        score: 6.7,
    },
    ScoredItem {
        name: "Exchange rate fluctuations",
        score: 5.9,
    },
    ScoredItem {
        name: "Geopolitical realignment",
        score: 4.8,
    },
];

pub const KEY_FINDINGS: &[&str] = &[
    "Manufacturing sectors would benefit most from reduced input costs, particularly fertilizers and energy",
    "Agriculture faces mixed impacts: lower production costs but potential increased competition from Ukrainian exports",
    "Vietnam's modest but growing trade with Russia could see significant recovery post-peace",
    "Tourism could see uptick from increased Russian visitors as travel constraints ease",
    "Overall economic benefit through improved global outlook and reduced inflationary pressures",
];
