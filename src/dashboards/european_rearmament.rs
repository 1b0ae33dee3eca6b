//! Opportunities for Vietnam from European rearmament.

use super::{TabSet, YearPoint};
use crate::format::growth_percent;

pub const TITLE: &str = "Vietnam's Economic Opportunities from European Rearmament";
pub const INTRO: &str = "Europe's accelerated defense spending creates significant opportunities for Vietnam's export-oriented economy, particularly in electronics, textiles, and component manufacturing.";
pub const TRADE_FLOW_NOTE: &str = "Projected 41% increase in exports to the EU by 2027, driven by European rearmament demands and supply chain diversification.";
pub const INVESTMENT_NOTE: &str = "Projected 195% increase in defense-related FDI from European companies by 2027, as they seek to diversify supply chains and reduce production costs.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Overview,
    Exports,
    Investment,
}

impl TabSet for Tab {
    const ALL: &'static [Self] = &[Tab::Overview, Tab::Exports, Tab::Investment];

    fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Exports => "Export Opportunities",
            Tab::Investment => "Investment Benefits",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Block {
    EuropeanSpending,
    OpportunityAreas,
    CompetitiveAdvantages,
    ExportOpportunities,
    TradeFlow,
    DefenseParticipation,
    InvestmentFlows,
    SecondaryBenefits,
    Recommendations,
}

pub fn blocks(tab: Tab) -> &'static [Block] {
    match tab {
        Tab::Overview => &[
            Block::EuropeanSpending,
            Block::OpportunityAreas,
            Block::CompetitiveAdvantages,
        ],
        Tab::Exports => &[
            Block::ExportOpportunities,
            Block::TradeFlow,
            Block::DefenseParticipation,
        ],
        Tab::Investment => &[
            Block::InvestmentFlows,
            Block::SecondaryBenefits,
            Block::Recommendations,
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOpportunity {
    pub category: &'static str,
    /// $B.
    pub current: f64,
    /// $B by 2027.
    pub potential: f64,
    /// Percent.
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipationShare {
    pub name: &'static str,
    pub value: f64,
    pub potential: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benefit {
    pub benefit: &'static str,
    /// Impact on a 1-10 scale.
    pub impact: f64,
    pub description: &'static str,
}

/// Defense budget, $B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefenseSpending {
    pub country: &'static str,
    pub spending_2021: f64,
    pub spending_2024: f64,
    pub target: f64,
}

impl DefenseSpending {
    /// Growth from 2021 spending to the 2027 target, percent.
    pub fn target_growth(&self) -> f64 {
        growth_percent(self.spending_2021, self.target)
    }
}

pub const EXPORT_OPPORTUNITIES: &[ExportOpportunity] = &[
    ExportOpportunity {
        category: "Electronics & Components",
        current: 3.2,
        potential: 5.8,
        growth: 81.3,
    },
    ExportOpportunity {
        category: "Textiles (Military-Grade)",
        current: 1.5,
        potential: 2.9,
        growth: 93.3,
    },
    ExportOpportunity {
        category: "Machinery Parts",
        current: 0.8,
        potential: 2.1,
        growth: 162.5,
    },
    ExportOpportunity {
        category: "Rubber & Plastics",
        current: 0.6,
        potential: 1.4,
        growth: 133.3,
    },
    ExportOpportunity {
        category: "Metal Products",
        current: 0.4,
        potential: 1.0,
        growth: 150.0,
    },
];

/// Exports to the EU, $B.
pub const TRADE_FLOW: &[YearPoint] = &[
    YearPoint {
        year: 2022,
        value: 45.8,
    },
    YearPoint {
        year: 2023,
        value: 48.2,
    },
    YearPoint {
        year: 2024,
        value: 51.7,
    },
    YearPoint {
        year: 2025,
        value: 57.4,
    },
    YearPoint {
        year: 2026,
        value: 64.3,
    },
    YearPoint {
        year: 2027,
        value: 72.8,
    },
];

pub const DEFENSE_PARTICIPATION: &[ParticipationShare] = &[
    ParticipationShare {
        name: "Electronic Systems",
        value: 38.0,
        potential: "High",
    },
    ParticipationShare {
        name: "Support Equipment",
        value: 25.0,
        potential: "Medium-High",
    },
    ParticipationShare {
        name: "Textiles & Uniforms",
        value: 18.0,
        potential: "Medium",
    },
    ParticipationShare {
        name: "Component Manufacturing",
        value: 12.0,
        potential: "Medium",
    },
    ParticipationShare {
        name: "Software & IT Services",
        value: 7.0,
        potential: "Medium-Low",
    },
];

/// Defense-related FDI from Europe, $B.
pub const INVESTMENT_FLOWS: &[YearPoint] = &[
    YearPoint {
        year: 2022,
        value: 2.1,
    },
    YearPoint {
        year: 2023,
        value: 2.3,
    },
    YearPoint {
        year: 2024,
        value: 2.6,
    },
    YearPoint {
        year: 2025,
        value: 3.5,
    },
    YearPoint {
        year: 2026,
        value: 4.7,
    },
    YearPoint {
        year: 2027,
        value: 6.2,
    },
];

pub const SECONDARY_BENEFITS: &[Benefit] = &[
    Benefit {
        benefit: "Technology Transfer",
        impact: 8.2,
        description: "Access to advanced manufacturing technologies",
    },
    Benefit {
        benefit: "Skills Development",
        impact: 7.5,
        description: "Workforce training in high-precision manufacturing",
    },
    Benefit {
        benefit: "Infrastructure Investment",
        impact: 6.8,
        description: "Improved industrial facilities and logistics",
    },
    Benefit {
        benefit: "R&D Collaboration",
        impact: 5.9,
        description: "Joint research projects with European firms",
    },
    Benefit {
        benefit: "Quality Standards Elevation",
        impact: 7.3,
        description: "Adoption of stringent European standards",
    },
];

pub const DEFENSE_SPENDING: &[DefenseSpending] = &[
    DefenseSpending {
        country: "Germany",
        spending_2021: 56.1,
        spending_2024: 91.2,
        target: 100.0,
    },
    DefenseSpending {
        country: "France",
        spending_2021: 59.3,
        spending_2024: 72.8,
        target: 75.0,
    },
    DefenseSpending {
        country: "Poland",
        spending_2021: 13.8,
        spending_2024: 33.6,
        target: 35.0,
    },
    DefenseSpending {
        country: "Italy",
        spending_2021: 28.9,
        spending_2024: 35.4,
        target: 40.0,
    },
    DefenseSpending {
        country: "Netherlands",
        spending_2021: 14.7,
        spending_2024: 19.8,
        target: 23.0,
    },
];

pub const OPPORTUNITY_AREAS: &[&str] = &[
    "Electronics manufacturing for defense systems",
    "Military-grade textiles and uniforms",
    "Component manufacturing for defense equipment",
    "Machinery parts and metal products",
    "Logistics and supply chain services",
];

pub const COMPETITIVE_ADVANTAGES: &[&str] = &[
    "Established electronics manufacturing capabilities",
    "Strong textile manufacturing infrastructure",
    "Competitive labor costs vs. European production",
    "Existing EU free trade agreement",
    "Political stability and growing technical workforce",
];

/// Recommendation headline and detail.
pub const RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        "Specialized industrial zones",
        "Develop facilities specifically for defense-adjacent industries",
    ),
    (
        "Technical education",
        "Expand training programs aligned with defense industry needs",
    ),
    (
        "Quality certification",
        "Fast-track adoption of European defense industry standards",
    ),
    (
        "Digital infrastructure",
        "Enhance capabilities for secure manufacturing",
    ),
    (
        "Trade missions",
        "Target European defense contractors and major suppliers",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{signed_delta, to_fixed};

    #[test]
    fn test_target_growth_labels() {
        let labels: Vec<_> = DEFENSE_SPENDING
            .iter()
            .map(|row| signed_delta(row.target_growth(), 1))
            .collect();
        assert_eq!(labels[0], "+78.3");
        assert_eq!(labels[2], "+153.6");
        assert!(labels.iter().all(|label| label.starts_with('+')));
    }

    #[test]
    fn test_trade_flow_note_matches_data() {
        let from_2024 = TRADE_FLOW.iter().find(|p| p.year == 2024).unwrap().value;
        let to_2027 = TRADE_FLOW.last().unwrap().value;
        assert_eq!(to_fixed(growth_percent(from_2024, to_2027), 0), "41");
    }
}
