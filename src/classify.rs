//! Classifiers mapping record fields to color buckets.
//!
//! Every function here is total: unexpected categorical input lands in a
//! fallback bucket instead of failing.

use crate::palette::Palette;
use std::fmt::{Display, Formatter};

/// Categorical severity attached to an export sector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VulnerabilityLevel {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
    /// Any label outside the known scale.
    Unknown,
}

impl VulnerabilityLevel {
    /// Known levels in ascending severity.
    pub const KNOWN: [VulnerabilityLevel; 5] = [
        VulnerabilityLevel::None,
        VulnerabilityLevel::Low,
        VulnerabilityLevel::Medium,
        VulnerabilityLevel::High,
        VulnerabilityLevel::VeryHigh,
    ];

    /// Parses a display label. Labels outside the scale become `Unknown`.
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|level| level.label() == label)
            .unwrap_or(VulnerabilityLevel::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            VulnerabilityLevel::None => "None",
            VulnerabilityLevel::Low => "Low",
            VulnerabilityLevel::Medium => "Medium",
            VulnerabilityLevel::High => "High",
            VulnerabilityLevel::VeryHigh => "Very High",
            VulnerabilityLevel::Unknown => "Unknown",
        }
    }
}

impl Display for VulnerabilityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Color for a sector vulnerability level.
pub fn vulnerability_color(level: VulnerabilityLevel) -> Palette {
    match level {
        VulnerabilityLevel::VeryHigh => Palette::Danger,
        VulnerabilityLevel::High => Palette::Warning,
        VulnerabilityLevel::Medium => Palette::Caution,
        VulnerabilityLevel::Low => Palette::Success,
        VulnerabilityLevel::None => Palette::Neutral,
        VulnerabilityLevel::Unknown => Palette::Default,
    }
}

/// A single comparison in a threshold table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Bound {
    /// Strictly greater than the boundary.
    Above(f64),
    /// Strictly less than the boundary.
    Below(f64),
    /// Exactly equal to the boundary.
    Exactly(f64),
}

impl Bound {
    pub fn matches(self, value: f64) -> bool {
        match self {
            Bound::Above(boundary) => value > boundary,
            Bound::Below(boundary) => value < boundary,
            Bound::Exactly(boundary) => value == boundary,
        }
    }
}

/// Ordered threshold table: the first matching band wins, otherwise the
/// fallback bucket applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeScale {
    pub bands: &'static [(Bound, Palette)],
    pub fallback: Palette,
}

/// Regional vulnerability index banding.
pub const PROVINCE_INDEX: MagnitudeScale = MagnitudeScale {
    bands: &[
        (Bound::Above(8.0), Palette::Danger),
        (Bound::Above(7.0), Palette::Warning),
    ],
    fallback: Palette::Info,
};

/// Tariff scenario GDP impact banding (percent).
pub const SCENARIO_GDP: MagnitudeScale = MagnitudeScale {
    bands: &[
        (Bound::Exactly(0.0), Palette::Neutral),
        (Bound::Above(-2.0), Palette::Warning),
    ],
    fallback: Palette::Danger,
};

/// Tariff scenario jobs impact banding (head count).
pub const SCENARIO_JOBS: MagnitudeScale = MagnitudeScale {
    bands: &[
        (Bound::Exactly(0.0), Palette::Neutral),
        (Bound::Above(-200_000.0), Palette::Warning),
    ],
    fallback: Palette::Danger,
};

/// Scenario table cells: losses are red, everything else green.
pub const SCENARIO_CELL: MagnitudeScale = MagnitudeScale {
    bands: &[(Bound::Below(0.0), Palette::Danger)],
    fallback: Palette::Success,
};

/// Color of the first band in `scale` the value satisfies, else the fallback.
pub fn magnitude_color(value: f64, scale: &MagnitudeScale) -> Palette {
    scale
        .bands
        .iter()
        .find(|(bound, _)| bound.matches(value))
        .map(|(_, color)| *color)
        .unwrap_or(scale.fallback)
}

/// Whether a delta counts as an improvement.
///
/// With `invert` set (e.g. inflation) a decrease is the improvement. Zero is
/// never an improvement.
pub fn is_improvement(value: f64, invert: bool) -> bool {
    if invert { value < 0.0 } else { value > 0.0 }
}

/// Good/bad color for a before/after delta.
pub fn sign_color(value: f64, invert: bool) -> Palette {
    if is_improvement(value, invert) {
        Palette::Success
    } else {
        Palette::Danger
    }
}

/// Color for an alternative-market timeframe label.
pub fn timeframe_color(timeframe: &str) -> Palette {
    match timeframe {
        "Short" => Palette::Success,
        "Medium" => Palette::Info,
        _ => Palette::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_vulnerability_levels_have_distinct_colors() {
        let colors: HashSet<_> = VulnerabilityLevel::KNOWN
            .iter()
            .map(|level| vulnerability_color(*level))
            .collect();
        assert_eq!(colors.len(), VulnerabilityLevel::KNOWN.len());
        assert!(!colors.contains(&Palette::Default));
    }

    #[test]
    fn test_vulnerability_colors() {
        assert_eq!(
            vulnerability_color(VulnerabilityLevel::VeryHigh),
            Palette::Danger
        );
        assert_eq!(
            vulnerability_color(VulnerabilityLevel::High),
            Palette::Warning
        );
        assert_eq!(
            vulnerability_color(VulnerabilityLevel::Medium),
            Palette::Caution
        );
        assert_eq!(
            vulnerability_color(VulnerabilityLevel::Low),
            Palette::Success
        );
        assert_eq!(
            vulnerability_color(VulnerabilityLevel::None),
            Palette::Neutral
        );
    }

    #[test]
    fn test_unknown_label_falls_back_to_default() {
        for label in ["Extreme", "", "very high", "HIGH", "Medium-High"] {
            let level = VulnerabilityLevel::from_label(label);
            assert_eq!(level, VulnerabilityLevel::Unknown, "label {:?}", label);
            assert_eq!(vulnerability_color(level), Palette::Default);
        }
    }

    #[test]
    fn test_label_round_trip_for_known_levels() {
        for level in VulnerabilityLevel::KNOWN {
            assert_eq!(VulnerabilityLevel::from_label(level.label()), level);
        }
    }

    #[test]
    fn test_province_banding() {
        assert_eq!(magnitude_color(8.7, &PROVINCE_INDEX), Palette::Danger);
        assert_eq!(magnitude_color(7.2, &PROVINCE_INDEX), Palette::Warning);
        assert_eq!(magnitude_color(6.8, &PROVINCE_INDEX), Palette::Info);
        // Boundaries are strict.
        assert_eq!(magnitude_color(8.0, &PROVINCE_INDEX), Palette::Warning);
        assert_eq!(magnitude_color(7.0, &PROVINCE_INDEX), Palette::Info);
    }

    #[test]
    fn test_scenario_gdp_banding() {
        assert_eq!(magnitude_color(0.0, &SCENARIO_GDP), Palette::Neutral);
        assert_eq!(magnitude_color(-1.2, &SCENARIO_GDP), Palette::Warning);
        assert_eq!(magnitude_color(-1.999, &SCENARIO_GDP), Palette::Warning);
        assert_eq!(magnitude_color(-2.0, &SCENARIO_GDP), Palette::Danger);
        assert_eq!(magnitude_color(-7.8, &SCENARIO_GDP), Palette::Danger);
    }

    #[test]
    fn test_scenario_jobs_banding() {
        assert_eq!(magnitude_color(0.0, &SCENARIO_JOBS), Palette::Neutral);
        assert_eq!(
            magnitude_color(-120_000.0, &SCENARIO_JOBS),
            Palette::Warning
        );
        assert_eq!(magnitude_color(-345_000.0, &SCENARIO_JOBS), Palette::Danger);
    }

    #[test]
    fn test_scenario_cell_treats_zero_as_success() {
        assert_eq!(magnitude_color(0.0, &SCENARIO_CELL), Palette::Success);
        assert_eq!(magnitude_color(-0.1, &SCENARIO_CELL), Palette::Danger);
    }

    #[test]
    fn test_sign_color_regular_and_inverted() {
        assert_eq!(sign_color(0.4, false), Palette::Success);
        assert_eq!(sign_color(-0.4, false), Palette::Danger);
        assert_eq!(sign_color(-0.7, true), Palette::Success);
        assert_eq!(sign_color(0.7, true), Palette::Danger);
    }

    #[test]
    fn test_sign_color_zero_is_bad_both_ways() {
        assert_eq!(sign_color(0.0, false), Palette::Danger);
        assert_eq!(sign_color(0.0, true), Palette::Danger);
    }

    #[test]
    fn test_timeframe_color() {
        assert_eq!(timeframe_color("Short"), Palette::Success);
        assert_eq!(timeframe_color("Medium"), Palette::Info);
        assert_eq!(timeframe_color("Long"), Palette::Warning);
        assert_eq!(timeframe_color("whenever"), Palette::Warning);
    }
}
