//! Display formatting for dashboard figures.
//!
//! All helpers are pure; identical inputs always produce identical bytes.

/// Extra digits requested when checking whether a value sits exactly on a
/// rounding midpoint.
const TIE_GUARD_DIGITS: usize = 30;

/// Rounds `value` to `places` decimals.
///
/// Midpoints round away from zero and negative zero prints unsigned, so
/// `to_fixed(2.5, 0)` is `"3"` and `to_fixed(-0.0, 1)` is `"0.0"`.
pub fn to_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let padded = format!("{:.*}", places + TIE_GUARD_DIGITS, magnitude);
    let (head, tail) = padded.split_at(padded.len() - TIE_GUARD_DIGITS);
    let is_midpoint = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let digits = if is_midpoint {
        round_up_decimal(head.trim_end_matches('.'))
    } else {
        format!("{:.*}", places, magnitude)
    };
    format!("{}{}", sign, digits)
}

/// Adds one unit in the last place of a plain decimal string.
fn round_up_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut index = bytes.len();
    while index > 0 {
        index -= 1;
        match bytes[index] {
            b'.' => continue,
            b'9' => bytes[index] = b'0',
            digit => {
                bytes[index] = digit + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    // Every digit carried over, e.g. "9.9" -> "10.0".
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Shortest rendering of a literal: `1.0` prints as `1`, `0.08` as `0.08`.
pub fn plain_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Signed delta with a leading `+` for non-negative values.
pub fn signed_delta(delta: f64, places: usize) -> String {
    if delta >= 0.0 {
        format!("+{}", to_fixed(delta, places))
    } else {
        to_fixed(delta, places)
    }
}

/// Integer with comma thousands separators, e.g. `-120000` -> `-120,000`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Share of each value in the group total, in percent.
///
/// A zero-sum group yields zero for every entry.
pub fn percent_of_total(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|value| value / total * 100.0).collect()
}

/// Relative growth from `from` to `to`, in percent.
pub fn growth_percent(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to / from - 1.0) * 100.0
}

/// Pie slice label such as `"US Exports: 28.4%"`.
pub fn pie_label(name: &str, percent: f64, places: usize) -> String {
    format!("{}: {}%", name, to_fixed(percent, places))
}

/// Currency figure in billions, e.g. `$34.2B`.
pub fn billions(value: f64) -> String {
    format!("${}B", to_fixed(value, 1))
}

/// Fill ratio of a 1-10 score bar, clamped to `[0, 1]`.
pub fn score_ratio(score: f64) -> f64 {
    (score / 10.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_basic_rounding() {
        assert_eq!(to_fixed(34.2, 1), "34.2");
        assert_eq!(to_fixed(12.5, 1), "12.5");
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(-3.5, 1), "-3.5");
        assert_eq!(to_fixed(81.3, 1), "81.3");
        assert_eq!(to_fixed(28.4, 0), "28");
    }

    #[test]
    fn test_to_fixed_midpoints_round_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(9.95, 1), "9.9"); // 9.95 is stored slightly below the midpoint
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_to_fixed_binary_near_midpoint_is_not_a_tie() {
        // 1.005 is stored as 1.00499999...
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_to_fixed_negative_zero_is_unsigned() {
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn test_floating_point_deltas() {
        assert_eq!(signed_delta(6.4 - 6.0, 1), "+0.4");
        assert_eq!(signed_delta(2.8 - 3.5, 1), "-0.7");
        assert_eq!(signed_delta(54.1 - 52.4, 1), "+1.7");
    }

    #[test]
    fn test_signed_delta_zero_gets_plus() {
        assert_eq!(signed_delta(0.0, 1), "+0.0");
        assert_eq!(signed_delta(-0.0, 1), "+0.0");
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(plain_number(1.0), "1");
        assert_eq!(plain_number(100.0), "100");
        assert_eq!(plain_number(0.08), "0.08");
        assert_eq!(plain_number(-8.5), "-8.5");
        assert_eq!(plain_number(-0.0), "0");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-120_000), "-120,000");
        assert_eq!(group_thousands(820_000), "820,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_percent_of_total() {
        let shares = percent_of_total(&[28.4, 32.6, 39.0]);
        assert!((shares[0] - 28.4).abs() < 1e-9);
        assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        assert_eq!(percent_of_total(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(percent_of_total(&[]).is_empty());
    }

    #[test]
    fn test_growth_percent() {
        assert_eq!(to_fixed(growth_percent(56.1, 100.0), 1), "78.3");
        assert_eq!(growth_percent(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_pie_label_and_billions() {
        assert_eq!(pie_label("US Exports", 28.4, 1), "US Exports: 28.4%");
        assert_eq!(pie_label("Infrastructure", 38.0, 0), "Infrastructure: 38%");
        assert_eq!(billions(34.2), "$34.2B");
        assert_eq!(billions(6.5), "$6.5B");
    }

    #[test]
    fn test_score_ratio() {
        assert!((score_ratio(7.8) - 0.78).abs() < 1e-12);
        assert_eq!(score_ratio(12.0), 1.0);
        assert_eq!(score_ratio(-1.0), 0.0);
    }
}
