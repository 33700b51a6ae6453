//! Growth and derived percentage metrics

/// Percentage growth from `previous` to `current`, rounded to one decimal.
///
/// Returns `None` when the result is not finite (a zero or non-finite
/// baseline), so callers never render `Infinity%` or `NaN%`.
pub fn growth_percent(current: f64, previous: f64) -> Option<f64> {
    let growth = ((current - previous) / previous) * 100.0;
    if growth.is_finite() {
        Some((growth * 10.0).round() / 10.0)
    } else {
        None
    }
}

/// Render a growth value for display: `+20.0%`, `-5.3%`, or `N/A`
pub fn format_growth(growth: Option<f64>) -> String {
    match growth {
        Some(g) if g > 0.0 => format!("+{:.1}%", g),
        Some(g) => format!("{:.1}%", g),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_percent_growth() {
        assert_eq!(growth_percent(6_000_000.0, 5_000_000.0), Some(20.0));
    }

    #[test]
    fn negative_growth_rounds_to_one_decimal() {
        assert_eq!(growth_percent(4_100_000.0, 4_500_000.0), Some(-8.9));
    }

    #[test]
    fn zero_baseline_yields_none() {
        assert_eq!(growth_percent(100.0, 0.0), None);
    }

    #[test]
    fn nan_input_yields_none() {
        assert_eq!(growth_percent(f64::NAN, 5.0), None);
    }

    #[test]
    fn formatted_growth_never_prints_infinity() {
        assert_eq!(format_growth(growth_percent(100.0, 0.0)), "N/A");
        assert_eq!(format_growth(Some(20.0)), "+20.0%");
        assert_eq!(format_growth(Some(-5.3)), "-5.3%");
        assert_eq!(format_growth(Some(0.0)), "0.0%");
    }
}
