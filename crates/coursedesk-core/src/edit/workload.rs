// ── Numeric field coercion ──

use coursedesk_api::floor_workload;

/// Coerce raw workload text into hours.
///
/// Parses the text as a number and floors it. Empty, non-numeric and
/// negative input all resolve to 0; values past `u32::MAX` saturate.
pub fn coerce_workload(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse::<f64>().map_or(0, floor_workload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_decimals() {
        assert_eq!(coerce_workload("40"), 40);
        assert_eq!(coerce_workload("40.9"), 40);
        assert_eq!(coerce_workload(" 12 "), 12);
        assert_eq!(coerce_workload("1e2"), 100);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(coerce_workload(""), 0);
        assert_eq!(coerce_workload("abc"), 0);
        assert_eq!(coerce_workload("4a"), 0);
        assert_eq!(coerce_workload("NaN"), 0);
        assert_eq!(coerce_workload("-5"), 0);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(coerce_workload("99999999999"), u32::MAX);
        assert_eq!(coerce_workload("inf"), u32::MAX);
    }
}
