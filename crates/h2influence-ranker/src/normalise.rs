//! Component similarity terms.

/// Categorical match: 1.0 when equal, 0.0 otherwise.
/// Comparison is exact (case and whitespace sensitive).
pub fn categorical_match(a: &str, b: &str) -> f64 {
    if a == b { 1.0 } else { 0.0 }
}

/// Technology term T.
pub fn technology_match(a: &str, b: &str) -> f64 {
    categorical_match(a, b)
}

/// Geography term G.
pub fn geography_match(a: &str, b: &str) -> f64 {
    categorical_match(a, b)
}

/// Capacity term C = 1 − |a − b| / max_capacity.
///
/// Linear in the absolute gap and NOT clamped: it stays within (−1, 1] only
/// while `max_capacity` bounds both capacities. Callers validate
/// `max_capacity > 0` before use.
pub fn capacity_similarity(a: f64, b: f64, max_capacity: f64) -> f64 {
    1.0 - (a - b).abs() / max_capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_match_is_exact() {
        assert_eq!(technology_match("Electrolysis", "Electrolysis"), 1.0);
        assert_eq!(technology_match("Electrolysis", "electrolysis"), 0.0);
        assert_eq!(geography_match("DE", "FR"), 0.0);
    }

    #[test]
    fn test_capacity_similarity() {
        assert_eq!(capacity_similarity(100.0, 100.0, 200.0), 1.0);
        assert_eq!(capacity_similarity(50.0, 150.0, 200.0), 0.5);
        assert_eq!(capacity_similarity(0.0, 200.0, 200.0), 0.0);
    }

    #[test]
    fn test_capacity_similarity_not_clamped() {
        // Undersized divisor: result goes negative rather than being clamped.
        assert_eq!(capacity_similarity(0.0, 300.0, 100.0), -2.0);
    }
}
