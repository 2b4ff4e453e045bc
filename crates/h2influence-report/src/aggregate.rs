//! Country-pair aggregation of the score table.

use std::collections::{BTreeMap, BTreeSet};

use h2influence_common::PairScore;
use serde::Serialize;

/// Mean score per ordered (source country, target country) pair.
///
/// `rows` are the distinct source countries, `columns` the distinct target
/// countries, both sorted. `values[r][c]` is `None` when no pair in the
/// table links that combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMatrix {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CountryMatrix {
    pub fn get(&self, source_country: &str, target_country: &str) -> Option<f64> {
        let r = self.rows.iter().position(|c| c == source_country)?;
        let c = self.columns.iter().position(|c| c == target_country)?;
        self.values[r][c]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group by (Country1, Country2) and average the scores.
pub fn country_pair_means(scores: &[PairScore]) -> CountryMatrix {
    let mut sums: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
    let mut rows = BTreeSet::new();
    let mut columns = BTreeSet::new();

    for pair in scores {
        let key = (pair.source.country.as_str(), pair.target.country.as_str());
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += pair.score;
        entry.1 += 1;
        rows.insert(key.0);
        columns.insert(key.1);
    }

    let values = rows
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| sums.get(&(*r, *c)).map(|(sum, n)| sum / *n as f64))
                .collect()
        })
        .collect();

    CountryMatrix {
        rows: rows.into_iter().map(str::to_string).collect(),
        columns: columns.into_iter().map(str::to_string).collect(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2influence_common::ProjectRecord;

    fn pair(c1: &str, c2: &str, score: f64) -> PairScore {
        PairScore {
            source: ProjectRecord::new("a", "SMR", c1, 1.0, 1.0, "2025"),
            target: ProjectRecord::new("b", "SMR", c2, 1.0, 1.0, "2025"),
            score,
        }
    }

    #[test]
    fn test_means_per_ordered_pair() {
        let scores = vec![
            pair("DE", "FR", 0.2),
            pair("DE", "FR", 0.4),
            pair("FR", "DE", 0.9),
            pair("DE", "DE", 1.0),
        ];
        let m = country_pair_means(&scores);
        assert_eq!(m.rows, vec!["DE", "FR"]);
        assert_eq!(m.columns, vec!["DE", "FR"]);
        assert!((m.get("DE", "FR").unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(m.get("FR", "DE"), Some(0.9));
        assert_eq!(m.get("DE", "DE"), Some(1.0));
        assert_eq!(m.get("FR", "FR"), None);
    }

    #[test]
    fn test_rows_and_columns_may_differ() {
        let m = country_pair_means(&[pair("NL", "ES", 0.5)]);
        assert_eq!(m.rows, vec!["NL"]);
        assert_eq!(m.columns, vec!["ES"]);
        assert_eq!(m.values, vec![vec![Some(0.5)]]);
    }

    #[test]
    fn test_empty_table() {
        let m = country_pair_means(&[]);
        assert!(m.is_empty());
        assert!(m.values.is_empty());
    }
}
