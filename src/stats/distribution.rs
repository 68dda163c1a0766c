//! Estadísticas de distribución
//!
//! Agrupa filas por un campo categórico y calcula recuento y porcentaje
//! por grupo. Un total de cero produce un resultado vacío, nunca una
//! división por cero.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    pub label: String,
    pub count: i64,
    pub percentage: f64,
}

/// Porcentaje con un decimal
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Ordenado por recuento descendente y etiqueta ascendente
pub fn distribution<I>(labels: I) -> Vec<DistributionBucket>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    let mut total: i64 = 0;
    for label in labels {
        *counts.entry(label.into()).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return Vec::new();
    }

    let mut buckets: Vec<DistributionBucket> = counts
        .into_iter()
        .map(|(label, count)| DistributionBucket {
            label,
            count,
            percentage: round1(100.0 * count as f64 / total as f64),
        })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_status_distribution() {
        let buckets = distribution(["active", "active", "inactive"]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "active");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].percentage, 66.7);
        assert_eq!(buckets[1].label, "inactive");
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[1].percentage, 33.3);
    }

    #[test]
    fn test_counts_sum_to_input_size() {
        let labels = vec!["a", "b", "b", "c", "c", "c", "a"];
        let buckets = distribution(labels.clone());
        let counted: i64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(counted, labels.len() as i64);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let buckets = distribution(["a", "b", "b", "c", "c", "c"]);
        let sum: f64 = buckets.iter().map(|b| b.percentage).sum();
        assert!((sum - 100.0).abs() < 0.2);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let buckets = distribution(Vec::<String>::new());
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_ties_break_by_label() {
        let buckets = distribution(["b", "a"]);
        assert_eq!(buckets[0].label, "a");
        assert_eq!(buckets[1].label, "b");
    }
}
