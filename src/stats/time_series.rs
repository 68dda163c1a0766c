//! Series temporales por día de calendario
//!
//! Agrupa por día con recuento y suma por bucket. Los días sin filas NO
//! aparecen en la serie; `zero_fill` existe como paso explícito aparte
//! para los consumidores de gráficas que necesiten serie continua, y
//! ningún camino por defecto lo aplica.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub day: NaiveDate,
    pub count: i64,
    pub total: Decimal,
}

/// Buckets ascendentes por día, solo días con al menos una fila
pub fn daily_series(rows: &[(NaiveDate, Decimal)]) -> Vec<DailyBucket> {
    let mut buckets: BTreeMap<NaiveDate, (i64, Decimal)> = BTreeMap::new();
    for (day, value) in rows {
        let entry = buckets.entry(*day).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += *value;
    }

    buckets
        .into_iter()
        .map(|(day, (count, total))| DailyBucket { day, count, total })
        .collect()
}

/// Rellena con buckets a cero los días de `[from, to]` ausentes de la
/// serie. Paso opcional, fuera del contrato del agregador.
pub fn zero_fill(series: &[DailyBucket], from: NaiveDate, to: NaiveDate) -> Vec<DailyBucket> {
    let mut by_day: BTreeMap<NaiveDate, &DailyBucket> =
        series.iter().map(|b| (b.day, b)).collect();

    let mut filled = Vec::new();
    let mut day = from;
    while day <= to {
        match by_day.remove(&day) {
            Some(bucket) => filled.push(bucket.clone()),
            None => filled.push(DailyBucket {
                day,
                count: 0,
                total: Decimal::ZERO,
            }),
        }
        day = day + Duration::days(1);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_series_groups_and_sums_per_day() {
        let rows = vec![
            (day(3), Decimal::from(10)),
            (day(1), Decimal::from(5)),
            (day(3), Decimal::from(7)),
        ];
        let series = daily_series(&rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].day, day(1));
        assert_eq!(series[0].count, 1);
        assert_eq!(series[0].total, Decimal::from(5));
        assert_eq!(series[1].day, day(3));
        assert_eq!(series[1].count, 2);
        assert_eq!(series[1].total, Decimal::from(17));
    }

    #[test]
    fn test_missing_days_are_omitted() {
        let rows = vec![(day(1), Decimal::ONE), (day(4), Decimal::ONE)];
        let series = daily_series(&rows);
        let days: Vec<NaiveDate> = series.iter().map(|b| b.day).collect();
        assert_eq!(days, vec![day(1), day(4)]);
    }

    #[test]
    fn test_empty_rows_yield_empty_series() {
        assert!(daily_series(&[]).is_empty());
    }

    #[test]
    fn test_zero_fill_completes_the_range() {
        let rows = vec![(day(2), Decimal::from(3))];
        let series = daily_series(&rows);
        let filled = zero_fill(&series, day(1), day(3));
        assert_eq!(filled.len(), 3);
        assert_eq!(filled[0].count, 0);
        assert_eq!(filled[1].count, 1);
        assert_eq!(filled[1].total, Decimal::from(3));
        assert_eq!(filled[2].count, 0);
    }
}
