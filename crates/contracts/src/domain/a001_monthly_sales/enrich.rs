//! Обогащение сырой таблицы продаж.
//!
//! Чистое преобразование: нормализует метки периодов, сортирует строки по
//! дате, дозаполняет прирост и выводит квартал. Ошибок не возвращает,
//! нераспознанные значения деградируют в `None` и правила ниже.

use chrono::{Datelike, NaiveDate};

use super::aggregate::SalesTable;

/// Разбирает метку периода "YYYY-MM" в дату первого числа месяца.
///
/// Лишние компоненты после месяца игнорируются, месяц вне 1..=12 и любой
/// нечисловой мусор дают `None`.
pub fn parse_period(period: &str) -> Option<NaiveDate> {
    let mut parts = period.split('-');
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Обогащает таблицу: после вызова строки отсортированы по дате по
/// возрастанию (нераспознанные периоды в конце), `change_pct` заполнен у
/// каждой строки, `quarter` выведен из даты.
///
/// Правила заполнения прироста:
/// - значение из файла имеет приоритет;
/// - иначе `(revenue - prior_year) / prior_year * 100`, если оба операнда
///   распознаны и прошлый год не ноль;
/// - иначе 0.
pub fn enrich(mut table: SalesTable) -> SalesTable {
    for row in &mut table.rows {
        row.period = row.period.trim().to_string();
        row.date = parse_period(&row.period);
        row.quarter = row.date.map(|d| d.month0() / 3 + 1);
    }

    // Стабильная сортировка: строки без даты уходят в конец в исходном порядке
    table.rows.sort_by_key(|row| (row.date.is_none(), row.date));

    for row in &mut table.rows {
        if row.change_pct.is_none() {
            row.change_pct = match (row.revenue, row.prior_year) {
                (Some(revenue), Some(prior)) if prior != 0.0 => {
                    Some((revenue - prior) / prior * 100.0)
                }
                _ => Some(0.0),
            };
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_monthly_sales::aggregate::SalesRow;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(
            parse_period("2024-07"),
            NaiveDate::from_ymd_opt(2024, 7, 1)
        );
        assert_eq!(parse_period("2024-13"), None);
        assert_eq!(parse_period("итого"), None);
        assert_eq!(parse_period(""), None);
    }

    #[test]
    fn test_sorts_by_period_and_fills_change() {
        let table = SalesTable::new(vec![
            SalesRow::raw("2024-03", Some(11_000_000.0), Some(12_800_000.0), None),
            SalesRow::raw("2024-01", Some(12_000_000.0), Some(10_500_000.0), None),
        ]);
        let enriched = enrich(table);

        assert_eq!(enriched.rows[0].period, "2024-01");
        assert_eq!(enriched.rows[1].period, "2024-03");
        assert!(approx(enriched.rows[0].change_pct.unwrap(), 14.285714285714286));
        assert!(approx(enriched.rows[1].change_pct.unwrap(), -14.0625));
        assert_eq!(enriched.rows[0].quarter, Some(1));
        assert_eq!(enriched.rows[1].quarter, Some(1));
    }

    #[test]
    fn test_explicit_change_wins() {
        let table = SalesTable::new(vec![SalesRow::raw(
            "2024-01",
            Some(200.0),
            Some(100.0),
            Some(5.0),
        )]);
        let enriched = enrich(table);
        assert_eq!(enriched.rows[0].change_pct, Some(5.0));
    }

    #[test]
    fn test_zero_prior_year_defaults_to_zero() {
        let table = SalesTable::new(vec![SalesRow::raw(
            "2024-01",
            Some(200.0),
            Some(0.0),
            None,
        )]);
        let enriched = enrich(table);
        assert_eq!(enriched.rows[0].change_pct, Some(0.0));
    }

    #[test]
    fn test_missing_operands_default_to_zero() {
        let table = SalesTable::new(vec![
            SalesRow::raw("2024-01", None, Some(100.0), None),
            SalesRow::raw("2024-02", Some(100.0), None, None),
        ]);
        let enriched = enrich(table);
        assert_eq!(enriched.rows[0].change_pct, Some(0.0));
        assert_eq!(enriched.rows[1].change_pct, Some(0.0));
    }

    #[test]
    fn test_unparseable_period_sorts_last_without_quarter() {
        let table = SalesTable::new(vec![
            SalesRow::raw("итого", Some(1.0), Some(1.0), None),
            SalesRow::raw("2024-02", Some(2.0), Some(1.0), None),
        ]);
        let enriched = enrich(table);
        assert_eq!(enriched.rows[0].period, "2024-02");
        assert_eq!(enriched.rows[1].period, "итого");
        assert_eq!(enriched.rows[1].date, None);
        assert_eq!(enriched.rows[1].quarter, None);
    }

    #[test]
    fn test_periods_are_trimmed() {
        let table = SalesTable::new(vec![SalesRow::raw(
            "  2024-06  ",
            Some(1.0),
            Some(1.0),
            None,
        )]);
        let enriched = enrich(table);
        assert_eq!(enriched.rows[0].period, "2024-06");
        assert_eq!(enriched.rows[0].quarter, Some(2));
    }

    #[test]
    fn test_quarter_derivation() {
        for (month, quarter) in [(1, 1), (3, 1), (4, 2), (7, 3), (10, 4), (12, 4)] {
            let period = format!("2024-{month:02}");
            let table = enrich(SalesTable::new(vec![SalesRow::raw(
                period,
                Some(1.0),
                Some(1.0),
                None,
            )]));
            assert_eq!(table.rows[0].quarter, Some(quarter), "месяц {month}");
        }
    }
}
