//! Построители данных дашборда: чистые свёртки обогащённой таблицы в
//! сериализуемые наборы для четырёх графиков и KPI-карточек.

use crate::domain::a001_monthly_sales::SalesTable;

use super::dto::*;

/// Сводные показатели. Строки без распознанной выручки пропускаются;
/// при равенстве максимума или минимума побеждает более ранний месяц.
pub fn kpi_summary(table: &SalesTable) -> KpiSummary {
    let total_revenue: f64 = table.rows.iter().filter_map(|r| r.revenue).sum();

    let changes: Vec<f64> = table.rows.iter().filter_map(|r| r.change_pct).collect();
    let avg_change_pct = if changes.is_empty() {
        0.0
    } else {
        changes.iter().sum::<f64>() / changes.len() as f64
    };

    let mut best: Option<MonthHighlight> = None;
    let mut worst: Option<MonthHighlight> = None;
    for row in &table.rows {
        let Some(revenue) = row.revenue else { continue };
        if best.as_ref().map_or(true, |b| revenue > b.revenue) {
            best = Some(MonthHighlight {
                period: row.period.clone(),
                revenue,
            });
        }
        if worst.as_ref().map_or(true, |w| revenue < w.revenue) {
            worst = Some(MonthHighlight {
                period: row.period.clone(),
                revenue,
            });
        }
    }

    KpiSummary {
        total_revenue,
        avg_change_pct,
        best_month: best,
        worst_month: worst,
    }
}

/// График 1: обе линии плюс маркеры лучшего и худшего месяца.
pub fn trend_chart(table: &SalesTable) -> TrendChart {
    let points: Vec<TrendPoint> = table
        .rows
        .iter()
        .map(|row| TrendPoint {
            period: row.period.clone(),
            revenue: row.revenue,
            prior_year: row.prior_year,
        })
        .collect();

    let mut best: Option<TrendMarker> = None;
    let mut worst: Option<TrendMarker> = None;
    for (index, point) in points.iter().enumerate() {
        let Some(value) = point.revenue else { continue };
        if best.as_ref().map_or(true, |b| value > b.value) {
            best = Some(TrendMarker {
                index,
                period: point.period.clone(),
                value,
            });
        }
        if worst.as_ref().map_or(true, |w| value < w.value) {
            worst = Some(TrendMarker {
                index,
                period: point.period.clone(),
                value,
            });
        }
    }

    TrendChart { points, best, worst }
}

/// График 2: прирост по месяцам. После обогащения прирост есть у каждой
/// строки, но на всякий случай пустые значения рисуем нулём.
pub fn yoy_chart(table: &SalesTable) -> YoyChart {
    YoyChart {
        bars: table
            .rows
            .iter()
            .map(|row| YoyBar {
                period: row.period.clone(),
                change_pct: row.change_pct.unwrap_or(0.0),
            })
            .collect(),
    }
}

/// График 3: box plot выручки по кварталам. Строки без квартала или без
/// выручки в распределение не попадают.
pub fn quarter_chart(table: &SalesTable) -> QuarterChart {
    let mut boxes = Vec::new();
    for quarter in 1..=4u32 {
        let mut points: Vec<f64> = table
            .rows
            .iter()
            .filter(|r| r.quarter == Some(quarter))
            .filter_map(|r| r.revenue)
            .collect();
        if points.is_empty() {
            continue;
        }
        points.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile(&points, 0.25);
        let median = quantile(&points, 0.5);
        let q3 = quantile(&points, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        // Усы: крайние фактические точки внутри полуторного IQR
        let lower_whisker = points
            .iter()
            .copied()
            .find(|v| *v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = points
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_fence)
            .unwrap_or(q3);

        boxes.push(QuarterBox {
            quarter,
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            points,
        });
    }
    QuarterChart { boxes }
}

/// График 4: достижение цели. Нулевая цель заменяется единицей, чтобы не
/// делить на ноль.
pub fn attainment_chart(table: &SalesTable, target: f64) -> AttainmentChart {
    let divisor = if target == 0.0 { 1.0 } else { target };
    AttainmentChart {
        points: table
            .rows
            .iter()
            .map(|row| AttainmentPoint {
                period: row.period.clone(),
                rate: row.revenue.map(|r| r / divisor * 100.0),
            })
            .collect(),
        target: divisor,
    }
}

/// Квантиль с линейной интерполяцией между порядковыми статистиками.
/// Ожидает отсортированный непустой срез.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_monthly_sales::{enrich, parse_sales_csv, SalesRow, SAMPLE_CSV};

    fn sample_table() -> SalesTable {
        enrich(parse_sales_csv(SAMPLE_CSV.as_bytes()).unwrap())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_kpi_summary_on_sample() {
        let kpi = kpi_summary(&sample_table());
        assert!(approx(kpi.total_revenue, 234_000_000.0));
        let best = kpi.best_month.unwrap();
        assert_eq!(best.period, "2024-08");
        assert!(approx(best.revenue, 28_000_000.0));
        let worst = kpi.worst_month.unwrap();
        assert_eq!(worst.period, "2024-03");
    }

    #[test]
    fn test_kpi_tie_takes_earlier_month() {
        let table = enrich(SalesTable::new(vec![
            SalesRow::raw("2024-02", Some(100.0), Some(1.0), None),
            SalesRow::raw("2024-01", Some(100.0), Some(1.0), None),
        ]));
        let kpi = kpi_summary(&table);
        // после сортировки первым идёт январь, он и побеждает при равенстве
        assert_eq!(kpi.best_month.unwrap().period, "2024-01");
        assert_eq!(kpi.worst_month.unwrap().period, "2024-01");
    }

    #[test]
    fn test_kpi_empty_table() {
        let kpi = kpi_summary(&SalesTable::default());
        assert_eq!(kpi.total_revenue, 0.0);
        assert_eq!(kpi.avg_change_pct, 0.0);
        assert!(kpi.best_month.is_none());
        assert!(kpi.worst_month.is_none());
    }

    #[test]
    fn test_trend_markers() {
        let chart = trend_chart(&sample_table());
        assert_eq!(chart.points.len(), 12);
        let best = chart.best.unwrap();
        assert_eq!(best.period, "2024-08");
        assert_eq!(best.index, 7);
        let worst = chart.worst.unwrap();
        assert_eq!(worst.period, "2024-03");
        assert_eq!(worst.index, 2);
    }

    #[test]
    fn test_yoy_bars_follow_change() {
        let chart = yoy_chart(&sample_table());
        assert_eq!(chart.bars.len(), 12);
        assert!(approx(chart.bars[0].change_pct, 14.3));
        assert!(chart.bars[2].change_pct < 0.0);
    }

    #[test]
    fn test_quarter_chart_on_sample() {
        let chart = quarter_chart(&sample_table());
        assert_eq!(chart.boxes.len(), 4);
        let q1 = &chart.boxes[0];
        assert_eq!(q1.quarter, 1);
        assert_eq!(q1.points.len(), 3);
        // точки отсортированы, медиана совпадает со средней точкой
        assert!(approx(q1.median, 12_000_000.0));
        assert!(q1.lower_whisker <= q1.q1 && q1.q3 <= q1.upper_whisker);
    }

    #[test]
    fn test_quantile_interpolation() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(quantile(&data, 0.25), 1.75));
        assert!(approx(quantile(&data, 0.5), 2.5));
        assert!(approx(quantile(&data, 0.75), 3.25));
        assert!(approx(quantile(&[7.0], 0.5), 7.0));
    }

    #[test]
    fn test_whiskers_clamped_to_points() {
        let table = enrich(SalesTable::new(vec![
            SalesRow::raw("2024-01", Some(10.0), Some(1.0), None),
            SalesRow::raw("2024-01", Some(11.0), Some(1.0), None),
            SalesRow::raw("2024-02", Some(12.0), Some(1.0), None),
            SalesRow::raw("2024-02", Some(13.0), Some(1.0), None),
            SalesRow::raw("2024-03", Some(1000.0), Some(1.0), None),
        ]));
        let chart = quarter_chart(&table);
        let q1 = &chart.boxes[0];
        // q1 = 11, q3 = 13, полуторный IQR заканчивается на 16:
        // выброс 1000 ус не растягивает
        assert_eq!(q1.upper_whisker, 13.0);
        assert_eq!(q1.lower_whisker, 10.0);
        assert_eq!(q1.points.len(), 5);
    }

    #[test]
    fn test_attainment_rate() {
        let table = enrich(SalesTable::new(vec![SalesRow::raw(
            "2024-01",
            Some(22_000_000.0),
            Some(1.0),
            None,
        )]));
        let chart = attainment_chart(&table, 20_000_000.0);
        assert!(approx(chart.points[0].rate.unwrap(), 110.0));
    }

    #[test]
    fn test_attainment_zero_target_uses_unit_divisor() {
        let table = enrich(SalesTable::new(vec![SalesRow::raw(
            "2024-01",
            Some(50.0),
            Some(1.0),
            None,
        )]));
        let chart = attainment_chart(&table, 0.0);
        assert_eq!(chart.target, 1.0);
        assert!(approx(chart.points[0].rate.unwrap(), 5000.0));
    }
}
