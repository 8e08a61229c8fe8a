//! Импорт CSV в [`SalesTable`].
//!
//! Имена колонок — константы ниже; в файле они сопоставляются без учёта
//! регистра и внешних пробелов. Колонка прироста необязательна: если её нет,
//! значения вычислит `enrich`.

use thiserror::Error;

use super::aggregate::{SalesRow, SalesTable};

/// Метка периода "YYYY-MM"
pub const COL_PERIOD: &str = "Месяц";
/// Выручка за месяц
pub const COL_REVENUE: &str = "Выручка";
/// Выручка за тот же месяц годом ранее
pub const COL_PRIOR_YEAR: &str = "Прошлый год";
/// Прирост к прошлому году, % (необязательная колонка)
pub const COL_CHANGE_PCT: &str = "Прирост %";

/// Встроенный демонстрационный набор: один полный год продаж.
pub const SAMPLE_CSV: &str = "\
Месяц,Выручка,Прошлый год,Прирост %
2024-01,12000000,10500000,14.3
2024-02,13500000,11200000,20.5
2024-03,11000000,12800000,-14.1
2024-04,18000000,15200000,18.4
2024-05,21000000,18500000,13.5
2024-06,22000000,19000000,15.8
2024-07,25000000,20500000,22.0
2024-08,28000000,24500000,14.3
2024-09,24000000,21000000,14.3
2024-10,23000000,20000000,15.0
2024-11,19500000,17500000,11.4
2024-12,17000000,16500000,3.0
";

/// Ошибки импорта, которые показываются пользователю.
///
/// Ошибки приведения отдельных значений сюда не попадают: такие ячейки
/// становятся `None` и дальше обрабатываются правилами обогащения.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("не удалось прочитать CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("в файле нет обязательной колонки «{0}»")]
    MissingColumn(&'static str),
}

/// Разбирает байты CSV-файла в сырую таблицу продаж.
///
/// Структурные проблемы (битый CSV, отсутствие обязательной колонки)
/// возвращаются ошибкой; нечисловые ячейки молча превращаются в `None`.
pub fn parse_sales_csv(bytes: &[u8]) -> Result<SalesTable, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let find = |label: &'static str| {
        headers
            .iter()
            .position(|h| h.trim().to_lowercase() == label.to_lowercase())
    };

    let period_idx = find(COL_PERIOD).ok_or(ImportError::MissingColumn(COL_PERIOD))?;
    let revenue_idx = find(COL_REVENUE).ok_or(ImportError::MissingColumn(COL_REVENUE))?;
    let prior_idx = find(COL_PRIOR_YEAR).ok_or(ImportError::MissingColumn(COL_PRIOR_YEAR))?;
    let change_idx = find(COL_CHANGE_PCT);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(SalesRow::raw(
            record.get(period_idx).unwrap_or_default(),
            parse_number(record.get(revenue_idx)),
            parse_number(record.get(prior_idx)),
            change_idx.and_then(|idx| parse_number(record.get(idx))),
        ));
    }

    Ok(SalesTable::new(rows))
}

/// Мягкое приведение ячейки к числу: пробельные разделители тысяч
/// игнорируются, десятичная запятая допускается.
fn parse_number(cell: Option<&str>) -> Option<f64> {
    let cleaned: String = cell?
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .or_else(|| cleaned.replace(',', ".").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let table = parse_sales_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 12);
        assert_eq!(table.rows[0].period, "2024-01");
        assert_eq!(table.rows[0].revenue, Some(12_000_000.0));
        assert_eq!(table.rows[0].prior_year, Some(10_500_000.0));
        assert_eq!(table.rows[0].change_pct, Some(14.3));
    }

    #[test]
    fn test_headers_case_insensitive_and_trimmed() {
        let csv = "  месяц , ВЫРУЧКА ,Прошлый год\n2024-05,100,50\n";
        let table = parse_sales_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.rows[0].revenue, Some(100.0));
        // колонки прироста нет - значения остаются пустыми
        assert_eq!(table.rows[0].change_pct, None);
    }

    #[test]
    fn test_missing_revenue_column() {
        let csv = "Месяц,Прошлый год\n2024-01,10\n";
        let err = parse_sales_csv(csv.as_bytes()).unwrap_err();
        match err {
            ImportError::MissingColumn(col) => assert_eq!(col, COL_REVENUE),
            other => panic!("ожидалась MissingColumn, получено {other:?}"),
        }
    }

    #[test]
    fn test_bad_cells_become_none() {
        let csv = "Месяц,Выручка,Прошлый год,Прирост %\n2024-01,abc,,xyz\n";
        let table = parse_sales_csv(csv.as_bytes()).unwrap();
        let row = &table.rows[0];
        assert_eq!(row.revenue, None);
        assert_eq!(row.prior_year, None);
        assert_eq!(row.change_pct, None);
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(parse_number(Some("12 000 000")), Some(12_000_000.0));
        assert_eq!(parse_number(Some("14,3")), Some(14.3));
        assert_eq!(parse_number(Some("  -5.5  ")), Some(-5.5));
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(None), None);
    }
}
