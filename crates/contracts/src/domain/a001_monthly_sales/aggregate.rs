use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Одна строка месячных продаж.
///
/// Числовые поля храним как `Option<f64>`: `None` означает, что значение
/// отсутствовало в файле или не распозналось при импорте. После обогащения
/// (`enrich`) поле `change_pct` заполнено всегда.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    /// Метка периода в формате "YYYY-MM" (как пришла из файла, после trim)
    pub period: String,
    /// Выручка за месяц
    pub revenue: Option<f64>,
    /// Выручка за тот же месяц прошлого года
    pub prior_year: Option<f64>,
    /// Прирост к прошлому году, %
    pub change_pct: Option<f64>,
    /// Разобранная дата периода (первое число месяца), ключ сортировки
    pub date: Option<NaiveDate>,
    /// Квартал 1..=4, выводится из даты
    pub quarter: Option<u32>,
}

impl SalesRow {
    /// Сырая строка сразу после импорта: производные поля ещё не заполнены.
    pub fn raw(
        period: impl Into<String>,
        revenue: Option<f64>,
        prior_year: Option<f64>,
        change_pct: Option<f64>,
    ) -> Self {
        Self {
            period: period.into(),
            revenue,
            prior_year,
            change_pct,
            date: None,
            quarter: None,
        }
    }
}

/// Таблица месячных продаж, единственная сущность приложения.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTable {
    pub rows: Vec<SalesRow>,
}

impl SalesTable {
    pub fn new(rows: Vec<SalesRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
