use serde::{Deserialize, Serialize};

/// Сводные показатели по обогащённой таблице
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Сумма выручки по всем месяцам
    pub total_revenue: f64,
    /// Средний прирост к прошлому году, %
    pub avg_change_pct: f64,
    /// Месяц с максимальной выручкой
    pub best_month: Option<MonthHighlight>,
    /// Месяц с минимальной выручкой
    pub worst_month: Option<MonthHighlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthHighlight {
    pub period: String,
    pub revenue: f64,
}

/// График 1: динамика выручки против прошлого года
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChart {
    pub points: Vec<TrendPoint>,
    pub best: Option<TrendMarker>,
    pub worst: Option<TrendMarker>,
}

/// Точка тренда; `None` означает разрыв линии, а не ноль
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub revenue: Option<f64>,
    pub prior_year: Option<f64>,
}

/// Одиночный маркер на линии выручки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendMarker {
    /// Индекс точки в `points`
    pub index: usize,
    pub period: String,
    pub value: f64,
}

/// График 2: столбики прироста к прошлому году
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoyChart {
    pub bars: Vec<YoyBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoyBar {
    pub period: String,
    pub change_pct: f64,
}

/// График 3: распределение выручки по кварталам (box plot с точками)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterChart {
    pub boxes: Vec<QuarterBox>,
}

/// Статистика одного квартала: квартили и усы по Тьюки (1.5 IQR,
/// прижаты к фактическим точкам), плюс все исходные значения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterBox {
    pub quarter: u32,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub points: Vec<f64>,
}

/// График 4: достижение цели KPI по месяцам, опорная линия 100%
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttainmentChart {
    pub points: Vec<AttainmentPoint>,
    /// Фактически использованная цель (ноль заменяется единицей)
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttainmentPoint {
    pub period: String,
    pub rate: Option<f64>,
}
