use leptos::prelude::*;

/// Цель KPI по умолчанию, выручка в месяц
pub const DEFAULT_TARGET: f64 = 20_000_000.0;

/// Загруженный пользователем CSV-файл
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedCsv {
    pub file_name: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

/// Глобальное состояние страницы: источник данных и параметры рендера.
/// Sidebar пишет, дашборд читает.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub uploaded: RwSignal<Option<UploadedCsv>>,
    pub use_sample: RwSignal<bool>,
    pub target_input: RwSignal<String>,
    pub upload_error: RwSignal<Option<String>>,
    pub loading_file: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            uploaded: RwSignal::new(None),
            use_sample: RwSignal::new(true),
            target_input: RwSignal::new(format!("{}", DEFAULT_TARGET as i64)),
            upload_error: RwSignal::new(None),
            loading_file: RwSignal::new(false),
        }
    }

    /// Цель KPI из поля ввода: неотрицательное число, при пустом или
    /// нечисловом вводе значение по умолчанию.
    pub fn target(&self) -> f64 {
        self.target_input
            .get()
            .trim()
            .parse::<f64>()
            .map(|v| v.max(0.0))
            .unwrap_or(DEFAULT_TARGET)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
