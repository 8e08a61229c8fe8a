use contracts::dashboards::d401_sales_overview::dto::{KpiSummary, MonthHighlight};
use leptos::prelude::*;

use crate::shared::number_format::{format_number_int, format_pct};

fn highlight_text(highlight: Option<MonthHighlight>) -> String {
    match highlight {
        Some(m) => format!("{} · {} ₽", m.period, format_number_int(m.revenue)),
        None => "нет данных".to_string(),
    }
}

/// Четыре сводные карточки над графиками
#[component]
pub fn KpiCards(kpi: KpiSummary) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            <div class="kpi-card">
                <div class="kpi-card__label">"Выручка за период"</div>
                <div class="kpi-card__value">
                    {format!("{} ₽", format_number_int(kpi.total_revenue))}
                </div>
            </div>
            <div class="kpi-card">
                <div class="kpi-card__label">"Средний прирост"</div>
                <div class="kpi-card__value">{format_pct(kpi.avg_change_pct)}</div>
            </div>
            <div class="kpi-card">
                <div class="kpi-card__label">"Лучший месяц"</div>
                <div class="kpi-card__value kpi-card__value--small">
                    {highlight_text(kpi.best_month)}
                </div>
            </div>
            <div class="kpi-card">
                <div class="kpi-card__label">"Худший месяц"</div>
                <div class="kpi-card__value kpi-card__value--small">
                    {highlight_text(kpi.worst_month)}
                </div>
            </div>
        </div>
    }
}
