//! Страница дашборда: выбор источника, обогащение и четыре графика.
//!
//! Каждое действие пользователя (файл, переключатель, цель) запускает один
//! полный синхронный пересчёт: разбор CSV, обогащение, свёртки, графики.
//! Memo кэширует обогащённую таблицу, пока источник не меняется.

use contracts::dashboards::d401_sales_overview::builder;
use contracts::domain::a001_monthly_sales::{enrich, parse_sales_csv, SalesTable, SAMPLE_CSV};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;

use super::charts::attainment::AttainmentChartView;
use super::charts::quarter_box::QuarterChartView;
use super::charts::trend::TrendChartView;
use super::charts::yoy_bars::YoyChartView;
use super::kpi_cards::KpiCards;
use super::preview_table::PreviewTable;

/// Sales Overview Dashboard component
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Кэш рендера: таблица пересчитывается только при смене источника.
    // None - источник не выбран, Err - структурная ошибка импорта.
    let table = Memo::new(move |_| -> Option<Result<SalesTable, String>> {
        if let Some(upload) = ctx.uploaded.get() {
            Some(
                parse_sales_csv(&upload.bytes)
                    .map(enrich)
                    .map_err(|e| e.to_string()),
            )
        } else if ctx.use_sample.get() {
            Some(
                parse_sales_csv(SAMPLE_CSV.as_bytes())
                    .map(enrich)
                    .map_err(|e| e.to_string()),
            )
        } else {
            None
        }
    });

    let target = Memo::new(move |_| ctx.target());

    view! {
        <div id="d401_sales_overview--dashboard" data-page-category="dashboard" class="d401-root">
            {move || match table.get() {
                None => view! {
                    <div class="info-box">
                        <span class="info-box__icon">"ℹ"</span>
                        <span class="info-box__text">
                            "Загрузите CSV слева или включите пример данных."
                        </span>
                    </div>
                }.into_any(),
                Some(Err(err)) => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("Ошибка обработки данных: {}", err)}
                        </span>
                    </div>
                }.into_any(),
                Some(Ok(table)) => view! {
                    <DashboardContent table=table target=target.get() />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DashboardContent(table: SalesTable, target: f64) -> impl IntoView {
    let kpi = builder::kpi_summary(&table);
    let trend = builder::trend_chart(&table);
    let yoy = builder::yoy_chart(&table);
    let quarters = builder::quarter_chart(&table);
    let attainment = builder::attainment_chart(&table, target);

    view! {
        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="d401-header">
            <div>
                <div class="d401-title">"Обзор продаж"</div>
                <div class="d401-subtitle">
                    {format!("Строк: {}", table.len())}
                </div>
            </div>
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                "d401_sales_overview"
            </Badge>
        </Flex>

        <KpiCards kpi=kpi />

        <div class="chart-grid">
            <section class="chart-panel">
                <div class="chart-panel__title">"1. Динамика выручки (факт и прошлый год)"</div>
                <TrendChartView chart=trend />
            </section>

            <section class="chart-panel">
                <div class="chart-panel__title">"2. Прирост к прошлому году"</div>
                <YoyChartView chart=yoy />
            </section>

            <section class="chart-panel">
                <div class="chart-panel__title">"3. Распределение выручки по кварталам"</div>
                <QuarterChartView chart=quarters />
            </section>

            <section class="chart-panel">
                <div class="chart-panel__title">"4. Достижение цели KPI (линия 100%)"</div>
                <AttainmentChartView chart=attainment />
            </section>
        </div>

        <section class="chart-panel chart-panel--wide">
            <div class="chart-panel__title">"Просмотр данных"</div>
            <PreviewTable table=table />
        </section>
    }
}
