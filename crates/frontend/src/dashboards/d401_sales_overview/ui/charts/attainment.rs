use contracts::dashboards::d401_sales_overview::dto::AttainmentChart;
use leptos::prelude::*;

use crate::shared::number_format::format_number_with_decimals;

use super::scale::{band_centers, polyline_segments, value_scale};
use super::{plot_range_y, view_box, x_labels, y_grid, MARGIN_LEFT, MARGIN_RIGHT, WIDTH};

/// Достижение цели KPI по месяцам с опорной линией на 100%
#[component]
pub fn AttainmentChartView(chart: AttainmentChart) -> impl IntoView {
    // опорная линия всегда попадает в домен шкалы
    let mut values: Vec<f64> = chart.points.iter().filter_map(|p| p.rate).collect();
    values.push(100.0);
    let (scale, ticks) = value_scale(&values, false, 5, plot_range_y());
    let xs = band_centers(chart.points.len(), MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
    let periods: Vec<String> = chart.points.iter().map(|p| p.period.clone()).collect();

    let rates: Vec<Option<f64>> = chart.points.iter().map(|p| p.rate).collect();
    let lines = polyline_segments(&xs, &rates, &scale);
    let reference_y = scale.apply(100.0);

    view! {
        <svg class="chart" viewBox=view_box()>
            {y_grid(&ticks, &scale, |v| format_number_with_decimals(v, 0))}
            {x_labels(&periods, &xs)}
            <line
                class="chart__ref-line"
                x1=format!("{:.1}", MARGIN_LEFT)
                y1=format!("{:.1}", reference_y)
                x2=format!("{:.1}", WIDTH - MARGIN_RIGHT)
                y2=format!("{:.1}", reference_y)
            />
            <text
                class="chart__ref-label"
                x=format!("{:.1}", MARGIN_LEFT + 4.0)
                y=format!("{:.1}", reference_y - 5.0)
            >
                "Цель 100%"
            </text>
            {lines.into_iter().map(|points| view! {
                <polyline class="chart__line chart__line--rate" points=points/>
            }).collect_view()}
            {xs.iter().zip(&rates).filter_map(|(x, v)| v.map(|v| (*x, scale.apply(v)))).map(|(x, y)| {
                view! {
                    <circle class="chart__dot chart__dot--rate" cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="3"/>
                }
            }).collect_view()}
        </svg>
    }
}
