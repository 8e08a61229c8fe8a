use contracts::dashboards::d401_sales_overview::dto::{TrendChart, TrendMarker};
use leptos::prelude::*;

use crate::shared::number_format::format_axis;

use super::scale::{band_centers, polyline_segments, value_scale, LinearScale};
use super::{plot_range_y, view_box, x_labels, y_grid, MARGIN_LEFT, MARGIN_RIGHT, WIDTH};

fn marker_view(
    marker: &TrendMarker,
    xs: &[f64],
    scale: &LinearScale,
    class: &'static str,
    label: &'static str,
    label_dy: f64,
) -> AnyView {
    let x = xs.get(marker.index).copied().unwrap_or(MARGIN_LEFT);
    let y = scale.apply(marker.value);
    view! {
        <g class=class>
            <circle cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="5"/>
            <text
                class="chart__marker-label"
                x=format!("{:.1}", x)
                y=format!("{:.1}", y + label_dy)
            >
                {label}
            </text>
        </g>
    }
    .into_any()
}

/// Две линии (выручка и прошлый год) с маркерами лучшего и худшего месяца
#[component]
pub fn TrendChartView(chart: TrendChart) -> impl IntoView {
    let values: Vec<f64> = chart
        .points
        .iter()
        .flat_map(|p| [p.revenue, p.prior_year])
        .flatten()
        .collect();
    let (scale, ticks) = value_scale(&values, false, 5, plot_range_y());
    let xs = band_centers(chart.points.len(), MARGIN_LEFT, WIDTH - MARGIN_RIGHT);

    let revenue: Vec<Option<f64>> = chart.points.iter().map(|p| p.revenue).collect();
    let prior: Vec<Option<f64>> = chart.points.iter().map(|p| p.prior_year).collect();
    let periods: Vec<String> = chart.points.iter().map(|p| p.period.clone()).collect();

    let revenue_lines = polyline_segments(&xs, &revenue, &scale);
    let prior_lines = polyline_segments(&xs, &prior, &scale);

    let dots = |series: &[Option<f64>], class: &'static str| -> AnyView {
        xs.iter()
            .zip(series)
            .filter_map(|(x, v)| v.map(|v| (*x, scale.apply(v))))
            .map(|(x, y)| {
                view! {
                    <circle class=class cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="3"/>
                }
            })
            .collect_view()
            .into_any()
    };
    let revenue_dots = dots(&revenue, "chart__dot chart__dot--revenue");
    let prior_dots = dots(&prior, "chart__dot chart__dot--prior");

    let best = chart
        .best
        .as_ref()
        .map(|m| marker_view(m, &xs, &scale, "chart__marker chart__marker--best", "макс", -10.0));
    let worst = chart
        .worst
        .as_ref()
        .map(|m| marker_view(m, &xs, &scale, "chart__marker chart__marker--worst", "мин", 18.0));

    view! {
        <svg class="chart" viewBox=view_box()>
            {y_grid(&ticks, &scale, format_axis)}
            {x_labels(&periods, &xs)}
            {revenue_lines.into_iter().map(|points| view! {
                <polyline class="chart__line chart__line--revenue" points=points/>
            }).collect_view()}
            {prior_lines.into_iter().map(|points| view! {
                <polyline class="chart__line chart__line--prior" points=points/>
            }).collect_view()}
            {revenue_dots}
            {prior_dots}
            {best}
            {worst}
        </svg>
        <div class="chart__legend">
            <span class="chart__legend-item">
                <i class="chart__swatch chart__swatch--revenue"></i>
                " Выручка"
            </span>
            <span class="chart__legend-item">
                <i class="chart__swatch chart__swatch--prior"></i>
                " Прошлый год"
            </span>
        </div>
    }
}
