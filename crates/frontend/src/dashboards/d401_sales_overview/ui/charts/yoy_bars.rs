use contracts::dashboards::d401_sales_overview::dto::YoyChart;
use leptos::prelude::*;

use crate::shared::number_format::format_number_with_decimals;

use super::scale::{band_centers, value_scale};
use super::{plot_range_y, view_box, x_labels, y_grid, MARGIN_LEFT, MARGIN_RIGHT, WIDTH};

/// Столбики прироста: цвет задаётся знаком значения через CSS-классы
#[component]
pub fn YoyChartView(chart: YoyChart) -> impl IntoView {
    let values: Vec<f64> = chart.bars.iter().map(|b| b.change_pct).collect();
    // ноль всегда в домене, от него растут столбики
    let (scale, ticks) = value_scale(&values, true, 5, plot_range_y());
    let xs = band_centers(chart.bars.len(), MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
    let periods: Vec<String> = chart.bars.iter().map(|b| b.period.clone()).collect();

    let band = if chart.bars.is_empty() {
        0.0
    } else {
        (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / chart.bars.len() as f64
    };
    let bar_width = (band * 0.6).min(40.0);
    let zero_y = scale.apply(0.0);

    view! {
        <svg class="chart" viewBox=view_box()>
            {y_grid(&ticks, &scale, |v| format_number_with_decimals(v, 0))}
            {x_labels(&periods, &xs)}
            {chart.bars.iter().zip(&xs).map(|(bar, x)| {
                let value_y = scale.apply(bar.change_pct);
                let (y, height) = if bar.change_pct >= 0.0 {
                    (value_y, zero_y - value_y)
                } else {
                    (zero_y, value_y - zero_y)
                };
                let class = if bar.change_pct >= 0.0 {
                    "chart__bar chart__bar--positive"
                } else {
                    "chart__bar chart__bar--negative"
                };
                view! {
                    <rect
                        class=class
                        x=format!("{:.1}", x - bar_width / 2.0)
                        y=format!("{:.1}", y)
                        width=format!("{:.1}", bar_width)
                        height=format!("{:.1}", height.max(0.5))
                    />
                }
            }).collect_view()}
            <line
                class="chart__zero-line"
                x1=format!("{:.1}", MARGIN_LEFT)
                y1=format!("{:.1}", zero_y)
                x2=format!("{:.1}", WIDTH - MARGIN_RIGHT)
                y2=format!("{:.1}", zero_y)
            />
        </svg>
    }
}
