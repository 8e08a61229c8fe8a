use contracts::dashboards::d401_sales_overview::dto::QuarterChart;
use leptos::prelude::*;

use crate::shared::number_format::format_axis;

use super::scale::{band_centers, value_scale};
use super::{plot_range_y, view_box, x_labels, y_grid, MARGIN_LEFT, MARGIN_RIGHT, WIDTH};

const BOX_WIDTH: f64 = 48.0;

/// Box plot выручки по кварталам, рядом с каждым ящиком все точки квартала
#[component]
pub fn QuarterChartView(chart: QuarterChart) -> impl IntoView {
    let values: Vec<f64> = chart
        .boxes
        .iter()
        .flat_map(|b| b.points.iter().copied())
        .collect();
    let (scale, ticks) = value_scale(&values, false, 5, plot_range_y());
    let xs = band_centers(chart.boxes.len(), MARGIN_LEFT, WIDTH - MARGIN_RIGHT);
    let labels: Vec<String> = chart
        .boxes
        .iter()
        .map(|b| format!("Кв. {}", b.quarter))
        .collect();

    view! {
        <svg class="chart" viewBox=view_box()>
            {y_grid(&ticks, &scale, format_axis)}
            {x_labels(&labels, &xs)}
            {chart.boxes.iter().zip(&xs).map(|(qbox, x)| {
                let top = scale.apply(qbox.q3);
                let bottom = scale.apply(qbox.q1);
                let median_y = scale.apply(qbox.median);
                let upper_y = scale.apply(qbox.upper_whisker);
                let lower_y = scale.apply(qbox.lower_whisker);
                let half = BOX_WIDTH / 2.0;

                view! {
                    <g class="chart__box">
                        // усы
                        <line x1=format!("{:.1}", x) y1=format!("{:.1}", upper_y)
                              x2=format!("{:.1}", x) y2=format!("{:.1}", top)/>
                        <line x1=format!("{:.1}", x) y1=format!("{:.1}", bottom)
                              x2=format!("{:.1}", x) y2=format!("{:.1}", lower_y)/>
                        <line x1=format!("{:.1}", x - half / 2.0) y1=format!("{:.1}", upper_y)
                              x2=format!("{:.1}", x + half / 2.0) y2=format!("{:.1}", upper_y)/>
                        <line x1=format!("{:.1}", x - half / 2.0) y1=format!("{:.1}", lower_y)
                              x2=format!("{:.1}", x + half / 2.0) y2=format!("{:.1}", lower_y)/>
                        // межквартильный ящик и медиана
                        <rect
                            class="chart__box-rect"
                            x=format!("{:.1}", x - half)
                            y=format!("{:.1}", top)
                            width=format!("{:.1}", BOX_WIDTH)
                            height=format!("{:.1}", (bottom - top).max(1.0))
                        />
                        <line class="chart__box-median"
                              x1=format!("{:.1}", x - half) y1=format!("{:.1}", median_y)
                              x2=format!("{:.1}", x + half) y2=format!("{:.1}", median_y)/>
                        // исходные точки рядом с ящиком
                        {qbox.points.iter().enumerate().map(|(i, value)| {
                            let jitter = ((i % 5) as f64 - 2.0) * 3.0;
                            view! {
                                <circle
                                    class="chart__box-point"
                                    cx=format!("{:.1}", x + half + 14.0 + jitter)
                                    cy=format!("{:.1}", scale.apply(*value))
                                    r="3"
                                />
                            }
                        }).collect_view()}
                    </g>
                }
            }).collect_view()}
        </svg>
    }
}
