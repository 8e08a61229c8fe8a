//! SVG-графики дашборда. Геометрия считается чистыми функциями из
//! `scale`, компоненты только раскладывают готовые координаты в разметку.

pub mod attainment;
pub mod quarter_box;
pub mod scale;
pub mod trend;
pub mod yoy_bars;

use leptos::prelude::*;

use scale::LinearScale;

pub(crate) const WIDTH: f64 = 640.0;
pub(crate) const HEIGHT: f64 = 280.0;
pub(crate) const MARGIN_LEFT: f64 = 64.0;
pub(crate) const MARGIN_RIGHT: f64 = 16.0;
pub(crate) const MARGIN_TOP: f64 = 16.0;
pub(crate) const MARGIN_BOTTOM: f64 = 32.0;

/// Вертикальный диапазон области построения (низ, верх) в координатах SVG
pub(crate) fn plot_range_y() -> (f64, f64) {
    (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP)
}

pub(crate) fn view_box() -> String {
    format!("0 0 {} {}", WIDTH, HEIGHT)
}

/// Горизонтальные линии сетки с подписями слева
pub(crate) fn y_grid(ticks: &[f64], scale: &LinearScale, format: fn(f64) -> String) -> AnyView {
    ticks
        .iter()
        .map(|tick| {
            let y = scale.apply(*tick);
            view! {
                <g class="chart__tick">
                    <line
                        class="chart__grid-line"
                        x1=format!("{:.1}", MARGIN_LEFT)
                        y1=format!("{:.1}", y)
                        x2=format!("{:.1}", WIDTH - MARGIN_RIGHT)
                        y2=format!("{:.1}", y)
                    />
                    <text
                        class="chart__tick-label chart__tick-label--y"
                        x=format!("{:.1}", MARGIN_LEFT - 6.0)
                        y=format!("{:.1}", y + 3.0)
                    >
                        {format(*tick)}
                    </text>
                </g>
            }
        })
        .collect_view()
        .into_any()
}

/// Подписи категорий по оси X; при большом числе периодов прореживаются
pub(crate) fn x_labels(labels: &[String], xs: &[f64]) -> AnyView {
    let step = (labels.len() / 12).max(1);
    labels
        .iter()
        .zip(xs)
        .enumerate()
        .filter(move |(i, _)| i % step == 0)
        .map(|(_, (label, x))| {
            view! {
                <text
                    class="chart__tick-label chart__tick-label--x"
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", HEIGHT - 10.0)
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view()
        .into_any()
}
