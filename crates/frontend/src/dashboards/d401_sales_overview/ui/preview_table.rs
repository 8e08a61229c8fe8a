use contracts::domain::a001_monthly_sales::csv_import::{
    COL_CHANGE_PCT, COL_PERIOD, COL_PRIOR_YEAR, COL_REVENUE,
};
use contracts::domain::a001_monthly_sales::SalesTable;
use leptos::prelude::*;

use crate::shared::number_format::{format_number_int, format_pct};

fn money_cell(value: Option<f64>) -> String {
    value.map(format_number_int).unwrap_or_else(|| "–".to_string())
}

fn pct_cell(value: Option<f64>) -> String {
    value.map(format_pct).unwrap_or_else(|| "–".to_string())
}

/// Таблица обогащённых строк. Служебная колонка даты не показывается.
#[component]
pub fn PreviewTable(table: SalesTable) -> impl IntoView {
    view! {
        <div class="preview-table__wrap">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell preview-table__index-col">"#"</th>
                        <th class="table__header-cell">{COL_PERIOD}</th>
                        <th class="table__header-cell table__header-cell--num">{COL_REVENUE}</th>
                        <th class="table__header-cell table__header-cell--num">{COL_PRIOR_YEAR}</th>
                        <th class="table__header-cell table__header-cell--num">{COL_CHANGE_PCT}</th>
                        <th class="table__header-cell table__header-cell--num">"Квартал"</th>
                    </tr>
                </thead>
                <tbody>
                    {table.rows.iter().enumerate().map(|(idx, row)| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell preview-table__index-cell">{idx + 1}</td>
                                <td class="table__cell">{row.period.clone()}</td>
                                <td class="table__cell table__cell--num">{money_cell(row.revenue)}</td>
                                <td class="table__cell table__cell--num">{money_cell(row.prior_year)}</td>
                                <td class="table__cell table__cell--num">{pct_cell(row.change_pct)}</td>
                                <td class="table__cell table__cell--num">
                                    {row.quarter.map(|q| q.to_string()).unwrap_or_else(|| "–".to_string())}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
