pub mod charts;
mod dashboard;
mod kpi_cards;
mod preview_table;

pub use dashboard::SalesOverviewDashboard;
