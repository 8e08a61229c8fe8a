pub mod d401_sales_overview;

pub use d401_sales_overview::ui::SalesOverviewDashboard;
