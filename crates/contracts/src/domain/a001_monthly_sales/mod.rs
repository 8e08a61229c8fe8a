pub mod aggregate;
pub mod csv_import;
pub mod enrich;

pub use aggregate::{SalesRow, SalesTable};
pub use csv_import::{parse_sales_csv, ImportError, SAMPLE_CSV};
pub use enrich::enrich;
