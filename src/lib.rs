pub mod demo;
pub mod error;
pub mod excel;
pub mod json_export;
pub mod utils;

pub use error::{Error, Result};
pub use excel::{open_workbook, CellValue, ColumnRef, Workbook};
