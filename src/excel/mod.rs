mod cell;
mod sheet;
pub mod style;
mod workbook;

pub use cell::{Cell, CellValue, ColumnRef};
pub use sheet::Sheet;
pub use style::CellStyle;
pub use workbook::{open_workbook, Workbook};
