//! The fixed demonstration sequence run by the command-line tool.

use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::excel::{open_workbook, CellValue};

pub const DEMO_HEADERS: [&str; 3] = ["ID", "Name", "Value"];
pub const AMOUNT_FORMAT: &str = "#,##0";

/// What the demo read back before saving
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub sheet: String,
    pub created_file: bool,
    pub first_id: CellValue,
    pub first_name: CellValue,
    pub headers: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Create `sheet`, fill two rows using every addressing style, read them back and save.
pub fn run_demo(path: &Path, sheet: &str) -> Result<DemoReport> {
    let created_file = !path.exists();
    let mut workbook = open_workbook(path)?;

    workbook.create_sheet(sheet, &DEMO_HEADERS)?;

    // row/column, column letters, and a number format
    workbook.write_cell(sheet, 2, 1, 1, None)?;
    workbook.write_cell(sheet, 2, "B", "Sample 1", None)?;
    workbook.write_cell(sheet, 2, 3, 1000, Some(AMOUNT_FORMAT))?;

    // A1 references
    workbook.write_cell_by_reference(sheet, "A3", 2, None)?;
    workbook.write_cell_by_reference(sheet, "B3", "Sample 2", None)?;
    workbook.write_cell_by_reference(sheet, "C3", 2000, Some(AMOUNT_FORMAT))?;

    let first_id = workbook.read_cell(sheet, 2, 1)?;
    let first_name = workbook.read_cell_by_reference(sheet, "B2")?;
    let headers = workbook
        .read_range(sheet, 1, "A", 1, "C")?
        .into_iter()
        .next()
        .unwrap_or_default();
    let rows = workbook.read_range(sheet, 2, "A", 3, "C")?;

    debug!("Demo read back {} rows from '{sheet}'", rows.len());

    workbook.save()?;

    Ok(DemoReport {
        sheet: sheet.to_string(),
        created_file,
        first_id,
        first_name,
        headers,
        rows,
    })
}
