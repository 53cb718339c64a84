use std::fs::{self, File};
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx};
use indexmap::IndexMap;
use log::{debug, info};
use rust_xlsxwriter::{Workbook as XlsxWorkbook, Worksheet, XlsxError};

use crate::error::{Error, Result};
use crate::excel::style::{
    validate_number_format, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT, HEADER_COLUMN_WIDTH,
};
use crate::excel::{Cell, CellStyle, CellValue, ColumnRef, Sheet};
use crate::utils::{dates, parse_cell_reference, MAX_COL, MAX_ROW};

/// Largest block `read_range` will materialise
pub const MAX_RANGE_CELLS: u64 = 1 << 22;

/// An in-memory workbook bound to one file path for its whole lifetime.
///
/// Every mutation stays in memory until [`Workbook::save`] overwrites the file.
#[derive(Clone, Debug)]
pub struct Workbook {
    sheets: IndexMap<String, Sheet>,
    file_path: PathBuf,
    is_modified: bool,
}

/// Load the workbook at `path`, or start an empty one if nothing exists there.
pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let file_path = path.as_ref().to_path_buf();

    if !file_path.exists() {
        info!("Creating new workbook '{}'", file_path.display());
        return Ok(Workbook {
            sheets: IndexMap::new(),
            file_path,
            is_modified: false,
        });
    }

    let load_error = |source: calamine::XlsxError| Error::Load {
        path: file_path.clone(),
        source: source.into(),
    };

    // Only xlsx is accepted: save writes xlsx bytes back to the same path
    let mut workbook: Xlsx<BufReader<File>> =
        calamine::open_workbook(&file_path).map_err(load_error)?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = IndexMap::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = workbook.worksheet_range(name).map_err(load_error)?;
        sheets.insert(name.clone(), create_sheet_from_range(name, &range));
    }

    info!(
        "Loaded existing workbook '{}' ({} sheets)",
        file_path.display(),
        sheets.len()
    );

    Ok(Workbook {
        sheets,
        file_path,
        is_modified: false,
    })
}

fn create_sheet_from_range(name: &str, range: &calamine::Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);

    // Ranges start at the first used cell, not at A1
    let Some((start_row, start_col)) = range.start() else {
        return sheet;
    };

    for (row_idx, col_idx, data) in range.used_cells() {
        let value = match data {
            Data::Empty => continue,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(e) => CellValue::Text(e.to_string()),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Number(dt.as_f64())),
            Data::DateTimeIso(s) => dates::parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        };

        let (Ok(row), Ok(col)) = (
            u32::try_from(start_row as usize + row_idx + 1),
            u16::try_from(start_col as usize + col_idx + 1),
        ) else {
            continue;
        };

        sheet.set_cell(row, col, Cell::new(value, CellStyle::Plain));
    }

    sheet
}

fn resolve_address(row: u32, column: &ColumnRef) -> Result<(u32, u16)> {
    if row < 1 || row > MAX_ROW {
        return Err(Error::address(format!("row {row} is outside 1..={MAX_ROW}")));
    }

    Ok((row, column.resolve()?))
}

fn resolve_reference(reference: &str) -> Result<(u32, u16)> {
    parse_cell_reference(reference)
        .ok_or_else(|| Error::address(format!("'{reference}' is not a valid A1 reference")))
}

fn resolve_range_column(column: &ColumnRef, which: &str) -> Result<u16> {
    if let ColumnRef::Index(index) = column {
        if *index < 1 {
            return Err(Error::range(format!(
                "{which} column must be >= 1, got {index}"
            )));
        }
    }

    column
        .resolve()
        .map_err(|e| Error::range(format!("{which} column '{column}': {e}")))
}

impl Workbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        open_workbook(path)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    fn existing_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| Error::UnknownSheet(name.to_string()))
    }

    fn existing_sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| Error::UnknownSheet(name.to_string()))
    }

    /// Create an empty sheet, writing `headers` (if any) as a styled first row.
    ///
    /// Header cells are bold, centered, gray-filled and bordered, and each
    /// header column gets a width of 15.
    pub fn create_sheet(&mut self, name: &str, headers: &[&str]) -> Result<&Sheet> {
        if self.sheets.contains_key(name) {
            return Err(Error::DuplicateSheet(name.to_string()));
        }

        let folded = name.to_lowercase();
        if self.sheets.keys().any(|existing| existing.to_lowercase() == folded) {
            return Err(Error::InvalidSheetName {
                name: name.to_string(),
                reason: "name differs only in case from an existing sheet",
            });
        }

        if let Some(reason) = crate::utils::helpers::sheet_name_problem(name) {
            return Err(Error::InvalidSheetName {
                name: name.to_string(),
                reason,
            });
        }

        if headers.len() > MAX_COL as usize {
            return Err(Error::address(format!(
                "{} headers exceed the {MAX_COL} column limit",
                headers.len()
            )));
        }

        let mut sheet = Sheet::new(name);

        for (col, header) in (1u16..).zip(headers) {
            sheet.set_cell(1, col, Cell::new(CellValue::from(*header), CellStyle::Header));
            sheet.set_column_width(col, HEADER_COLUMN_WIDTH);
        }

        debug!("Created sheet '{name}' with {} headers", headers.len());

        self.is_modified = true;
        self.sheets.insert(name.to_string(), sheet);

        Ok(&self.sheets[name])
    }

    /// Write a block of rows starting at `(start_row, 1)`, bordering every cell.
    pub fn write_range<R, V>(&mut self, sheet_name: &str, rows: R, start_row: u32) -> Result<()>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.existing_sheet(sheet_name)?;

        let rows: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        if start_row < 1 {
            return Err(Error::address(format!("start row {start_row} must be >= 1")));
        }

        let last_row = start_row as u64 + rows.len().saturating_sub(1) as u64;
        if last_row > MAX_ROW as u64 {
            return Err(Error::address(format!(
                "{} rows starting at {start_row} run past row {MAX_ROW}",
                rows.len()
            )));
        }

        if let Some(widest) = rows.iter().map(Vec::len).max() {
            if widest > MAX_COL as usize {
                return Err(Error::address(format!(
                    "a row of {widest} values runs past column {MAX_COL}"
                )));
            }
        }

        if rows.iter().all(Vec::is_empty) {
            return Ok(());
        }

        let sheet = self.existing_sheet_mut(sheet_name)?;
        let row_count = rows.len();

        for (row, values) in (start_row..).zip(rows) {
            for (col, value) in (1u16..).zip(values) {
                sheet.set_cell(row, col, Cell::new(value, CellStyle::Bordered));
            }
        }

        debug!("Wrote {row_count} rows to '{sheet_name}' from row {start_row}");

        self.is_modified = true;
        Ok(())
    }

    /// Set one cell by row and column (index or letters), bordering it.
    pub fn write_cell(
        &mut self,
        sheet_name: &str,
        row: u32,
        column: impl Into<ColumnRef>,
        value: impl Into<CellValue>,
        number_format: Option<&str>,
    ) -> Result<()> {
        self.existing_sheet(sheet_name)?;
        let (row, col) = resolve_address(row, &column.into())?;
        self.store(sheet_name, row, col, value.into(), number_format)
    }

    /// Set one cell addressed by an A1 reference such as `"B2"`.
    pub fn write_cell_by_reference(
        &mut self,
        sheet_name: &str,
        reference: &str,
        value: impl Into<CellValue>,
        number_format: Option<&str>,
    ) -> Result<()> {
        self.existing_sheet(sheet_name)?;
        let (row, col) = resolve_reference(reference)?;
        self.store(sheet_name, row, col, value.into(), number_format)
    }

    fn store(
        &mut self,
        sheet_name: &str,
        row: u32,
        col: u16,
        value: CellValue,
        number_format: Option<&str>,
    ) -> Result<()> {
        // "" means no format
        let number_format = number_format.filter(|format| !format.is_empty());
        if let Some(format) = number_format {
            validate_number_format(format)?;
        }

        let cell = Cell::new(value, CellStyle::Bordered)
            .with_number_format(number_format.map(str::to_string));

        self.existing_sheet_mut(sheet_name)?.set_cell(row, col, cell);
        self.is_modified = true;
        Ok(())
    }

    pub fn read_cell(
        &self,
        sheet_name: &str,
        row: u32,
        column: impl Into<ColumnRef>,
    ) -> Result<CellValue> {
        let sheet = self.existing_sheet(sheet_name)?;
        let (row, col) = resolve_address(row, &column.into())?;
        Ok(sheet.value(row, col))
    }

    pub fn read_cell_by_reference(&self, sheet_name: &str, reference: &str) -> Result<CellValue> {
        let sheet = self.existing_sheet(sheet_name)?;
        let (row, col) = resolve_reference(reference)?;
        Ok(sheet.value(row, col))
    }

    /// Read the inclusive rectangle as row-major values; unset cells are `Empty`.
    pub fn read_range(
        &self,
        sheet_name: &str,
        start_row: u32,
        start_column: impl Into<ColumnRef>,
        end_row: u32,
        end_column: impl Into<ColumnRef>,
    ) -> Result<Vec<Vec<CellValue>>> {
        if start_row < 1 || end_row < 1 {
            return Err(Error::range(format!(
                "rows must be >= 1, got {start_row}..{end_row}"
            )));
        }

        if end_row < start_row {
            return Err(Error::range(format!(
                "end row {end_row} is before start row {start_row}"
            )));
        }

        if end_row > MAX_ROW {
            return Err(Error::range(format!("end row {end_row} is past row {MAX_ROW}")));
        }

        let start_col = resolve_range_column(&start_column.into(), "start")?;
        let end_col = resolve_range_column(&end_column.into(), "end")?;

        if end_col < start_col {
            return Err(Error::range(format!(
                "end column {end_col} is before start column {start_col}"
            )));
        }

        let cell_count = (end_row - start_row + 1) as u64 * (end_col - start_col + 1) as u64;
        if cell_count > MAX_RANGE_CELLS {
            return Err(Error::range(format!(
                "{cell_count} cells exceed the {MAX_RANGE_CELLS} cell limit per read"
            )));
        }

        let sheet = self.existing_sheet(sheet_name)?;
        Ok(sheet.values_in((start_row, start_col), (end_row, end_col)))
    }

    /// Write the whole workbook to its bound path, replacing any existing file.
    pub fn save(&mut self) -> Result<()> {
        let buffer = self
            .to_xlsx_buffer()
            .map_err(|e| self.persist_error(io::Error::other(e.to_string())))?;

        fs::write(&self.file_path, buffer).map_err(|e| self.persist_error(e))?;

        info!("Saved workbook '{}'", self.file_path.display());
        self.is_modified = false;

        Ok(())
    }

    fn persist_error(&self, source: io::Error) -> Error {
        let path = self.file_path.clone();
        if source.kind() == ErrorKind::PermissionDenied {
            Error::PermissionDenied { path, source }
        } else {
            Error::Persist { path, source }
        }
    }

    fn to_xlsx_buffer(&self) -> std::result::Result<Vec<u8>, XlsxError> {
        let mut workbook = XlsxWorkbook::new();

        for sheet in self.sheets.values() {
            let worksheet = workbook.add_worksheet().set_name(&sheet.name)?;

            for (col, width) in sheet.column_widths() {
                worksheet.set_column_width(col - 1, width)?;
            }

            for (row, col, cell) in sheet.cells() {
                write_xlsx_cell(worksheet, row - 1, col - 1, cell)?;
            }
        }

        // The format needs at least one worksheet
        if self.sheets.is_empty() {
            workbook.add_worksheet();
        }

        workbook.save_to_buffer()
    }
}

fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
) -> std::result::Result<(), XlsxError> {
    let number_format = match (&cell.value, cell.number_format.as_deref()) {
        (CellValue::DateTime(dt), None) if dates::has_time(dt) => Some(DEFAULT_DATETIME_FORMAT),
        (CellValue::DateTime(_), None) => Some(DEFAULT_DATE_FORMAT),
        (_, format) => format,
    };
    let format = cell.style.to_format(number_format);

    match &cell.value {
        CellValue::Empty => {
            if cell.style != CellStyle::Plain || number_format.is_some() {
                worksheet.write_blank(row, col, &format)?;
            }
        }
        CellValue::Text(s) => {
            worksheet.write_string_with_format(row, col, s.as_str(), &format)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number_with_format(row, col, *n, &format)?;
        }
        CellValue::Bool(b) => {
            worksheet.write_boolean_with_format(row, col, *b, &format)?;
        }
        CellValue::DateTime(dt) => {
            worksheet.write_datetime_with_format(row, col, dt, &format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_workbook() -> Workbook {
        Workbook {
            sheets: IndexMap::new(),
            file_path: PathBuf::from("unsaved.xlsx"),
            is_modified: false,
        }
    }

    #[test]
    fn create_sheet_writes_styled_headers() {
        let mut wb = new_workbook();
        let sheet = wb.create_sheet("Data", &["ID", "Name", "Value"]).unwrap();

        assert_eq!(sheet.dimensions(), (1, 3));
        let header = sheet.cell(1, 2).unwrap();
        assert_eq!(header.value, CellValue::from("Name"));
        assert_eq!(header.style, CellStyle::Header);
        assert_eq!(sheet.column_width(3), Some(HEADER_COLUMN_WIDTH));
        assert_eq!(sheet.column_width(4), None);
        assert!(wb.is_modified());
    }

    #[test]
    fn duplicate_sheet_is_rejected_without_touching_the_original() {
        let mut wb = new_workbook();
        wb.create_sheet("Data", &["ID"]).unwrap();
        wb.write_cell("Data", 2, 1, 42, None).unwrap();

        let err = wb.create_sheet("Data", &["Other", "Headers"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateSheet(ref name) if name == "Data"));

        assert_eq!(wb.read_cell("Data", 1, 1).unwrap(), CellValue::from("ID"));
        assert_eq!(wb.read_cell("Data", 1, 2).unwrap(), CellValue::Empty);
        assert_eq!(wb.read_cell("Data", 2, 1).unwrap(), CellValue::from(42));
        assert_eq!(wb.sheet_names(), vec!["Data".to_string()]);
    }

    #[test]
    fn sheet_names_are_case_sensitive_and_ordered() {
        let mut wb = new_workbook();
        wb.create_sheet("b", &[]).unwrap();
        wb.create_sheet("a", &[]).unwrap();
        wb.create_sheet("C", &[]).unwrap();
        assert_eq!(wb.sheet_names(), vec!["b", "a", "C"]);
        assert!(wb.has_sheet("C"));
        assert!(!wb.has_sheet("c"));
    }

    #[test]
    fn names_differing_only_in_case_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut wb = new_workbook();
        wb.file_path = dir.path().join("case.xlsx");
        wb.create_sheet("data", &[]).unwrap();

        let err = wb.create_sheet("Data", &["ID"]).unwrap_err();
        assert!(matches!(err, Error::InvalidSheetName { ref name, .. } if name == "Data"));
        assert_eq!(wb.sheet_names(), vec!["data"]);

        wb.save().unwrap();
    }

    #[test]
    fn permission_denied_is_its_own_error() {
        let wb = new_workbook();

        let err = wb.persist_error(io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, Error::PermissionDenied { ref path, .. } if path.as_path() == wb.path()));

        let err = wb.persist_error(io::Error::from(ErrorKind::NotFound));
        assert!(matches!(err, Error::Persist { .. }));
    }

    #[test]
    fn invalid_sheet_names_are_rejected() {
        let mut wb = new_workbook();
        assert!(matches!(
            wb.create_sheet("a:b", &[]),
            Err(Error::InvalidSheetName { .. })
        ));
        assert!(wb.sheet_names().is_empty());
    }

    #[test]
    fn unknown_sheet_is_reported_by_every_cell_operation() {
        let mut wb = new_workbook();
        wb.create_sheet("Data", &[]).unwrap();

        assert!(matches!(wb.write_cell("Nope", 1, 1, 1, None), Err(Error::UnknownSheet(_))));
        assert!(matches!(wb.write_cell("Nope", 0, 0, 1, None), Err(Error::UnknownSheet(_))));
        assert!(matches!(
            wb.write_cell_by_reference("Nope", "A1", 1, None),
            Err(Error::UnknownSheet(_))
        ));
        assert!(matches!(wb.read_cell("Nope", 1, "A"), Err(Error::UnknownSheet(_))));
        assert!(matches!(
            wb.read_cell_by_reference("Nope", "A1"),
            Err(Error::UnknownSheet(_))
        ));
        assert!(matches!(
            wb.write_range("Nope", vec![vec![1]], 1),
            Err(Error::UnknownSheet(_))
        ));
        assert!(matches!(wb.read_range("Nope", 1, 1, 1, 1), Err(Error::UnknownSheet(_))));
        // "data" is not "Data"
        assert!(matches!(wb.read_cell("data", 1, 1), Err(Error::UnknownSheet(_))));
    }

    #[test]
    fn cell_round_trips_through_both_addressing_styles() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();

        wb.write_cell("S", 2, 2, "by index", None).unwrap();
        assert_eq!(wb.read_cell_by_reference("S", "B2").unwrap(), CellValue::from("by index"));

        wb.write_cell_by_reference("S", "C7", 3.25, None).unwrap();
        assert_eq!(wb.read_cell("S", 7, 3).unwrap(), CellValue::from(3.25));
        assert_eq!(wb.read_cell("S", 7, "C").unwrap(), CellValue::from(3.25));

        wb.write_cell("S", 1, "AA", true, None).unwrap();
        assert_eq!(wb.read_cell("S", 1, 27).unwrap(), CellValue::Bool(true));

        assert_eq!(wb.read_cell("S", 100, 100).unwrap(), CellValue::Empty);
    }

    #[test]
    fn writes_apply_a_thin_border() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();
        wb.write_cell("S", 1, 1, 1, None).unwrap();
        wb.write_cell_by_reference("S", "B1", 2, None).unwrap();
        wb.write_range("S", vec![vec![3]], 2).unwrap();

        let sheet = wb.sheet("S").unwrap();
        for (row, col) in [(1, 1), (1, 2), (2, 1)] {
            assert_eq!(sheet.cell(row, col).unwrap().style, CellStyle::Bordered);
        }
    }

    #[test]
    fn bad_addresses_fail_before_any_write() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();
        wb.is_modified = false;

        for result in [
            wb.write_cell("S", 0, 1, 1, None),
            wb.write_cell("S", 1, 0, 1, None),
            wb.write_cell("S", 1, -3, 1, None),
            wb.write_cell("S", 1, "", 1, None),
            wb.write_cell("S", 1, "A1", 1, None),
            wb.write_cell_by_reference("S", "1A", 1, None),
            wb.write_cell_by_reference("S", "A0", 1, None),
            wb.write_range("S", vec![vec![1]], 0),
        ] {
            assert!(matches!(result, Err(Error::InvalidAddress(_))), "{result:?}");
        }

        assert!(matches!(wb.read_cell("S", 0, 1), Err(Error::InvalidAddress(_))));
        assert!(matches!(wb.read_cell_by_reference("S", "ZZZZ1"), Err(Error::InvalidAddress(_))));
        assert_eq!(wb.sheet("S").unwrap().cell_count(), 0);
        assert!(!wb.is_modified());
    }

    #[test]
    fn number_format_is_stored_or_rejected() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();

        wb.write_cell("S", 2, 3, 1000, Some("#,##0")).unwrap();
        let cell = wb.sheet("S").unwrap().cell(2, 3).unwrap();
        assert_eq!(cell.number_format.as_deref(), Some("#,##0"));

        wb.write_cell("S", 3, 3, 7, Some("")).unwrap();
        assert_eq!(wb.sheet("S").unwrap().cell(3, 3).unwrap().number_format, None);

        let err = wb.write_cell_by_reference("S", "D2", 5, Some("\"broken")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
        assert_eq!(wb.read_cell("S", 2, 4).unwrap(), CellValue::Empty);
    }

    #[test]
    fn write_range_then_read_range_returns_the_block() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();

        let block = vec![
            vec![CellValue::from(1), CellValue::from("a"), CellValue::from(true)],
            vec![CellValue::from(2), CellValue::from("b"), CellValue::from(false)],
        ];
        wb.write_range("S", block.clone(), 2).unwrap();

        let read = wb.read_range("S", 2, 1, 3, 3).unwrap();
        assert_eq!(read, block);
        assert_eq!(read.len(), 2);
        assert!(read.iter().all(|row| row.len() == 3));

        assert_eq!(wb.read_range("S", 1, "A", 1, "C").unwrap(), vec![vec![CellValue::Empty; 3]]);
    }

    #[test]
    fn write_range_without_values_changes_nothing() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();
        wb.is_modified = false;

        wb.write_range("S", Vec::<Vec<CellValue>>::new(), 1).unwrap();
        wb.write_range("S", vec![Vec::<CellValue>::new()], 4).unwrap();

        assert!(!wb.is_modified());
        assert_eq!(wb.sheet("S").unwrap().cell_count(), 0);
    }

    #[test]
    fn empty_text_reads_back_as_empty() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();
        wb.write_cell("S", 1, 1, "", None).unwrap();
        wb.write_range("S", vec![vec!["", "x"]], 2).unwrap();

        assert_eq!(wb.read_cell("S", 1, 1).unwrap(), CellValue::Empty);
        assert_eq!(
            wb.read_range("S", 2, 1, 2, 2).unwrap(),
            vec![vec![CellValue::Empty, CellValue::from("x")]]
        );
        // still bordered
        assert_eq!(wb.sheet("S").unwrap().cell(1, 1).unwrap().style, CellStyle::Bordered);
    }

    #[test]
    fn write_range_accepts_ragged_rows() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();
        wb.write_range("S", vec![vec!["x"], vec!["y", "z"]], 1).unwrap();

        assert_eq!(
            wb.read_range("S", 1, 1, 2, 2).unwrap(),
            vec![
                vec![CellValue::from("x"), CellValue::Empty],
                vec![CellValue::from("y"), CellValue::from("z")],
            ]
        );
    }

    #[test]
    fn inverted_or_non_positive_ranges_are_invalid() {
        let mut wb = new_workbook();
        wb.create_sheet("S", &[]).unwrap();

        for result in [
            wb.read_range("S", 3, 1, 2, 1),
            wb.read_range("S", 1, "C", 1, "A"),
            wb.read_range("S", 0, 1, 1, 1),
            wb.read_range("S", 1, 0, 1, 1),
            wb.read_range("S", 1, 1, 1, -1),
            wb.read_range("S", 1, "1", 1, "B"),
            // bounds are checked before the sheet
            wb.read_range("Missing", 5, 1, 4, 1),
            // too many cells to materialise
            wb.read_range("S", 1, 1, MAX_ROW, MAX_COL as i64),
        ] {
            assert!(matches!(result, Err(Error::InvalidRange(_))), "{result:?}");
        }
    }

    #[test]
    fn data_scenario_reads_back_as_one_block() {
        let mut wb = new_workbook();
        wb.create_sheet("Data", &["ID", "Name", "Value"]).unwrap();
        wb.write_cell("Data", 2, 1, 1, None).unwrap();
        wb.write_cell("Data", 2, "B", "X", None).unwrap();
        wb.write_cell("Data", 2, 3, 1000, Some("#,##0")).unwrap();
        wb.write_cell_by_reference("Data", "A3", 2, None).unwrap();
        wb.write_cell_by_reference("Data", "B3", "Y", None).unwrap();
        wb.write_cell_by_reference("Data", "C3", 2000, None).unwrap();

        assert_eq!(
            wb.read_range("Data", 2, "A", 3, "C").unwrap(),
            vec![
                vec![CellValue::from(1), CellValue::from("X"), CellValue::from(1000)],
                vec![CellValue::from(2), CellValue::from("Y"), CellValue::from(2000)],
            ]
        );
    }
}
