use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::excel::style::CellStyle;
use crate::utils::{col_name_to_index, dates, MAX_COL};

/// A value stored in a cell
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Empty text becomes `Empty`; a saved file cannot tell the two apart.
    pub fn normalized(self) -> Self {
        match self {
            CellValue::Text(s) if s.is_empty() => CellValue::Empty,
            other => other,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::DateTime(dt) => f.write_str(&dates::format_datetime(dt)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::DateTime(value.and_time(NaiveTime::MIN))
    }
}

/// A column given either as a 1-based index or as letters (`"B"`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnRef {
    Index(i64),
    Letters(String),
}

impl ColumnRef {
    /// Resolve to a 1-based column index within the worksheet limits.
    pub fn resolve(&self) -> Result<u16> {
        match self {
            ColumnRef::Index(index) => {
                if *index < 1 || *index > MAX_COL as i64 {
                    return Err(Error::address(format!(
                        "column {index} is outside 1..={MAX_COL}"
                    )));
                }
                Ok(*index as u16)
            }
            ColumnRef::Letters(letters) => col_name_to_index(letters.trim())
                .ok_or_else(|| Error::address(format!("column '{letters}' is not valid"))),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Index(index) => write!(f, "{index}"),
            ColumnRef::Letters(letters) => f.write_str(letters),
        }
    }
}

impl From<i32> for ColumnRef {
    fn from(value: i32) -> Self {
        ColumnRef::Index(value as i64)
    }
}

impl From<i64> for ColumnRef {
    fn from(value: i64) -> Self {
        ColumnRef::Index(value)
    }
}

impl From<u16> for ColumnRef {
    fn from(value: u16) -> Self {
        ColumnRef::Index(value as i64)
    }
}

impl From<u32> for ColumnRef {
    fn from(value: u32) -> Self {
        ColumnRef::Index(value as i64)
    }
}

impl From<usize> for ColumnRef {
    fn from(value: usize) -> Self {
        ColumnRef::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ColumnRef {
    fn from(value: &str) -> Self {
        ColumnRef::Letters(value.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(value: String) -> Self {
        ColumnRef::Letters(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
    pub number_format: Option<String>,
}

impl Cell {
    pub fn new(value: CellValue, style: CellStyle) -> Self {
        Self {
            value: value.normalized(),
            style,
            number_format: None,
        }
    }

    pub fn with_number_format(mut self, number_format: Option<String>) -> Self {
        self.number_format = number_format;
        self
    }
}
