use serde_json::{json, Value};

use crate::excel::CellValue;
use crate::utils::dates::format_iso;

// Convert a cell value to its JSON form
pub fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::Null,
        CellValue::Text(s) => json!(s),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 9.0e15 {
                json!(n.trunc() as i64)
            } else {
                json!(n)
            }
        }
        CellValue::Bool(b) => json!(b),
        CellValue::DateTime(dt) => json!(format_iso(dt)),
    }
}
