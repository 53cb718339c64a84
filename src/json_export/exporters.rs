use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use crate::excel::CellValue;
use crate::json_export::converters::cell_to_json;
use crate::json_export::extractors::extract_header_keys;
use crate::json_export::types::{RangeExport, Record};
use crate::utils::cell_reference;

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

/// Build one record per row, keyed by `headers` column by column.
///
/// Columns without a header are dropped; rows shorter than the header row
/// simply omit the missing keys.
pub fn records_from_range(headers: &[CellValue], rows: &[Vec<CellValue>]) -> Vec<Record> {
    let keys = extract_header_keys(headers);

    rows.iter()
        .map(|row| {
            let mut record = IndexMap::with_capacity(keys.len());

            for (key, value) in keys.iter().zip(row) {
                if let Some(key) = key {
                    record.insert(key.clone(), cell_to_json(value));
                }
            }

            record
        })
        .collect()
}

pub fn export_range(
    sheet: &str,
    start: (u32, u16),
    end: (u32, u16),
    headers: &[CellValue],
    rows: &[Vec<CellValue>],
) -> RangeExport {
    RangeExport {
        sheet: sheet.to_string(),
        range: format!("{}:{}", cell_reference(start), cell_reference(end)),
        records: records_from_range(headers, rows),
    }
}
