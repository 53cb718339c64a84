use std::collections::HashMap;

use crate::excel::CellValue;

/// Turn a header row into JSON keys, one per column.
///
/// Empty headers yield `None` so their column is skipped. Repeated labels get
/// a `_2`, `_3`, ... suffix so no value is silently overwritten.
pub fn extract_header_keys(headers: &[CellValue]) -> Vec<Option<String>> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    headers
        .iter()
        .map(|header| {
            let label = header.to_string();
            if label.is_empty() {
                return None;
            }

            let count = seen.entry(label.clone()).or_insert(0);
            *count += 1;

            if *count == 1 {
                Some(label)
            } else {
                Some(format!("{label}_{count}"))
            }
        })
        .collect()
}
