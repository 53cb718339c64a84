use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// One data row keyed by header label, in column order
pub type Record = IndexMap<String, Value>;

/// A read-back range together with where it came from
#[derive(Debug, Serialize)]
pub struct RangeExport {
    pub sheet: String,
    pub range: String,
    pub records: Vec<Record>,
}
