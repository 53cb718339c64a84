mod converters;
mod exporters;
mod extractors;
mod types;

pub use converters::cell_to_json;
pub use exporters::{export_range, records_from_range, serialize_to_json};
pub use types::{RangeExport, Record};
