use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

use crate::error::{Error, Result};

/// Display width given to every header column
pub const HEADER_COLUMN_WIDTH: f64 = 15.0;

/// Header fill color (light gray)
pub const HEADER_FILL: u32 = 0xCCCCCC;

pub const DEFAULT_DATE_FORMAT: &str = "yyyy-mm-dd";
pub const DEFAULT_DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

const MAX_FORMAT_LEN: usize = 255;
const MAX_FORMAT_SECTIONS: usize = 4;

/// The fixed visual styles a cell can carry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellStyle {
    /// No styling; cells loaded from an existing file start here
    #[default]
    Plain,
    /// Thin border on all four sides
    Bordered,
    /// Bordered, bold, centered, gray fill
    Header,
}

impl CellStyle {
    /// Build the writer format for this style, optionally with a number format.
    pub fn to_format(self, number_format: Option<&str>) -> Format {
        let mut format = match self {
            CellStyle::Plain => Format::new(),
            CellStyle::Bordered => Format::new().set_border(FormatBorder::Thin),
            CellStyle::Header => Format::new()
                .set_bold()
                .set_align(FormatAlign::Center)
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_border(FormatBorder::Thin),
        };

        if let Some(number_format) = number_format {
            format = format.set_num_format(number_format);
        }

        format
    }
}

/// Check a number format string before it is attached to a cell.
///
/// Rejects empty or over-long strings, unterminated quoted literals,
/// unbalanced brackets and more than four sections.
pub fn validate_number_format(format: &str) -> Result<()> {
    let reject = |reason: &'static str| Error::InvalidFormat {
        format: format.to_string(),
        reason,
    };

    if format.trim().is_empty() {
        return Err(reject("format must not be empty"));
    }

    if format.chars().count() > MAX_FORMAT_LEN {
        return Err(reject("format must be at most 255 characters"));
    }

    let mut sections = 1;
    let mut in_quotes = false;
    let mut in_brackets = false;
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                in_quotes = false;
            }
            continue;
        }

        match c {
            // escaped literal
            '\\' => {
                if chars.next().is_none() {
                    return Err(reject("dangling escape at end of format"));
                }
            }
            '"' => in_quotes = true,
            '[' if in_brackets => return Err(reject("nested '['")),
            '[' => in_brackets = true,
            ']' if !in_brackets => return Err(reject("unmatched ']'")),
            ']' => in_brackets = false,
            ';' if !in_brackets => {
                sections += 1;
                if sections > MAX_FORMAT_SECTIONS {
                    return Err(reject("format has more than four sections"));
                }
            }
            _ => {}
        }
    }

    if in_quotes {
        return Err(reject("unterminated quoted literal"));
    }

    if in_brackets {
        return Err(reject("unterminated '['"));
    }

    Ok(())
}
