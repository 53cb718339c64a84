/// Last addressable row in an xlsx worksheet
pub const MAX_ROW: u32 = 1_048_576;

/// Last addressable column in an xlsx worksheet (`XFD`)
pub const MAX_COL: u16 = 16_384;

const MAX_SHEET_NAME_LEN: usize = 31;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

#[must_use]
pub fn index_to_col_name(index: u16) -> String {
    let mut col_name = String::new();
    let mut n = index as u32;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if col_name.is_empty() {
        col_name.push('A');
    }

    col_name
}

/// Base-26 column letters to a 1-based index: `A` = 1, `Z` = 26, `AA` = 27.
///
/// Returns `None` for empty or non-alphabetic input and for anything past `XFD`.
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<u16> {
    if name.is_empty() {
        return None;
    }

    let mut result: u32 = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
        result = result * 26 + val;

        if result > MAX_COL as u32 {
            return None;
        }
    }

    Some(result as u16)
}

// Format cell reference (e.g., A1, B2)
#[must_use]
pub fn cell_reference(cell: (u32, u16)) -> String {
    format!("{}{}", index_to_col_name(cell.1), cell.0)
}

/// Parse an A1-style reference such as `B2` or `$B$2` into `(row, col)`, both 1-based.
pub fn parse_cell_reference(reference: &str) -> Option<(u32, u16)> {
    let trimmed = reference.trim();
    let rest = trimmed.strip_prefix('$').unwrap_or(trimmed);

    let split = rest.find(|c: char| !c.is_ascii_alphabetic())?;
    let (letters, digits) = rest.split_at(split);
    let digits = digits.strip_prefix('$').unwrap_or(digits);

    if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let col = col_name_to_index(letters)?;
    let row: u32 = digits.parse().ok()?;

    if row == 0 || row > MAX_ROW {
        return None;
    }

    Some((row, col))
}

/// Reason a worksheet name cannot be stored, if any
pub fn sheet_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name must not be empty");
    }

    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Some("name must be at most 31 characters");
    }

    if name.contains(FORBIDDEN_SHEET_CHARS) {
        return Some("name must not contain any of [ ] : * ? / \\");
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Some("name must not start or end with an apostrophe");
    }

    None
}
