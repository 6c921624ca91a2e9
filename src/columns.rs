use std::sync::LazyLock;

use regex::Regex;

use crate::lines::{split_lines, BlockBuffer};

// Each match is one cell: the whitespace run before a word, then the word.
static CELL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\s*)(\S+)").unwrap());

/// Pads every whitespace-separated column to the width of its widest entry,
/// so the words of all lines line up vertically.
///
/// Leading indentation is kept verbatim per line and never counts toward a
/// column width. Each padded column ends with at least one space, lines with
/// fewer columns than the widest line simply stop early, and blank lines
/// come out blank. The output ends with a newline exactly when the input
/// does.
///
/// # Example
///
/// ```rust
/// use blockalign::align_columns;
///
/// let output = align_columns("  aa bb\n  a bbbb");
/// assert_eq!(output, "  aa bb   \n  a  bbbb ");
/// ```
pub fn align_columns(text: &str) -> String {
    let (lines, trailing_newline) = split_lines(text);

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(lines.len());
    let mut maxes: Vec<usize> = Vec::new();

    for line in &lines {
        rows.push(measure_row(line, &mut maxes));
    }

    let mut buffer = BlockBuffer::default();
    for (row, cells) in rows.iter().enumerate() {
        if row > 0 {
            buffer.line_break();
        }
        for (col, cell) in cells.iter().enumerate() {
            buffer.add(cell);
            if col > 0 {
                // pad to max + 1 so columns stay separated even when every
                // entry in a column has the max width
                buffer.spaces(maxes[col] + 1 - cell.chars().count());
            }
        }
    }
    buffer.into_string(trailing_newline)
}

/// Splits one line into cells and folds its word widths into `maxes`.
///
/// Cell 0 is the leading whitespace run; it gets a dummy slot in `maxes`
/// that stays at zero so cell indexes and width indexes line up.
fn measure_row(line: &str, maxes: &mut Vec<usize>) -> Vec<String> {
    let mut cells: Vec<String> = Vec::new();
    for caps in CELL_RE.captures_iter(line) {
        if cells.is_empty() {
            cells.push(caps[1].to_string());
            if maxes.is_empty() {
                maxes.push(0);
            }
        }
        let word = &caps[2];
        if cells.len() == maxes.len() {
            maxes.push(0);
        }
        let width = word.chars().count();
        if width > maxes[cells.len()] {
            maxes[cells.len()] = width;
        }
        cells.push(word.to_string());
    }
    cells
}
