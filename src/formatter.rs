use crate::columns::align_columns;
use crate::equals::align_equals;
use crate::error::BlockAlignError;
use crate::model::AlignMode;

/// Aligns a multi-line block of text, picking the aligner from the input.
///
/// A block without any `=` gets its whitespace-separated columns padded to
/// a common width; a block with at least one `=` gets its assignment
/// statements' `=` signs lined up. The result replaces the block wholesale:
/// same lines, same order, only spacing changed.
///
/// The aligners are defined only for multi-line input, so text without a
/// line break is reported as not applicable rather than silently echoed.
///
/// # Errors
///
/// Returns an error if `text` contains no `\n`.
///
/// # Example
///
/// ```rust
/// use blockalign::align;
///
/// let output = align("do x\nretry y").unwrap();
/// assert_eq!(output, "do    x \nretry y ");
///
/// assert!(align("single line").is_err());
/// ```
pub fn align(text: &str) -> Result<String, BlockAlignError> {
    if !text.contains('\n') {
        return Err(BlockAlignError::new("selection must span multiple lines"));
    }
    let aligned = match AlignMode::detect(text) {
        AlignMode::Columns => align_columns(text),
        AlignMode::Equals => align_equals(text),
    };
    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_routes_on_presence_of_equals() {
        assert_eq!(AlignMode::detect("a b\nc d"), AlignMode::Columns);
        assert_eq!(AlignMode::detect("a = 1\nb = 2"), AlignMode::Equals);
        // even a passthrough-only `=` selects the equals aligner
        assert_eq!(AlignMode::detect("a == b\nc d"), AlignMode::Equals);
    }

    #[test]
    fn single_line_input_is_not_applicable() {
        assert!(align("x = 1;").is_err());
    }

    #[test]
    fn dispatches_to_equals_when_an_equals_is_present() {
        assert_eq!(align("ass=ass;\na = a").unwrap(), "ass = ass;\na   = a");
    }

    #[test]
    fn dispatches_to_columns_otherwise() {
        assert_eq!(align("a bb\nccc d").unwrap(), "a   bb \nccc d  ");
    }
}
