/// Which of the two aligners applies to a block of text.
///
/// This is primarily exposed so embedders can report which transformation
/// would run; [`crate::align`] applies the same rule internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Pad whitespace-separated columns to a common width.
    Columns,
    /// Line up the `=` signs of assignment statements.
    Equals,
}

impl AlignMode {
    /// Picks the aligner for `text`: [`AlignMode::Columns`] when the text
    /// contains no `=` character, [`AlignMode::Equals`] otherwise.
    pub fn detect(text: &str) -> Self {
        if text.contains('=') {
            AlignMode::Equals
        } else {
            AlignMode::Columns
        }
    }
}

/// How a single line participates in equals alignment.
///
/// Classification happens once per line; entries are never mutated
/// afterwards. The prefix-merge step builds new [`Assignment`] values
/// instead of rewriting fields in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// Emitted byte-for-byte: the line has zero or more than one `=`, or
    /// does not have an assignment shape.
    Passthrough(String),
    /// A single-`=` assignment, decomposed for re-rendering.
    Assignment(Assignment),
}

/// The pieces of an assignment line.
///
/// `prefix name = value` declarations carry the type/qualifier token in
/// `lhs_prefix`; plain `name = value` statements leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Indentation before the first token, reproduced verbatim.
    pub leading_whitespace: String,
    /// Type or qualifier token, empty for plain assignments.
    pub lhs_prefix: String,
    /// The assignable name (after prefix merging: prefix, gap and name).
    pub lhs: String,
    /// Everything after the `=`, trimmed.
    pub rhs: String,
}
