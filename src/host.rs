use crate::error::BlockAlignError;
use crate::formatter::align;

/// Narrow interface to whatever owns the text selection.
///
/// An editor plugin, a test harness or any other embedder implements the
/// two operations; the aligner core never sees an editor object model.
/// Both operations report unmet preconditions (no selection, no editable
/// surface, replace span out of range) as errors.
pub trait SelectionHost {
    /// Returns the currently selected text.
    fn selected_text(&self) -> Result<String, BlockAlignError>;

    /// Replaces the selected span with `new_text` in a single write.
    fn replace_selection(&mut self, new_text: &str) -> Result<(), BlockAlignError>;
}

/// Reads the host's selection, aligns it and writes the replacement back.
///
/// Any failure — selection missing, single-line selection, refused replace —
/// aborts the whole operation; the host's document is never partially
/// modified.
pub fn align_selection<H: SelectionHost + ?Sized>(host: &mut H) -> Result<(), BlockAlignError> {
    let text = host.selected_text()?;
    let replacement = align(&text)?;
    host.replace_selection(&replacement)
}
