use std::fmt::{self, Display};

/// Error type for the host-facing boundary.
///
/// The aligners themselves are total functions; the only failures are
/// unmet preconditions (no selection available, a single-line selection,
/// a replace that the host refuses). Any of these aborts the whole
/// operation before anything is written back.
#[derive(Debug, Clone)]
pub struct BlockAlignError {
    pub message: String,
}

impl BlockAlignError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for BlockAlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BlockAlignError {}
