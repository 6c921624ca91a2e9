//! # blockalign
//!
//! A text-block aligner: give it a multi-line block of source text and it
//! hands back the same block with normalized spacing.
//!
//! Two alignment styles are supported, picked automatically from the input:
//!
//! - **Column alignment**: every whitespace-separated column is padded to the
//!   width of its widest entry, so the words line up vertically. Used when the
//!   block contains no `=` character.
//! - **Equals alignment**: assignment statements (`name = value` and
//!   `type name = value`) get their `=` signs lined up in a single column.
//!   Lines that aren't assignments pass through untouched. Used when the
//!   block contains at least one `=`.
//!
//! The aligners are pure functions of their input string: no configuration,
//! no state between calls, and every width is computed from the block itself.
//! Leading indentation is preserved verbatim, and the output ends with a
//! newline exactly when the input does.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `balign` CLI tool for aligning text from the
//! terminal (or from an editor's shell-filter command):
//!
//! ```sh
//! # Install
//! cargo install blockalign
//!
//! # Align a block from stdin
//! balign < block.txt
//!
//! # Force one aligner instead of auto-detecting
//! balign --mode columns notes.txt
//! ```
//!
//! Run `balign --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use blockalign::align;
//!
//! let input = "x = 1;\nlonger_name = 2;\n";
//! let output = align(input).unwrap();
//!
//! assert_eq!(output, "x           = 1;\nlonger_name = 2;\n");
//! ```
//!
//! Or call an aligner directly; both are total functions:
//!
//! ```rust
//! use blockalign::align_columns;
//!
//! let output = align_columns("a bb\nccc d\n");
//! assert_eq!(output, "a   bb \nccc d  \n");
//! ```
//!
//! ## Embedding in an Editor
//!
//! Host integration is reduced to the [`SelectionHost`] trait: supply the
//! selected text, receive the replacement. [`align_selection`] drives the
//! round trip and aborts without writing anything when a precondition fails
//! (no selection, single-line selection).
//!
//! ## Example Output
//!
//! Given a block of mixed declarations and assignments, `blockalign`
//! produces:
//!
//! ```text
//! int    retries      = 0;
//! String lastResponse = "";
//! // counters below are reset per session
//! total               = 0;
//! ```
//!
//! Notice how:
//! - The `int`/`String` declaration prefixes form their own aligned column
//! - Every `=` lands at the same offset, plain and prefixed lines alike
//! - The comment line is reproduced byte-for-byte

mod columns;
mod equals;
mod error;
mod formatter;
mod host;
mod lines;
mod model;

pub use crate::columns::align_columns;
pub use crate::equals::align_equals;
pub use crate::error::BlockAlignError;
pub use crate::formatter::align;
pub use crate::host::{align_selection, SelectionHost};
pub use crate::model::{AlignMode, Assignment, ClassifiedLine};
