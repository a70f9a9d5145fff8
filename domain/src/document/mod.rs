//! The tracked Markdown document.
//!
//! The document holds at most one table block, starting at
//! [`TABLE_HEADER`] and running to the end of the file. Anything above the
//! header belongs to the user and is preserved verbatim on every update.

mod merge;
mod table;

pub use merge::{DocumentUpdate, TARGET_DOCUMENT_NAME, merge_table};
pub use table::{TABLE_HEADER, TABLE_SEPARATOR, escape_cell, render_table};
