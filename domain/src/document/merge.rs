//! Merging a freshly rendered table into an existing document

use super::table::TABLE_HEADER;

/// Name of the companion document, created next to the tools directory.
pub const TARGET_DOCUMENT_NAME: &str = "Win DailyUse Track Tools.md";

/// Which branch the merge took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentUpdate {
    /// The document did not exist; its content is the table alone
    Created,
    /// An existing table block (header to end of file) was replaced
    Replaced,
    /// The document had no table; the table was appended
    Appended,
}

impl DocumentUpdate {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentUpdate::Created => "created",
            DocumentUpdate::Replaced => "replaced",
            DocumentUpdate::Appended => "appended",
        }
    }
}

impl std::fmt::Display for DocumentUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute the new document content.
///
/// - `existing == None` → the table alone
/// - header present → everything from the first header to the end is replaced
/// - header absent → `existing + "\n\n" + table`
pub fn merge_table(existing: Option<&str>, table: &str) -> (String, DocumentUpdate) {
    match existing {
        None => (table.to_string(), DocumentUpdate::Created),
        Some(content) => match content.find(TABLE_HEADER) {
            Some(idx) => {
                let mut updated = String::with_capacity(idx + table.len());
                updated.push_str(&content[..idx]);
                updated.push_str(table);
                (updated, DocumentUpdate::Replaced)
            }
            None => (format!("{}\n\n{}", content, table), DocumentUpdate::Appended),
        },
    }
}
