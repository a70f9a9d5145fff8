//! Markdown table rendering

use crate::catalog::entry::ToolEntry;

/// Header row. Also marks the start of the table block in the document.
pub const TABLE_HEADER: &str = "| Name | Function |";

/// Separator row following [`TABLE_HEADER`].
pub const TABLE_SEPARATOR: &str = "| ---- | -------- |";

/// Render the two-column table for `entries`, in the given order.
///
/// Rows are joined with `\n`; there is no trailing newline.
pub fn render_table(entries: &[ToolEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_SEPARATOR.to_string());

    for entry in entries {
        lines.push(format!(
            "| {} | {} |",
            escape_cell(&entry.name),
            escape_cell(&entry.function)
        ));
    }

    lines.join("\n")
}

/// Make text safe for a single table cell: pipes are escaped and line
/// breaks folded into spaces.
pub fn escape_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '|' => out.push_str("\\|"),
            // `\r\n` folds into the single space emitted for `\n`
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::DescriptionOrigin;

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_table(&[]), "| Name | Function |\n| ---- | -------- |");
    }

    #[test]
    fn test_render_rows_in_order() {
        let entries = vec![
            ToolEntry::new("Bandizip", "Bandizip is an archiver", DescriptionOrigin::Encyclopedia),
            ToolEntry::new("Zeal", "Windows utility tool", DescriptionOrigin::Fallback),
        ];
        assert_eq!(
            render_table(&entries),
            "| Name | Function |\n\
             | ---- | -------- |\n\
             | Bandizip | Bandizip is an archiver |\n\
             | Zeal | Windows utility tool |"
        );
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line one\r\nline two"), "line one line two");
        assert_eq!(escape_cell("plain"), "plain");
    }

    #[test]
    fn test_escape_cell_lone_carriage_return() {
        assert_eq!(escape_cell("a\rb"), "a b");
        assert_eq!(escape_cell("a\r\rb"), "a  b");
        assert_eq!(escape_cell("end\r"), "end ");
    }
}
