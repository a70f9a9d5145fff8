//! Tool entries collected during a run.

use crate::lookup::DescriptionOrigin;

/// One row of the tool table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Display name produced by the normalizer
    pub name: String,
    /// One-sentence description of what the tool does
    pub function: String,
    /// Which lookup stage produced `function`
    pub origin: DescriptionOrigin,
}

impl ToolEntry {
    pub fn new(
        name: impl Into<String>,
        function: impl Into<String>,
        origin: DescriptionOrigin,
    ) -> Self {
        Self {
            name: name.into(),
            function: function.into(),
            origin,
        }
    }
}

/// Sort entries by name, case-insensitively, ascending.
///
/// The sort is stable: entries whose names differ only by case keep their
/// scan order.
pub fn sort_entries(entries: &mut [ToolEntry]) {
    entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ToolEntry {
        ToolEntry::new(name, "f", DescriptionOrigin::Fallback)
    }

    #[test]
    fn test_sort_case_insensitive() {
        let mut entries = vec![entry("zeal"), entry("Appzero"), entry("appone"), entry("Bandizip")];
        sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["appone", "Appzero", "Bandizip", "zeal"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut entries = vec![
            ToolEntry::new("Tool", "first", DescriptionOrigin::Fallback),
            ToolEntry::new("tool", "second", DescriptionOrigin::Fallback),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].function, "first");
        assert_eq!(entries[1].function, "second");
    }
}
