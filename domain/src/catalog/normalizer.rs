//! Filename → display name normalization.
//!
//! Normalization is an ordered pipeline of [`NameRule`]s. Each rule consumes
//! the output of the previous one, so the order in [`NameRule::PIPELINE`]
//! determines the result:
//!
//! | # | Rule | Example (`DiskGeniusPro_x64_v1.2.3.7z`) |
//! |---|------|-----------------------------------------|
//! | 1 | [`StripExtension`](NameRule::StripExtension) | `DiskGeniusPro_x64_v1.2.3` |
//! | 2 | [`StripArchitecture`](NameRule::StripArchitecture) | `DiskGeniusPro__v1.2.3` |
//! | 3 | [`StripVersion`](NameRule::StripVersion) | `DiskGeniusPro__` |
//! | 4 | [`TruncateAtSeparator`](NameRule::TruncateAtSeparator) | `DiskGeniusPro` |
//! | 5 | [`CollapseSeparators`](NameRule::CollapseSeparators) | `DiskGeniusPro` |
//! | 6 | [`TitleCase`](NameRule::TitleCase) | `Diskgeniuspro` |

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Architecture / OS markers, matched anywhere in the stem.
static ARCH_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(x64|x86|win32|win64)").expect("valid arch pattern"));

/// Version numbers: optional `v` followed by dot-separated digit groups.
static VERSION_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)v?\d+(\.\d+)*").expect("valid version pattern"));

/// Runs of separator characters that become a single space.
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._\-]+").expect("valid separator pattern"));

/// Characters that start a trailing annotation (`Tool_notes`, `Tool（portable）`).
const ANNOTATION_SEPARATORS: [char; 4] = ['_', '-', '（', '('];

/// A single step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Drop the file extension (keeps the file stem)
    StripExtension,
    /// Remove `x64`, `x86`, `win32`, `win64` (case-insensitive)
    StripArchitecture,
    /// Remove version tokens such as `v1.2.3` or `2024`
    StripVersion,
    /// Keep only the text before the first annotation separator
    TruncateAtSeparator,
    /// Replace runs of `.`, `_`, `-` with a single space
    CollapseSeparators,
    /// Trim and title-case
    TitleCase,
}

impl NameRule {
    /// The rules in the order they are applied.
    pub const PIPELINE: [NameRule; 6] = [
        NameRule::StripExtension,
        NameRule::StripArchitecture,
        NameRule::StripVersion,
        NameRule::TruncateAtSeparator,
        NameRule::CollapseSeparators,
        NameRule::TitleCase,
    ];

    /// Apply this rule to `input`.
    pub fn apply(self, input: &str) -> String {
        match self {
            NameRule::StripExtension => file_stem(input).to_string(),
            NameRule::StripArchitecture => ARCH_TOKENS.replace_all(input, "").into_owned(),
            NameRule::StripVersion => VERSION_TOKENS.replace_all(input, "").into_owned(),
            NameRule::TruncateAtSeparator => match input.find(ANNOTATION_SEPARATORS) {
                Some(idx) => input[..idx].to_string(),
                None => input.to_string(),
            },
            NameRule::CollapseSeparators => SEPARATOR_RUNS.replace_all(input, " ").into_owned(),
            NameRule::TitleCase => title_case(input.trim()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NameRule::StripExtension => "strip-extension",
            NameRule::StripArchitecture => "strip-architecture",
            NameRule::StripVersion => "strip-version",
            NameRule::TruncateAtSeparator => "truncate-at-separator",
            NameRule::CollapseSeparators => "collapse-separators",
            NameRule::TitleCase => "title-case",
        }
    }
}

impl std::fmt::Display for NameRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convert an archive/installer filename into a display name.
///
/// Never fails. Degenerate filenames (e.g. `v1.0.zip`) produce an empty
/// string; callers decide what to do with those.
pub fn normalize_tool_name(filename: &str) -> String {
    NameRule::PIPELINE
        .iter()
        .fold(filename.to_string(), |name, rule| rule.apply(&name))
}

/// File stem with the same rules as [`Path::file_stem`]: a leading dot
/// does not start an extension.
fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

/// Title-case the first cased character of every word, lower-case the rest.
///
/// A word is a run of cased characters; digits, punctuation and uncased
/// scripts all act as word boundaries. Word starts use the titlecase form
/// (`ß` → `Ss`, `ǆ` → `ǅ`). Greek letters with iota subscript still get
/// their full uppercase expansion.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        let cased = c.is_lowercase() || c.is_uppercase() || is_titlecase_letter(c);
        if cased && !in_word {
            push_titlecase(&mut out, c);
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        in_word = cased;
    }

    out
}

/// Letters of the Unicode `Lt` category (neither upper nor lower case).
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        'ǅ' | 'ǈ' | 'ǋ' | 'ǲ' | 'ᾈ'..='ᾏ' | 'ᾘ'..='ᾟ' | 'ᾨ'..='ᾯ' | 'ᾼ' | 'ῌ' | 'ῼ'
    )
}

/// Push the titlecase mapping of `c`.
///
/// Latin digraphs have dedicated titlecase letters. For other characters
/// the first char of the uppercase expansion is kept and the rest is
/// lower-cased.
fn push_titlecase(out: &mut String, c: char) {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
        _ if is_titlecase_letter(c) => out.push(c),
        _ => {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
                out.extend(upper.flat_map(char::to_lowercase));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_and_version_are_removed() {
        let name = normalize_tool_name("DiskGeniusPro_x64_v1.2.3.7z");
        assert_eq!(name, "Diskgeniuspro");
        assert!(!name.to_lowercase().contains("x64"));
        assert!(!name.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_truncates_at_underscore() {
        assert_eq!(normalize_tool_name("DownKyi_Extra.7z"), "Downkyi");
    }

    #[test]
    fn test_truncates_at_parenthesis() {
        assert_eq!(normalize_tool_name("Snipaste(portable).zip"), "Snipaste");
        assert_eq!(normalize_tool_name("Snipaste（便携版）.zip"), "Snipaste");
        assert_eq!(normalize_tool_name("Rufus-portable.exe"), "Rufus");
    }

    #[test]
    fn test_dots_become_spaces() {
        assert_eq!(normalize_tool_name("Process.Explorer.zip"), "Process Explorer");
        assert_eq!(normalize_tool_name("Everything.1.4.1.zip"), "Everything");
    }

    #[test]
    fn test_arch_tokens_case_insensitive() {
        assert_eq!(normalize_tool_name("NotepadWIN64.exe"), "Notepad");
        assert_eq!(normalize_tool_name("ToolX86.rar"), "Tool");
    }

    #[test]
    fn test_degenerate_name_is_empty() {
        assert_eq!(normalize_tool_name("v1.0.zip"), "");
        assert_eq!(normalize_tool_name("x64.exe"), "");
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        // `.tar` stays in the stem and is collapsed into a space
        assert_eq!(normalize_tool_name("backup.tar.7z"), "Backup Tar");
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(NameRule::PIPELINE[0], NameRule::StripExtension);
        assert_eq!(NameRule::PIPELINE[5], NameRule::TitleCase);
        let manual = NameRule::PIPELINE
            .iter()
            .fold("Tool v2-beta.exe".to_string(), |n, r| r.apply(&n));
        assert_eq!(manual, normalize_tool_name("Tool v2-beta.exe"));
        assert_eq!(manual, "Tool");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("disk genius PRO"), "Disk Genius Pro");
        assert_eq!(title_case("abc1def"), "Abc1Def");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("下载abc"), "下载Abc");
    }

    #[test]
    fn test_title_case_uses_titlecase_mapping() {
        assert_eq!(title_case("ßtraße"), "Sstraße");
        assert_eq!(title_case("ﬁle manager"), "File Manager");
        assert_eq!(title_case("ǆungla"), "ǅungla");
        assert_eq!(title_case("ǄUNGLA"), "ǅungla");
    }

    #[test]
    fn test_titlecase_letters_are_cased() {
        // `ǅ` inside a word continues it and is lower-cased
        assert_eq!(title_case("aǅb"), "Aǆb");
        assert_eq!(title_case("ǅx"), "ǅx");
    }
}
