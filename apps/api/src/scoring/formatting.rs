//! Formatting Heuristics: flags layout patterns that commonly break ATS parsers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// More disallowed characters than this triggers `ExcessiveSpecialCharacters`.
const SPECIAL_CHAR_LIMIT: usize = 20;
/// More very short lines than this triggers `FragmentedLines`.
const SHORT_LINE_LIMIT: usize = 10;
/// Lines with a trimmed length in `1..SHORT_LINE_CHARS` count as very short.
const SHORT_LINE_CHARS: usize = 3;

static SPECIAL_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s\-.,@()\[\]/]").expect("valid special character regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingIssue {
    TableLayout,
    ExcessiveSpecialCharacters,
    FragmentedLines,
}

impl FormattingIssue {
    pub fn message(self) -> &'static str {
        match self {
            FormattingIssue::TableLayout => {
                "Possible table formatting detected - may not be ATS-friendly"
            }
            FormattingIssue::ExcessiveSpecialCharacters => "Excessive special characters detected",
            FormattingIssue::FragmentedLines => "Many very short lines detected - check formatting",
        }
    }
}

impl fmt::Display for FormattingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for FormattingIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Runs every check independently; issues come back in check order.
pub fn check_formatting_issues(resume_text: &str) -> Vec<FormattingIssue> {
    let mut issues = Vec::new();

    if looks_like_table(resume_text) {
        issues.push(FormattingIssue::TableLayout);
    }
    if count_special_characters(resume_text) > SPECIAL_CHAR_LIMIT {
        issues.push(FormattingIssue::ExcessiveSpecialCharacters);
    }
    if count_short_lines(resume_text) > SHORT_LINE_LIMIT {
        issues.push(FormattingIssue::FragmentedLines);
    }

    issues
}

fn looks_like_table(text: &str) -> bool {
    text.contains('|') || text.contains("\t\t")
}

fn count_special_characters(text: &str) -> usize {
    SPECIAL_CHAR_RE.find_iter(text).count()
}

fn count_short_lines(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.trim().chars().count())
        .filter(|&len| len > 0 && len < SHORT_LINE_CHARS)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_has_no_issues() {
        let text = "Experience\nSoftware Engineer at Acme (2019-2023)\nBuilt APIs in Rust, Go.\nEmail: jane@example.com";
        assert!(check_formatting_issues(text).is_empty());
    }

    #[test]
    fn test_pipe_flags_table() {
        let issues = check_formatting_issues("Skills | Rust | Go");
        assert_eq!(issues, vec![FormattingIssue::TableLayout]);
    }

    #[test]
    fn test_double_tab_flags_table_but_single_tab_does_not() {
        assert_eq!(
            check_formatting_issues("Name\t\tRole"),
            vec![FormattingIssue::TableLayout]
        );
        assert!(check_formatting_issues("Name\tRole").is_empty());
    }

    #[test]
    fn test_special_character_threshold_is_exclusive() {
        let at_limit = "★".repeat(20);
        assert!(check_formatting_issues(&at_limit).is_empty());

        let over_limit = "★".repeat(21);
        let issues = check_formatting_issues(&over_limit);
        assert_eq!(issues, vec![FormattingIssue::ExcessiveSpecialCharacters]);
        assert!(issues[0].to_string().contains("special characters"));
    }

    #[test]
    fn test_allowed_punctuation_is_not_special() {
        let text = "-.,@()[]/".repeat(10);
        assert_eq!(count_special_characters(&text), 0);
    }

    #[test]
    fn test_many_short_lines_flag_fragmentation() {
        let fragmented = "a\n".repeat(11);
        assert_eq!(
            check_formatting_issues(&fragmented),
            vec![FormattingIssue::FragmentedLines]
        );

        let borderline = "ab\n".repeat(10);
        assert!(check_formatting_issues(&borderline).is_empty());
    }

    #[test]
    fn test_blank_and_three_char_lines_are_not_short() {
        let text = format!("{}{}", "\n".repeat(30), "abc\n".repeat(30));
        assert_eq!(count_short_lines(&text), 0);
    }

    #[test]
    fn test_issues_keep_check_order() {
        let text = format!("col | col\n{}{}", "#".repeat(25), "\nx".repeat(12));
        assert_eq!(
            check_formatting_issues(&text),
            vec![
                FormattingIssue::TableLayout,
                FormattingIssue::ExcessiveSpecialCharacters,
                FormattingIssue::FragmentedLines,
            ]
        );
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_value(FormattingIssue::FragmentedLines).unwrap();
        assert_eq!(json, "Many very short lines detected - check formatting");
    }
}
