// src/transform/sentinel.rs
//! Text-level removal of marker statements.
//!
//! When the grouper runs in marker mode, each separator renders as a
//! string-literal expression statement (`"payload";`) on its own line. This
//! pass deletes the statement text and nothing else, so the line break the
//! renderer emitted around it survives as a blank line.

use regex::RegexBuilder;

/// Render a marker payload as the statement the printer emits for it.
pub fn marker_statement(marker: &str) -> String {
    format!("\"{}\";", marker)
}

/// Remove every occurrence of the marker statement from rendered text.
/// Matching is case-insensitive and global; the marker is passed in
/// explicitly rather than read from shared state.
pub fn strip_markers(text: &str, marker: &str) -> String {
    let pattern = regex::escape(&marker_statement(marker));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("an escaped literal is a valid pattern");
    re.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_statement_is_removed_leaving_a_blank_line() {
        let text = "import a from 'a';\n\"BREAK\";\nimport './b';\n";
        let cleaned = strip_markers(text, "BREAK");
        assert_eq!(cleaned, "import a from 'a';\n\nimport './b';\n");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let text = "a;\n\"break\";\nb;\n";
        assert_eq!(strip_markers(text, "BREAK"), "a;\n\nb;\n");
    }

    #[test]
    fn all_occurrences_are_removed() {
        let text = "\"m\";\nx;\n\"m\";\ny;\n\"m\";\n";
        let cleaned = strip_markers(text, "m");
        assert!(!cleaned.contains("\"m\";"));
        assert_eq!(cleaned, "\nx;\n\ny;\n\n");
    }

    #[test]
    fn payload_with_regex_metacharacters_is_literal() {
        let text = "a;\n\"x.y*z\";\nb;\n";
        assert_eq!(strip_markers(text, "x.y*z"), "a;\n\nb;\n");
        // A different payload that the unescaped pattern would match
        assert_eq!(strip_markers("\"xAyBz\";\n", "x.y*z"), "\"xAyBz\";\n");
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        let text = "const a = 1;\n";
        assert_eq!(strip_markers(text, "BREAK"), text);
    }
}
