//! Shell-safety transformations for operator-supplied form fields.
//!
//! Every free-text field must pass through [`shell_quote`] before it is
//! concatenated into the generator command line; [`parse_subjects`] and
//! [`parse_count`] perform the field-level coercions. None of these
//! functions fail — they always produce a best-effort token set.

/// Quote a string as a single POSIX shell token.
///
/// Wraps the input in single quotes and rewrites embedded single quotes
/// as `'\''`. The empty string yields `''`, which is still one token.
/// Operator-controlled content can never terminate the quoted token, so
/// shell metacharacters survive only as literal argument bytes.
pub fn shell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Split a comma-separated subjects field into trimmed pieces.
///
/// Order is preserved. Empty pieces are *not* filtered: `"A,,B"` yields
/// `["A", "", "B"]` and each empty piece later becomes an empty quoted
/// token on the command line. Callers that require at least one real
/// subject must check for that themselves.
pub fn parse_subjects(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Coerce a question-count field to an integer, loosely.
///
/// Parses the longest leading run of ASCII digits (after an optional `+`)
/// and ignores any trailing garbage, so `"12abc"` is `12`. Anything
/// without a leading digit — including negative input — coerces to `0`,
/// which callers must treat as "no questions requested", not an error.
/// A digit run that overflows saturates to `u32::MAX`.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = {
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(trimmed.len(), |(i, _)| i);
        &trimmed[..end]
    };
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u32::MAX)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_plain_string() {
        assert_eq!(shell_quote("Flutter"), "'Flutter'");
    }

    #[test]
    fn quote_empty_string_is_still_a_token() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn quote_embedded_single_quote() {
        assert_eq!(shell_quote("O'Brien"), r"'O'\''Brien'");
    }

    #[test]
    fn quote_shell_metacharacters() {
        assert_eq!(shell_quote("; rm -rf /"), "'; rm -rf /'");
        assert_eq!(shell_quote("$(whoami)"), "'$(whoami)'");
        assert_eq!(shell_quote("`id`"), "'`id`'");
    }

    /// The real property: a hostile field round-tripped through an actual
    /// shell comes back byte-for-byte, as one argument.
    #[tokio::test]
    async fn quoted_token_survives_shell_round_trip() {
        let hostile = r#"; rm -rf / & "$(whoami)" `id` '"#;
        let output = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(format!("printf %s {}", shell_quote(hostile)))
            .output()
            .await
            .expect("spawn sh");
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), hostile);
    }

    #[test]
    fn subjects_split_and_trimmed() {
        assert_eq!(parse_subjects("A, B ,C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn subjects_empty_pieces_are_retained() {
        assert_eq!(parse_subjects("A,,B"), vec!["A", "", "B"]);
        assert_eq!(parse_subjects(""), vec![""]);
    }

    #[test]
    fn count_plain_integer() {
        assert_eq!(parse_count("10"), 10);
        assert_eq!(parse_count(" 7 "), 7);
    }

    #[test]
    fn count_non_numeric_coerces_to_zero() {
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-5"), 0);
    }

    #[test]
    fn count_leading_digits_win() {
        assert_eq!(parse_count("12abc"), 12);
        assert_eq!(parse_count("+3"), 3);
    }

    #[test]
    fn count_overflow_saturates() {
        assert_eq!(parse_count("99999999999999999999"), u32::MAX);
    }
}
