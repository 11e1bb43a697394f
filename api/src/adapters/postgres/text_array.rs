//! Decoder for PostgreSQL text-array literals
//!
//! Handles the `{elem1,"elem, 2","say ""hi"""}` form: optional double quotes
//! around elements, commas inside quotes kept, and `""` inside a quoted
//! element standing for one literal quote.

/// Decode an array literal into its elements, in source order.
///
/// Total: any input yields some sequence. At most one leading `{` and one
/// trailing `}` are stripped; malformed input is decoded best-effort rather
/// than rejected. An empty body yields an empty vector, never `[""]`.
pub fn parse_text_array(raw: &str) -> Vec<String> {
    let body = raw.strip_prefix('{').unwrap_or(raw);
    let body = body.strip_suffix('}').unwrap_or(body);

    if body.is_empty() {
        return Vec::new();
    }

    let mut elements = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => elements.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        elements.push(current);
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_elements_in_order() {
        assert_eq!(parse_text_array("{a,b,c}"), vec!["a", "b", "c"]);
    }

    #[test]
    fn single_element() {
        assert_eq!(parse_text_array("{golang}"), vec!["golang"]);
    }

    #[test]
    fn empty_array_and_empty_string_are_empty() {
        assert!(parse_text_array("{}").is_empty());
        assert!(parse_text_array("").is_empty());
    }

    #[test]
    fn comma_inside_quotes_is_not_a_separator() {
        assert_eq!(parse_text_array(r#"{"a,b",c}"#), vec!["a,b", "c"]);
    }

    #[test]
    fn doubled_quote_becomes_literal_quote() {
        assert_eq!(
            parse_text_array(r#"{"say ""hi""",ok}"#),
            vec![r#"say "hi""#, "ok"]
        );
    }

    #[test]
    fn quoted_element_with_spaces() {
        assert_eq!(
            parse_text_array(r#"{sql,"data bases",postgresql}"#),
            vec!["sql", "data bases", "postgresql"]
        );
    }

    #[test]
    fn non_ascii_elements() {
        assert_eq!(
            parse_text_array("{программирование,api,веб}"),
            vec!["программирование", "api", "веб"]
        );
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        assert_eq!(parse_text_array("{a b, c}"), vec!["a b", " c"]);
    }

    #[test]
    fn only_one_outer_brace_is_stripped() {
        assert_eq!(parse_text_array("{{a}}"), vec!["{a}"]);
    }

    #[test]
    fn missing_braces_are_tolerated() {
        assert_eq!(parse_text_array("a,b"), vec!["a", "b"]);
        assert_eq!(parse_text_array("{a,b"), vec!["a", "b"]);
        assert_eq!(parse_text_array("a,b}"), vec!["a", "b"]);
        assert!(parse_text_array("{").is_empty());
    }

    #[test]
    fn interior_empty_element_kept_trailing_dropped() {
        assert_eq!(parse_text_array("{,a}"), vec!["", "a"]);
        assert_eq!(parse_text_array("{a,}"), vec!["a"]);
    }

    #[test]
    fn unbalanced_quote_does_not_fail() {
        assert_eq!(parse_text_array(r#"{"a,b}"#), vec!["a,b"]);
    }

    #[test]
    fn decoding_is_repeatable() {
        let raw = r#"{"x, y",z,"q""uote"}"#;
        let first = parse_text_array(raw);
        let second = parse_text_array(raw);

        assert_eq!(first, second);
        assert_eq!(first, vec!["x, y", "z", r#"q"uote"#]);
    }
}
