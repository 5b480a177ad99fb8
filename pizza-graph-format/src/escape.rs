//! Escaping shared by the Turtle and N-Triples formatters

/// Escape special characters for a quoted string literal.
///
/// Handles: `\` → `\\`, `"` → `\"`, newline → `\n`, tab → `\t`, carriage return → `\r`.
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Escape the characters IRIREF forbids (`<>"{}|^`\` and `\x00-\x20`) as `\uXXXX`.
///
/// The result is meant to be placed between `<` and `>`.
pub fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for ch in iri.chars() {
        match ch {
            '\u{00}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("plain"), "plain");
        assert_eq!(escape_literal("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_literal("a\\b"), "a\\\\b");
        assert_eq!(escape_literal("line1\nline2\ttab"), "line1\\nline2\\ttab");
    }

    #[test]
    fn test_escape_iri() {
        assert_eq!(
            escape_iri("http://example.org/New_York_NY"),
            "http://example.org/New_York_NY"
        );
        assert_eq!(
            escape_iri("http://example.org/a b"),
            "http://example.org/a\\u0020b"
        );
        assert_eq!(
            escape_iri("http://example.org/x\"y"),
            "http://example.org/x\\u0022y"
        );
        // Non-ASCII is legal in IRIs
        assert_eq!(escape_iri("http://example.org/são_paulo"), "http://example.org/são_paulo");
    }
}
