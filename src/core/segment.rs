//! Camel-case segmentation of identifier-like tokens.

/// Splits a token into sub-words, starting a new segment before every
/// uppercase character. Empty segments are dropped.
///
/// Runs of capitals are not grouped: `"HTTP"` yields one segment per letter.
pub fn split_camel_case(token: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in token.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_split() {
        assert_eq!(split_camel_case("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
        assert_eq!(split_camel_case("FooBar"), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_single_lowercase_word_unchanged() {
        assert_eq!(split_camel_case("cat"), vec!["cat"]);
    }

    #[test]
    fn test_edge_cases() {
        assert!(split_camel_case("").is_empty());
        assert_eq!(split_camel_case("HTTP"), vec!["H", "T", "T", "P"]);
        assert_eq!(split_camel_case("getX"), vec!["get", "X"]);
        // Non-ASCII capitals also start a segment
        assert_eq!(split_camel_case("großÄrger"), vec!["groß", "Ärger"]);
    }
}
