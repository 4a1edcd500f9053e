use regex::Regex;

/// Decides whether an item name matches a set of search patterns.
///
/// All patterns are OR-ed into one regular expression. When that expression
/// cannot be compiled, whether because it is not valid syntax or because it
/// exceeds the limits of the regular expression engine, every pattern is
/// kept as a literal and a name matches when it contains any of them.
#[derive(Debug)]
pub(crate) enum Matcher {
    Expression(Regex),
    Literals(Vec<String>),
}

impl Matcher {
    /// Builds a matcher from one or more patterns. Never fails.
    pub(crate) fn new<S>(patterns: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let expression = patterns.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("|");
        let compiled = Regex::new(&expression);
        Self::from_compiled(patterns, &expression, compiled)
    }

    fn from_compiled<S>(
        patterns: &[S],
        expression: &str,
        compiled: Result<Regex, regex::Error>,
    ) -> Self
    where
        S: AsRef<str>,
    {
        match compiled {
            Ok(regex) => Self::Expression(regex),
            Err(err) => {
                tracing::debug!(
                    %expression,
                    error = %err,
                    "Search expression cannot be compiled, falling back to substring matching"
                );
                Self::Literals(patterns.iter().map(|pattern| pattern.as_ref().to_string()).collect())
            }
        }
    }

    /// Unanchored: a match anywhere in `name` counts.
    pub(crate) fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Expression(regex) => regex.is_match(name),
            Self::Literals(literals) => {
                literals.iter().any(|literal| name.contains(literal.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pattern_compiles_to_expression() {
        let matcher = Matcher::new(&["a"]);
        assert!(matches!(matcher, Matcher::Expression(_)));
        assert!(matcher.is_match("cat"));
        assert!(!matcher.is_match("dog"));
    }

    #[test]
    fn test_patterns_are_or_combined() {
        let matcher = Matcher::new(&["^c", "g$"]);
        assert!(matcher.is_match("cat"));
        assert!(matcher.is_match("dog"));
        assert!(!matcher.is_match("bat"));
    }

    #[test]
    fn test_expression_is_unanchored() {
        let matcher = Matcher::new(&["ngin"]);
        assert!(matcher.is_match("my-nginx-7c9d"));
    }

    #[test]
    fn test_invalid_syntax_falls_back_to_literals() {
        let matcher = Matcher::new(&["a", "["]);
        let Matcher::Literals(literals) = &matcher else {
            panic!("expected literal matcher, got {matcher:?}");
        };
        assert_eq!(literals, &["a".to_string(), "[".to_string()]);
        assert!(matcher.is_match("cat"));
        assert!(matcher.is_match("x[y"));
        assert!(!matcher.is_match("dog"));
    }

    #[test]
    fn test_literals_are_not_interpreted() {
        // `.*(` is invalid, so `.*` is matched as two literal characters.
        let matcher = Matcher::new(&[".*("]);
        assert!(!matcher.is_match("anything"));
        assert!(matcher.is_match("a.*(b"));
    }

    #[test]
    fn test_oversized_expression_falls_back_to_literals() {
        let matcher = Matcher::from_compiled(&["a"], "a", Err(regex::Error::CompiledTooBig(1024)));
        assert!(matches!(matcher, Matcher::Literals(_)));
        assert!(matcher.is_match("cat"));
        assert!(!matcher.is_match("dog"));
    }

    #[test]
    fn test_valid_but_too_large_pattern_is_matched_literally() {
        let matcher = Matcher::new(&[r"\w{2000}"]);
        assert!(matches!(matcher, Matcher::Literals(_)));
        assert!(matcher.is_match(r"\w{2000}x"));
        assert!(!matcher.is_match("cat"));
    }
}
