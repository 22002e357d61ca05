/// Wildcard character accepted at the end of a pattern
pub const WILDCARD: char = '*';

/// Check whether `namespace` matches `pattern`.
///
/// Patterns without a `*` compare exactly (case-sensitive). Patterns ending in
/// `*` are a prefix test on everything before it, so a bare `*` matches any
/// namespace. A `*` anywhere else is not supported here: run
/// [`validate`](super::validate) on the configuration before matching.
pub fn matches(pattern: &str, namespace: &str) -> bool {
    match pattern.strip_suffix(WILDCARD) {
        Some(prefix) => {
            debug_assert!(
                !prefix.contains(WILDCARD),
                "malformed pattern reached the matcher: {pattern:?}"
            );
            namespace.starts_with(prefix)
        }
        None => {
            debug_assert!(
                !pattern.contains(WILDCARD),
                "malformed pattern reached the matcher: {pattern:?}"
            );
            pattern == namespace
        }
    }
}

/// True when the pattern ends with a wildcard
pub fn is_wildcard(pattern: &str) -> bool {
    pattern.ends_with(WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern() {
        assert!(matches("mscorlib", "mscorlib"));
        assert!(!matches("mscorlib", "mscorlib.Extra"));
        assert!(!matches("mscorlib", "MSCORLIB"));
        assert!(!matches("netstandard", ""));
    }

    #[test]
    fn test_exact_pattern_equals_string_equality() {
        let samples = ["", "System", "System.IO", "Acme.Orders", "acme.orders"];
        for pattern in samples {
            for namespace in samples {
                assert_eq!(matches(pattern, namespace), pattern == namespace);
            }
        }
    }

    #[test]
    fn test_trailing_wildcard_is_prefix_test() {
        let prefixes = ["", "System", "System.", "Microsoft.Extensions."];
        let namespaces = [
            "",
            "System",
            "System.IO",
            "SystemX",
            "Microsoft.Extensions.Logging",
            "Microsoft.AspNetCore",
        ];
        for prefix in prefixes {
            let pattern = format!("{prefix}*");
            for namespace in namespaces {
                assert_eq!(
                    matches(&pattern, namespace),
                    namespace.starts_with(prefix),
                    "pattern {pattern:?} vs {namespace:?}"
                );
            }
        }
    }

    #[test]
    fn test_bare_wildcard_matches_everything() {
        assert!(matches("*", ""));
        assert!(matches("*", "Anything.At.All"));
    }

    #[test]
    fn test_wildcard_is_case_sensitive() {
        assert!(matches("Microsoft.*", "Microsoft.AspNetCore.Mvc"));
        assert!(!matches("Microsoft.*", "microsoft.aspnetcore.mvc"));
    }

    #[test]
    fn test_is_wildcard() {
        assert!(is_wildcard("System.*"));
        assert!(!is_wildcard("mscorlib"));
    }
}
