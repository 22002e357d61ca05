//! Namespace scoping for dependency analysis
//!
//! A [`FilterEngine`] answers whether a dependency namespace counts toward
//! analysis. Patterns are exact names or trailing-wildcard prefixes; run
//! [`validate`] on a configuration before handing it to the engine.

mod pattern;
mod validation;

pub use pattern::{is_wildcard, matches, WILDCARD};
pub use validation::{validate, FindingKind, PatternFinding, PatternList};

use crate::config::FilterConfiguration;

/// Decides which namespaces are in scope. Read-only after construction, so a
/// single engine can be shared across worker threads.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: FilterConfiguration,
}

/// Namespaces split by scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopePartition<'a> {
    pub in_scope: Vec<&'a str>,
    pub excluded: Vec<&'a str>,
}

impl FilterEngine {
    pub fn new(config: FilterConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfiguration {
        &self.config
    }

    /// Allow patterns override block patterns; a namespace matching neither
    /// list is in scope.
    pub fn is_in_scope(&self, namespace: &str) -> bool {
        !self.is_blocked(namespace) || self.is_allowed(namespace)
    }

    fn is_blocked(&self, namespace: &str) -> bool {
        self.config
            .block_list
            .iter()
            .any(|pattern| matches(pattern, namespace))
    }

    fn is_allowed(&self, namespace: &str) -> bool {
        self.config
            .allow_list
            .iter()
            .any(|pattern| matches(pattern, namespace))
    }

    /// Split namespaces into in-scope and excluded, keeping input order
    pub fn partition<'a, S: AsRef<str>>(&self, namespaces: &'a [S]) -> ScopePartition<'a> {
        let mut partition = ScopePartition::default();
        for namespace in namespaces {
            let namespace = namespace.as_ref();
            if self.is_in_scope(namespace) {
                partition.in_scope.push(namespace);
            } else {
                partition.excluded.push(namespace);
            }
        }
        partition
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(FilterConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(block: &[&str], allow: &[&str]) -> FilterEngine {
        FilterEngine::new(FilterConfiguration::new(
            block.iter().map(|s| s.to_string()).collect(),
            allow.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn test_block_only() {
        let engine = engine_with(&["Microsoft.*"], &[]);
        assert!(!engine.is_in_scope("Microsoft.AspNetCore.Mvc"));
        assert!(engine.is_in_scope("Acme.Orders"));
    }

    #[test]
    fn test_allow_overrides_block() {
        let engine = engine_with(&["Microsoft.*"], &["Microsoft.Extensions.*"]);
        assert!(engine.is_in_scope("Microsoft.Extensions.Logging"));
        assert!(!engine.is_in_scope("Microsoft.AspNetCore.Mvc"));
    }

    #[test]
    fn test_allow_wins_for_exact_patterns() {
        let engine = engine_with(&["mscorlib", "System.*"], &["mscorlib", "System.Text.Json"]);
        assert!(engine.is_in_scope("mscorlib"));
        assert!(engine.is_in_scope("System.Text.Json"));
        assert!(!engine.is_in_scope("System.IO"));
    }

    #[test]
    fn test_unmatched_namespace_in_scope() {
        let engine = engine_with(&["System.*"], &["Acme.*"]);
        assert!(engine.is_in_scope("Contoso.Billing"));

        let empty = engine_with(&[], &[]);
        assert!(empty.is_in_scope("System.IO"));
    }

    #[test]
    fn test_default_engine() {
        let engine = FilterEngine::default();
        assert!(!engine.is_in_scope("System.Collections.Generic"));
        assert!(!engine.is_in_scope("netstandard"));
        assert!(!engine.is_in_scope("mscorlib"));
        assert!(engine.is_in_scope("Newtonsoft.Json"));
        // exact pattern, not a prefix
        assert!(engine.is_in_scope("mscorlib.extensions"));
    }

    #[test]
    fn test_partition_keeps_order() {
        let engine = engine_with(&["Microsoft.*"], &["Microsoft.Extensions.*"]);
        let namespaces = vec![
            "Acme.Shared".to_string(),
            "Microsoft.AspNetCore".to_string(),
            "Microsoft.Extensions.Caching".to_string(),
            "Microsoft.EntityFrameworkCore".to_string(),
        ];

        let partition = engine.partition(&namespaces);
        assert_eq!(
            partition.in_scope,
            vec!["Acme.Shared", "Microsoft.Extensions.Caching"]
        );
        assert_eq!(
            partition.excluded,
            vec!["Microsoft.AspNetCore", "Microsoft.EntityFrameworkCore"]
        );
    }
}
