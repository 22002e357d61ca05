use super::pattern::WILDCARD;
use crate::config::FilterConfiguration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pattern list a finding refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternList {
    BlockList,
    AllowList,
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternList::BlockList => write!(f, "BlockList"),
            PatternList::AllowList => write!(f, "AllowList"),
        }
    }
}

/// Problem detected in a single pattern entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Empty or whitespace-only entry
    Empty,
    /// Bare `*`, which matches every namespace
    TooBroad,
    /// `*` somewhere other than the last character
    MisplacedWildcard,
}

/// Advisory finding produced by [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFinding {
    pub list: PatternList,
    pub index: usize,
    pub pattern: String,
    pub kind: FindingKind,
    pub message: String,
}

impl fmt::Display for PatternFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.list, self.index, self.message)
    }
}

/// Check both pattern lists for entries that would silently produce wrong
/// scope decisions. The configuration is left untouched; callers decide
/// whether findings are warnings or errors.
pub fn validate(config: &FilterConfiguration) -> Vec<PatternFinding> {
    let mut findings = validate_list(PatternList::BlockList, &config.block_list);
    findings.extend(validate_list(PatternList::AllowList, &config.allow_list));
    findings
}

fn validate_list(list: PatternList, patterns: &[String]) -> Vec<PatternFinding> {
    patterns
        .iter()
        .enumerate()
        .filter_map(|(index, pattern)| {
            let kind = classify(pattern)?;
            Some(PatternFinding {
                list,
                index,
                pattern: pattern.clone(),
                kind,
                message: describe(list, pattern, kind),
            })
        })
        .collect()
}

fn classify(pattern: &str) -> Option<FindingKind> {
    if pattern.trim().is_empty() {
        return Some(FindingKind::Empty);
    }
    if pattern == "*" {
        return Some(FindingKind::TooBroad);
    }
    let body = pattern.strip_suffix(WILDCARD).unwrap_or(pattern);
    if body.contains(WILDCARD) {
        return Some(FindingKind::MisplacedWildcard);
    }
    None
}

fn describe(list: PatternList, pattern: &str, kind: FindingKind) -> String {
    match kind {
        FindingKind::Empty => "pattern is empty".to_string(),
        FindingKind::TooBroad => match list {
            PatternList::BlockList => "pattern '*' blocks every namespace".to_string(),
            PatternList::AllowList => "pattern '*' allows every namespace".to_string(),
        },
        FindingKind::MisplacedWildcard => format!(
            "pattern '{pattern}' uses '*' before the end; only a trailing wildcard is supported"
        ),
    }
}
