//! Line match rules
//!
//! A rule decides whether a single line counts as an error line. The searcher
//! only sees the `LineMatcher` trait, so rules can be swapped without touching
//! aggregation or report rendering.
//!
//! Default rule: the line contains `error:` in any letter case.

use crate::error::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Default marker looked for by `MarkerMatcher`.
pub const DEFAULT_MARKER: &str = "error:";

/// Single-line predicate deciding whether a line is an error line
pub trait LineMatcher {
    fn is_match(&self, line: &str) -> bool;

    /// Short human-readable form, used in logs
    fn describe(&self) -> String;
}

impl<M: LineMatcher + ?Sized> LineMatcher for Box<M> {
    fn is_match(&self, line: &str) -> bool {
        (**self).is_match(line)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Substring marker match
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    marker: String,
    case_sensitive: bool,
}

impl MarkerMatcher {
    pub fn new(marker: &str, case_sensitive: bool) -> Self {
        let marker = if case_sensitive {
            marker.to_string()
        } else {
            marker.to_lowercase()
        };
        Self {
            marker,
            case_sensitive,
        }
    }
}

impl Default for MarkerMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, false)
    }
}

impl LineMatcher for MarkerMatcher {
    fn is_match(&self, line: &str) -> bool {
        if self.marker.is_empty() {
            return false;
        }
        if self.case_sensitive {
            line.contains(&self.marker)
        } else {
            line.to_lowercase().contains(&self.marker)
        }
    }

    fn describe(&self) -> String {
        if self.case_sensitive {
            format!("marker {:?}", self.marker)
        } else {
            format!("marker {:?} (ignore case)", self.marker)
        }
    }
}

/// Regular expression match anywhere in the line
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()?;
        Ok(Self { regex })
    }
}

impl LineMatcher for RegexMatcher {
    fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    fn describe(&self) -> String {
        format!("regex /{}/", self.regex.as_str())
    }
}

/// Matches when any inner rule matches
pub struct AnyOf {
    rules: Vec<Box<dyn LineMatcher>>,
}

impl AnyOf {
    pub fn new(rules: Vec<Box<dyn LineMatcher>>) -> Self {
        Self { rules }
    }
}

impl LineMatcher for AnyOf {
    fn is_match(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(line))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.rules.iter().map(|r| r.describe()).collect();
        format!("any of [{}]", parts.join(", "))
    }
}

/// Rule description as it appears in the config file
///
/// ```toml
/// [rule]
/// kind = "regex"
/// pattern = '^\s*panic\('
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchRule {
    Marker {
        #[serde(default = "default_marker")]
        marker: String,
        #[serde(default)]
        case_sensitive: bool,
    },
    Regex {
        pattern: String,
        #[serde(default)]
        case_sensitive: bool,
    },
    AnyOf {
        rules: Vec<MatchRule>,
    },
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for MatchRule {
    fn default() -> Self {
        MatchRule::Marker {
            marker: default_marker(),
            case_sensitive: false,
        }
    }
}

impl MatchRule {
    /// Set case sensitivity on this rule and every nested rule.
    pub fn set_case_sensitive(&mut self, value: bool) {
        match self {
            MatchRule::Marker { case_sensitive, .. } | MatchRule::Regex { case_sensitive, .. } => {
                *case_sensitive = value
            }
            MatchRule::AnyOf { rules } => {
                for rule in rules {
                    rule.set_case_sensitive(value);
                }
            }
        }
    }

    /// Compile into a matcher. Fails only on an invalid regex.
    pub fn compile(&self) -> Result<Box<dyn LineMatcher>> {
        match self {
            MatchRule::Marker {
                marker,
                case_sensitive,
            } => Ok(Box::new(MarkerMatcher::new(marker, *case_sensitive))),
            MatchRule::Regex {
                pattern,
                case_sensitive,
            } => Ok(Box::new(RegexMatcher::new(pattern, *case_sensitive)?)),
            MatchRule::AnyOf { rules } => {
                let compiled = rules
                    .iter()
                    .map(|rule| rule.compile())
                    .collect::<Result<Vec<_>>>()?;
                Ok(Box::new(AnyOf::new(compiled)))
            }
        }
    }
}
