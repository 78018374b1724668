//! Name-based character classification.
//!
//! A [`Classifier`] holds two matcher lists. A name is classified as blipped
//! if any entry of the `affected` list matches it, otherwise as safe if any
//! entry of the `unaffected` list matches, otherwise as unknown. The
//! `affected` list always wins when both match.
//!
//! Lists are loaded from JSON of the form:
//!
//! ```json
//! {
//!   "affected":   ["Peter Parker", {"exact": "Groot"}],
//!   "unaffected": [{"contains": "Stark"}]
//! }
//! ```
//!
//! A bare string is a substring matcher.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roster;
use crate::types::Flag;

/// A single name pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Matcher {
    /// Matches when the name equals the pattern.
    Exact(String),
    /// Matches when the name contains the pattern anywhere.
    Contains(String),
}

impl Matcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Exact(pattern) => name == pattern,
            Matcher::Contains(pattern) => name.contains(pattern.as_str()),
        }
    }

    fn pattern(&self) -> &str {
        match self {
            Matcher::Exact(p) | Matcher::Contains(p) => p,
        }
    }
}

/// On-disk form of a matcher: a bare string or an explicit tagged matcher.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMatcher {
    Bare(String),
    Tagged(Matcher),
}

impl From<RawMatcher> for Matcher {
    fn from(raw: RawMatcher) -> Self {
        match raw {
            RawMatcher::Bare(s) => Matcher::Contains(s),
            RawMatcher::Tagged(m) => m,
        }
    }
}

#[derive(Deserialize)]
struct RawLists {
    #[serde(default)]
    affected: Vec<RawMatcher>,
    #[serde(default)]
    unaffected: Vec<RawMatcher>,
}

/// Assigns a [`Flag`] to a character name.
#[derive(Debug, Clone)]
pub struct Classifier {
    affected: Vec<Matcher>,
    unaffected: Vec<Matcher>,
}

impl Classifier {
    /// Build a classifier from explicit matcher lists.
    ///
    /// Rejects empty patterns: an empty substring would match every name.
    pub fn new(affected: Vec<Matcher>, unaffected: Vec<Matcher>) -> Result<Self, CoreError> {
        for (list, matchers) in [("affected", &affected), ("unaffected", &unaffected)] {
            if matchers.iter().any(|m| m.pattern().trim().is_empty()) {
                return Err(CoreError::Validation(format!(
                    "{list} list contains an empty pattern"
                )));
            }
        }
        Ok(Self {
            affected,
            unaffected,
        })
    }

    /// The built-in roster, matched by substring.
    pub fn builtin() -> Self {
        let to_matchers = |names: &[&str]| {
            names
                .iter()
                .map(|n| Matcher::Contains((*n).to_string()))
                .collect()
        };
        Self {
            affected: to_matchers(roster::BLIPPED),
            unaffected: to_matchers(roster::NOT_BLIPPED),
        }
    }

    /// Parse matcher lists from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let raw: RawLists = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("invalid classifier lists: {e}")))?;
        Self::new(
            raw.affected.into_iter().map(Matcher::from).collect(),
            raw.unaffected.into_iter().map(Matcher::from).collect(),
        )
    }

    /// Read and parse matcher lists from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Classify a character by display name.
    pub fn classify(&self, name: &str) -> Flag {
        if self.affected.iter().any(|m| m.matches(name)) {
            Some(true)
        } else if self.unaffected.iter().any(|m| m.matches(name)) {
            Some(false)
        } else {
            None
        }
    }

    pub fn affected(&self) -> &[Matcher] {
        &self.affected
    }

    pub fn unaffected(&self) -> &[Matcher] {
        &self.unaffected
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}
