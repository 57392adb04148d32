use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::dom::ElementNode;
use crate::error::{Error, Result};

/// Unanchored regular expression tested against a node's raw tag literal.
///
/// `<p>` matches `<p>` but also anything containing it; `<pre>|<p>` matches
/// either.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Pattern> {
        Ok(Pattern {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn literal(text: &str) -> Pattern {
        Pattern::from_regex(&regex::escape(text))
    }

    pub fn any_of(literals: &[&str]) -> Pattern {
        let alternation = literals
            .iter()
            .map(|literal| regex::escape(literal))
            .collect::<Vec<_>>()
            .join("|");

        Pattern::from_regex(&alternation)
    }

    // Only for patterns built from escaped literals.
    fn from_regex(pattern: &str) -> Pattern {
        Pattern {
            regex: Regex::new(pattern).expect("escaped literals always compile"),
        }
    }

    pub fn is_match(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Pattern> {
        Pattern::new(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First element in pre-order, starting at `node` itself, whose tag matches.
///
/// A matching node is returned without looking at its descendants, and the
/// scan over children stops at the first subtree that yields a match.
pub fn find_first<'a>(pattern: &Pattern, node: &'a ElementNode) -> Option<&'a ElementNode> {
    if pattern.is_match(&node.tag) {
        return Some(node);
    }

    node.elements().find_map(|child| find_first(pattern, child))
}

/// Calls `visit` on the first matching element below (or at) `node`.
///
/// Despite the name, at most one node is ever visited: a second match, even
/// a sibling of the first, is never reached. Returns whether `visit` ran.
pub fn findall<'a>(
    pattern: &Pattern,
    node: &'a ElementNode,
    mut visit: impl FnMut(&'a ElementNode),
) -> bool {
    match find_first(pattern, node) {
        Some(found) => {
            visit(found);
            true
        }
        None => false,
    }
}
