//! Rule sets.
//!
//! Rules are shared behind `Arc`, so filtering a set by tag or name is
//! cheap and never duplicates closures.

use std::sync::Arc;

use crate::rule::{Rule, Tag};

/// An ordered collection of rules. Earlier rules are tried first.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Arc<Rule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(Arc::new(rule));
    }

    /// Returns the subset of rules carrying `tag`, in order.
    #[must_use]
    pub fn with_tag(&self, tag: Tag) -> Self {
        self.filter(|rule| rule.has_tag(tag))
    }

    /// Returns the subset of rules accepted by `keep`, in order.
    #[must_use]
    pub fn filter(&self, keep: impl Fn(&Rule) -> bool) -> Self {
        Self {
            rules: self.rules.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Returns the set without the rule called `name`.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        self.filter(|rule| rule.name() != name)
    }

    /// Returns the rule called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().map(AsRef::as_ref).find(|r| r.name() == name)
    }

    /// Returns the rule names, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Iterates over the rules, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter.into_iter().map(Arc::new));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Expect;
    use sylva_core::Node;

    fn rule(name: &str, tags: &[Tag]) -> Rule {
        Rule::builder(name)
            .tags(tags.iter().copied())
            .pattern("x")
            .expect([Expect::Any])
            .action(|rw| rw.replace("x", Node::number(0.0)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_filtering() {
        let set: RuleSet = [
            rule("a", &[Tag::Safe, Tag::Algebraic]),
            rule("b", &[Tag::Logic]),
            rule("c", &[Tag::Safe, Tag::Logic]),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.with_tag(Tag::Safe).names(), ["a", "c"]);
        assert_eq!(set.with_tag(Tag::Logic).without("c").names(), ["b"]);
        assert!(set.with_tag(Tag::Resolution).is_empty());
        assert!(set.get("b").is_some());
        assert!(set.get("z").is_none());
    }
}
