//! Rules.
//!
//! A [`Rule`] packages a pattern, the expected variant of every declared
//! position, an optional guard and a rewrite action under a name and a set
//! of classification tags. Rules hold no mutable state and can be shared
//! across any number of rewrite sessions.

use std::fmt;

use sylva_core::{Node, Path};

use crate::action::{Action, Rewrite};
use crate::error::{RewriteError, RuleError};
use crate::matcher::{self, Expect, Guard, Match};
use crate::pattern::Pattern;

/// A classification tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Safe to apply unconditionally (the rewrite never loses information
    /// and does not grow the tree without bound).
    Safe,
    /// Produces a logically valid consequence.
    Deductive,
    /// Produces a plausible but not guaranteed consequence.
    Inductive,
    /// Algebraic simplification.
    Algebraic,
    /// Propositional or first-order logic.
    Logic,
    /// Symbolic differentiation.
    Differentiation,
    /// Resolution inference.
    Resolution,
}

impl Tag {
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// A small set of [`Tag`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u16);

impl TagSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the set with `tag` added.
    #[must_use]
    pub const fn with(self, tag: Tag) -> Self {
        Self(self.0 | tag.bit())
    }

    /// Returns true if `tag` is in the set.
    #[must_use]
    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Returns true if every tag of `other` is in the set.
    #[must_use]
    pub const fn contains_all(self, other: TagSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), TagSet::with)
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ALL: [Tag; 7] = [
            Tag::Safe,
            Tag::Deductive,
            Tag::Inductive,
            Tag::Algebraic,
            Tag::Logic,
            Tag::Differentiation,
            Tag::Resolution,
        ];
        f.debug_set()
            .entries(ALL.iter().filter(|t| self.contains(**t)))
            .finish()
    }
}

/// A named, tagged rewrite rule.
pub struct Rule {
    name: String,
    tags: TagSet,
    pattern: Pattern,
    expects: Vec<Expect>,
    guard: Option<Guard>,
    action: Action,
}

impl Rule {
    /// Starts building a rule called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            name: name.into(),
            tags: TagSet::empty(),
            pattern: None,
            expects: Vec::new(),
            guard: None,
            action: None,
        }
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the classification tags.
    #[must_use]
    pub fn tags(&self) -> TagSet {
        self.tags
    }

    /// Returns true if the rule carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns the pattern descriptor.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Finds the first binding at `node` that passes the structural,
    /// variant and guard checks. Has no side effects.
    #[must_use]
    pub fn find(&self, node: &Node) -> Option<Vec<Path>> {
        let mut found = None;
        self.pattern.for_each_binding(node, &mut |paths| {
            let ok = matcher::accepts(node, &self.pattern, paths, &self.expects, self.guard.as_ref());
            if ok {
                found = Some(paths.to_vec());
            }
            ok
        });
        found
    }

    /// Returns true if the rule applies at `node`.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        self.find(node).is_some()
    }

    /// Runs the rewrite action for a binding produced by [`Rule::find`].
    /// Clients use [`Rule::apply`].
    ///
    /// # Errors
    ///
    /// Propagates any contract violation raised by the action.
    pub(crate) fn rewrite(&self, node: &mut Node, paths: Vec<Path>) -> Result<(), RewriteError> {
        let mut scope = Rewrite::new(&self.name, node, &self.pattern, paths);
        (self.action)(&mut scope)?;
        scope.finish()
    }

    /// Attempts the rule at `node`: match, then rewrite.
    ///
    /// Returns whether the rule fired. Nothing is mutated unless the full
    /// match succeeds.
    ///
    /// # Errors
    ///
    /// Propagates any contract violation raised by the action.
    pub fn apply(&self, node: &mut Node) -> Result<bool, RewriteError> {
        match self.find(node) {
            Some(paths) => self.rewrite(node, paths).map(|()| true),
            None => Ok(false),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("pattern", &self.pattern.to_string())
            .field("expects", &self.expects)
            .field("guarded", &self.guard.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Rule`].
pub struct RuleBuilder {
    name: String,
    tags: TagSet,
    pattern: Option<Result<Pattern, crate::error::PatternError>>,
    expects: Vec<Expect>,
    guard: Option<Guard>,
    action: Option<Action>,
}

impl RuleBuilder {
    /// Adds classification tags.
    #[must_use]
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().fold(self.tags, TagSet::with);
        self
    }

    /// Sets the pattern descriptor.
    #[must_use]
    pub fn pattern(mut self, source: &str) -> Self {
        self.pattern = Some(Pattern::parse(source));
        self
    }

    /// Sets the expected variant of every position, in declaration order.
    #[must_use]
    pub fn expect(mut self, expects: impl IntoIterator<Item = Expect>) -> Self {
        self.expects = expects.into_iter().collect();
        self
    }

    /// Sets the guard predicate.
    #[must_use]
    pub fn guard(mut self, guard: impl Fn(&Match<'_>) -> bool + Send + Sync + 'static) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Sets the rewrite action.
    #[must_use]
    pub fn action(
        mut self,
        action: impl Fn(&mut Rewrite<'_>) -> Result<(), RewriteError> + Send + Sync + 'static,
    ) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Validates and assembles the rule.
    ///
    /// # Errors
    ///
    /// Fails on a missing or malformed pattern, a missing action, or an
    /// expected-variant list that does not cover every position.
    pub fn build(self) -> Result<Rule, RuleError> {
        let pattern = match self.pattern {
            Some(Ok(pattern)) => pattern,
            Some(Err(source)) => {
                return Err(RuleError::Pattern {
                    rule: self.name,
                    source,
                })
            }
            None => return Err(RuleError::MissingPattern(self.name)),
        };
        if self.expects.len() != pattern.len() {
            return Err(RuleError::ExpectCount {
                rule: self.name,
                positions: pattern.len(),
                expected: self.expects.len(),
            });
        }
        let Some(action) = self.action else {
            return Err(RuleError::MissingAction(self.name));
        };
        Ok(Rule {
            name: self.name,
            tags: self.tags,
            pattern,
            expects: self.expects,
            guard: self.guard,
            action,
        })
    }
}
