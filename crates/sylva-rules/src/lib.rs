//! # sylva-rules
//!
//! Rule tables for the sylva rewriting engine.
//!
//! This crate provides:
//! - Algebraic simplification: constant folding and identities
//! - Symbolic differentiation
//! - Propositional logic identities
//! - The resolution rule, re-exported from `sylva-unify`
//!
//! Every table is ordinary client data built with [`Rule::builder`]; the
//! engine itself knows nothing about any of these identities.
//!
//! ## Example
//!
//! ```
//! use sylva_core::Node;
//! use sylva_rewrite::Driver;
//!
//! let rules = sylva_rules::safe_rules().unwrap();
//! let expr = Node::plus(Node::number(2.0), Node::number(3.0));
//! let (result, stats) = Driver::new(rules).rewrite(expr).unwrap();
//! assert_eq!(result, Node::number(5.0));
//! assert!(stats.converged());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod differentiation;
pub mod logic;

mod proptests;
#[cfg(test)]
mod tests;

use sylva_rewrite::{Rule, RuleError, RuleSet, Tag};

pub use sylva_unify::resolution_rule;

/// Collects every rule: algebra, differentiation, logic and resolution.
///
/// # Errors
///
/// Fails only if a rule table entry is malformed.
pub fn all_rules() -> Result<RuleSet, RuleError> {
    let mut rules = RuleSet::new();
    rules.extend(algebra::rules()?);
    rules.extend(differentiation::rules()?);
    rules.extend(logic::rules()?);
    rules.push(resolution_rule()?);
    Ok(rules)
}

/// Collects the rules tagged safe for unconditional application.
///
/// # Errors
///
/// Fails only if a rule table entry is malformed.
pub fn safe_rules() -> Result<RuleSet, RuleError> {
    Ok(all_rules()?.with_tag(Tag::Safe))
}

/// Looks up a single rule by name across every table.
///
/// # Errors
///
/// Fails only if a rule table entry is malformed.
pub fn rule(name: &str) -> Result<Option<Rule>, RuleError> {
    let tables = [algebra::rules()?, differentiation::rules()?, logic::rules()?];
    let found = tables.into_iter().flatten().find(|r| r.name() == name);
    match found {
        Some(rule) => Ok(Some(rule)),
        None if name == "resolution" => resolution_rule().map(Some),
        None => Ok(None),
    }
}
