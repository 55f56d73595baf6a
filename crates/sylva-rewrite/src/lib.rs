//! # sylva-rewrite
//!
//! Guarded tree-pattern rewriting for sylva expression trees.
//!
//! This crate provides:
//! - [`Pattern`] descriptors: labelled tree shapes independent of variants
//! - Typed matching: expected variants per position plus optional guards
//! - [`Rewrite`] scopes: the only place a rule may mutate a tree
//! - [`Rule`]s, tagged and grouped into [`RuleSet`]s
//! - The [`Driver`], which applies a rule set to a fixpoint or a budget
//!
//! ## Matching pipeline
//!
//! A rule is attempted at a location in three steps: the pattern binds its
//! positions structurally, every bound node is checked against the
//! expected variant, and the guard runs over the typed match. Only when
//! all three succeed does the rewrite action run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod cost;
pub mod driver;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod rule;
pub mod ruleset;

mod proptests;

pub use action::{Action, Rewrite};
pub use cost::{AstSize, CostFunction, WeightedCost};
pub use driver::{Driver, DriverConfig, RewriteStats, StopReason, Strategy};
pub use error::{PatternError, RewriteError, RuleError};
pub use matcher::{Expect, Guard, Match};
pub use pattern::{Pattern, Position, Slot};
pub use rule::{Rule, RuleBuilder, Tag, TagSet};
pub use ruleset::RuleSet;
