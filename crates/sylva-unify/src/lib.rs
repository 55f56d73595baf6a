//! # sylva-unify
//!
//! Structural equality, first-order unification and the resolution rule
//! for sylva expression trees.
//!
//! This crate provides:
//! - [`structurally_equal`]: strict or alpha-equivalent tree comparison
//! - [`Unifier`]: most-general-unifier computation over literal arguments
//! - [`Substitution`]: idempotent variable bindings, applied across clauses
//! - [`resolution_rule`]: the resolution inference as a [`sylva_rewrite::Rule`]
//!
//! Unification failure is an ordinary outcome reported as `None`; it never
//! raises an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod equality;
pub mod resolution;
pub mod substitution;
pub mod unifier;

mod proptests;

pub use equality::{literals_equal, structurally_equal};
pub use resolution::{resolution_rule, resolution_rule_with};
pub use substitution::{apply_substitution, Substitution};
pub use unifier::{can_unify, compute_unifier, Unifier};
