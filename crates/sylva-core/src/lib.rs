//! # sylva-core
//!
//! Expression tree model for the sylva rewriting engine.
//!
//! This crate provides:
//! - The [`Node`] sum type covering algebraic, logical and first-order
//!   predicate variants
//! - Positional addressing through [`Path`]
//! - First-order [`Term`]s and [`Literal`]s used by resolution
//! - A strict-tree checker and numeric evaluation
//!
//! ## Ownership
//!
//! Nodes own their children. A subtree that must appear in two places is
//! duplicated with [`Clone`], so a mutation through one parent can never be
//! observed through another.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod check;
pub mod error;
pub mod eval;
pub mod node;
pub mod path;
pub mod term;
pub mod var;

mod proptests;

pub use check::check_strict_tree;
pub use error::NodeError;
pub use node::{Constant, Kind, Node};
pub use path::Path;
pub use term::{Literal, Term};
pub use var::VarIndex;
