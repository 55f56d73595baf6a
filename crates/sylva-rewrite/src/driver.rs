//! The rewrite driver.
//!
//! The driver applies a rule set to a tree until a complete traversal
//! finds no applicable rule (a fixpoint), or until its rewrite budget is
//! spent. Traversal is post-order so that operands are simplified before
//! the operators that contain them; after a rewrite the driver rescans the
//! rewritten subtree rather than resuming a stale cursor.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use sylva_core::{Node, Path};
use tracing::{debug, trace};

use crate::cost::{AstSize, CostFunction};
use crate::error::RewriteError;
use crate::rule::Rule;
use crate::ruleset::RuleSet;

/// How the driver revisits the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Rescan rewritten subtrees and repeat passes until a clean pass.
    #[default]
    Fixpoint,
    /// Try every location once, in post-order, and stop.
    SinglePass,
}

/// Configuration for the rewrite driver.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Maximum number of rewrites in one session.
    pub iter_limit: usize,
    /// Traversal strategy.
    pub strategy: Strategy,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            iter_limit: 10_000,
            strategy: Strategy::Fixpoint,
        }
    }
}

impl DriverConfig {
    /// Sets the rewrite budget.
    #[must_use]
    pub fn with_iter_limit(mut self, iter_limit: usize) -> Self {
        self.iter_limit = iter_limit;
        self
    }

    /// Sets the traversal strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// A complete pass found nothing to rewrite.
    Saturated,
    /// The single pass requested by [`Strategy::SinglePass`] finished
    /// after rewriting something.
    SinglePass,
    /// A rule still applied when the rewrite budget ran out.
    IterationLimit,
}

/// Statistics about a rewrite session.
#[derive(Clone, Debug)]
pub struct RewriteStats {
    /// Number of rewrites performed.
    pub rewrites: usize,
    /// Number of full passes over the tree.
    pub passes: usize,
    /// Reason the driver stopped.
    pub stop_reason: StopReason,
    /// How many times each rule fired.
    pub fired: FxHashMap<String, usize>,
    /// Tree size before the session.
    pub size_before: usize,
    /// Tree size after the session.
    pub size_after: usize,
}

impl RewriteStats {
    /// Returns true if the session reached a fixpoint.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::Saturated
    }

    /// Returns how many times the rule called `name` fired.
    #[must_use]
    pub fn fired(&self, name: &str) -> usize {
        self.fired.get(name).copied().unwrap_or(0)
    }
}

#[derive(Default)]
struct Session {
    rewrites: usize,
    exhausted: bool,
    fired: FxHashMap<String, usize>,
}

/// Applies a rule set to expression trees.
#[derive(Clone, Debug)]
pub struct Driver {
    config: DriverConfig,
    rules: RuleSet,
}

impl Driver {
    /// Creates a driver with the default configuration.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            config: DriverConfig::default(),
            rules,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rewrites `root` in place and reports what happened.
    ///
    /// # Errors
    ///
    /// Stops at the first contract violation raised by a rewrite action;
    /// the tree may then be partially rewritten.
    pub fn run(&self, root: &mut Node) -> Result<RewriteStats, RewriteError> {
        let size_before = AstSize.cost(root);
        let mut session = Session::default();
        let mut passes = 0;

        let stop_reason = loop {
            passes += 1;
            let changed = self.sweep(root, &Path::root(), &mut session)?;
            trace!(pass = passes, rewrites = session.rewrites, changed, "pass complete");

            if session.exhausted {
                break StopReason::IterationLimit;
            }
            if !changed {
                break StopReason::Saturated;
            }
            if self.config.strategy == Strategy::SinglePass {
                break StopReason::SinglePass;
            }
        };

        debug!(
            ?stop_reason,
            rewrites = session.rewrites,
            passes,
            "rewrite session finished"
        );

        Ok(RewriteStats {
            rewrites: session.rewrites,
            passes,
            stop_reason,
            fired: session.fired,
            size_before,
            size_after: AstSize.cost(root),
        })
    }

    /// Rewrites `root` and returns the resulting tree.
    ///
    /// # Errors
    ///
    /// See [`Driver::run`].
    pub fn rewrite(&self, mut root: Node) -> Result<(Node, RewriteStats), RewriteError> {
        let stats = self.run(&mut root)?;
        Ok((root, stats))
    }

    /// Rewrites independent trees in parallel.
    ///
    /// Each tree gets its own session; results are in input order.
    pub fn run_many(&self, roots: &mut [Node]) -> Vec<Result<RewriteStats, RewriteError>> {
        roots.par_iter_mut().map(|root| self.run(root)).collect()
    }

    fn first_match(&self, node: &Node) -> Option<(&Rule, Vec<Path>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.find(node).map(|paths| (rule, paths)))
    }

    fn sweep(&self, node: &mut Node, here: &Path, session: &mut Session) -> Result<bool, RewriteError> {
        let mut changed = false;
        loop {
            for (i, child) in node.children_mut().iter_mut().enumerate() {
                changed |= self.sweep(child, &here.child(i), session)?;
                if session.exhausted {
                    return Ok(changed);
                }
            }

            let Some((rule, paths)) = self.first_match(node) else {
                return Ok(changed);
            };
            if session.rewrites >= self.config.iter_limit {
                session.exhausted = true;
                return Ok(changed);
            }

            debug!(rule = rule.name(), at = %here, before = %node, "rewriting");
            rule.rewrite(node, paths)?;
            session.rewrites += 1;
            *session.fired.entry(rule.name().to_string()).or_insert(0) += 1;
            changed = true;

            if self.config.strategy == Strategy::SinglePass {
                return Ok(true);
            }
        }
    }
}
