//! First-order terms and literals.
//!
//! A [`Literal`] is the payload of a predicate node: a predicate name, an
//! ordered list of argument terms and a polarity. Terms are either
//! variables or applications of a function symbol to argument terms
//! (constants are zero-argument applications).

use std::fmt;

use crate::var::VarIndex;

/// A first-order term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A first-order variable.
    Var(VarIndex),
    /// A function symbol applied to arguments. Constants have no arguments.
    App {
        /// The head symbol.
        symbol: String,
        /// The argument terms.
        args: Vec<Term>,
    },
}

impl Term {
    /// Creates a variable term.
    #[must_use]
    pub fn var(index: u32) -> Self {
        Term::Var(VarIndex::new(index))
    }

    /// Creates a constant (zero-argument application).
    #[must_use]
    pub fn constant(symbol: impl Into<String>) -> Self {
        Term::App {
            symbol: symbol.into(),
            args: Vec::new(),
        }
    }

    /// Creates a function application.
    #[must_use]
    pub fn app(symbol: impl Into<String>, args: Vec<Term>) -> Self {
        Term::App {
            symbol: symbol.into(),
            args,
        }
    }

    /// Returns true if `var` occurs anywhere in this term.
    #[must_use]
    pub fn contains_var(&self, var: VarIndex) -> bool {
        match self {
            Term::Var(v) => *v == var,
            Term::App { args, .. } => args.iter().any(|arg| arg.contains_var(var)),
        }
    }

    /// Calls `f` on every variable occurrence, left to right.
    pub fn for_each_var(&self, f: &mut impl FnMut(VarIndex)) {
        match self {
            Term::Var(v) => f(*v),
            Term::App { args, .. } => {
                for arg in args {
                    arg.for_each_var(f);
                }
            }
        }
    }
}

/// A predicate term with polarity, the unit of a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The predicate name.
    pub name: String,
    /// The argument terms.
    pub args: Vec<Term>,
    /// Whether the predicate is negated.
    pub negated: bool,
}

impl Literal {
    /// Creates a positive literal.
    #[must_use]
    pub fn positive(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            args,
            negated: false,
        }
    }

    /// Creates a negated literal.
    #[must_use]
    pub fn negative(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            args,
            negated: true,
        }
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Returns true if the two literals have opposite polarity.
    #[must_use]
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.negated != other.negated
    }

    /// Returns the same literal with its polarity flipped.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "X{v}"),
            Term::App { symbol, args } => {
                write!(f, "{symbol}")?;
                if !args.is_empty() {
                    write_args(f, args)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{}", self.name)?;
        write_args(f, &self.args)
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Term]) -> fmt::Result {
    write!(f, "(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    write!(f, ")")
}
