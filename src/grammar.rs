//! Grammar definition types consumed by the [`Rewriter`](crate::rewriter::Rewriter).
//!
//! A [`GrammarDefinition`] is a fully parsed, immutable value. Reading grammar
//! files (or any other textual format) is the host's job; this crate only
//! defines the shape of the data it expects.

use serde::{Deserialize, Serialize};

/// A single production rule mapping a pattern to its replacement.
///
/// Patterns are usually one character but may span several (e.g. `"AB"`).
/// Within one grammar every pattern must be unique; a symbol either has
/// exactly one rule or none.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRule {
    pub pattern: String,
    pub replacement: String,
}

/// An immutable Lindenmayer grammar: axiom, production rules, pass count and
/// the turn angle used by the rotation symbols.
///
/// `iterations` is signed so a host can apply a detail delta (see
/// [`adjusted`](Self::adjusted)) without deciding the out-of-range policy
/// itself; [`Rewriter::expand`](crate::rewriter::Rewriter::expand) rejects a
/// negative value explicitly rather than clamping or wrapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarDefinition {
    /// The initial symbol string before any rewrite pass. Must be non-empty
    /// to produce any output.
    pub axiom: String,

    /// Production rules, matched shortest-pattern-first at each scan position.
    pub rules: Vec<ProductionRule>,

    /// Number of rewrite passes to apply.
    pub iterations: i32,

    /// Angle in degrees applied by the `+` / `-` turn symbols.
    pub turn_angle_degrees: i32,
}

impl GrammarDefinition {
    /// Creates a grammar with no rules. Add rules with [`with_rule`](Self::with_rule).
    pub fn new(axiom: impl Into<String>, iterations: i32, turn_angle_degrees: i32) -> Self {
        Self {
            axiom: axiom.into(),
            rules: Vec::new(),
            iterations,
            turn_angle_degrees,
        }
    }

    /// Appends a production rule (builder pattern).
    pub fn with_rule(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.rules.push(ProductionRule {
            pattern: pattern.into(),
            replacement: replacement.into(),
        });
        self
    }

    /// Returns a copy with `iterations` shifted by `delta`.
    ///
    /// The result may be negative; expansion then fails with
    /// [`RewriteError::InvalidIterationCount`](crate::rewriter::RewriteError::InvalidIterationCount).
    pub fn adjusted(&self, delta: i32) -> Self {
        Self {
            iterations: self.iterations + delta,
            ..self.clone()
        }
    }

    /// Byte length of the longest rule pattern, bounding the match scan.
    pub(crate) fn max_pattern_len(&self) -> usize {
        self.rules.iter().map(|r| r.pattern.len()).max().unwrap_or(0)
    }
}
