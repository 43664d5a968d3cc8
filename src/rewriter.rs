//! Rewriting engine that expands a [`GrammarDefinition`] into a symbol string.
//!
//! The entry point is [`Rewriter`]. Configure it with a [`RewriterConfig`],
//! then call [`Rewriter::expand`] with a grammar. Each pass is a single
//! left-to-right scan over the current string; at every position the rules
//! are probed shortest-pattern-first, and replacement text is skipped rather
//! than rescanned within the same pass (it *is* rescanned by the next pass).

use crate::grammar::{GrammarDefinition, ProductionRule};
use thiserror::Error;

/// Configuration for grammar expansion.
#[derive(Clone, Debug)]
pub struct RewriterConfig {
    /// Maximum byte length the working string may reach. String growth is
    /// exponential for any rule whose replacement is longer than its pattern,
    /// so expansion aborts with [`RewriteError::ResourceLimitExceeded`]
    /// instead of letting allocation fail unpredictably.
    pub max_length: usize,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            max_length: 4 * 1024 * 1024,
        }
    }
}

/// Errors produced by [`Rewriter::expand`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The grammar's iteration count (base plus any host adjustment) is
    /// negative. Never clamped or wrapped; the host decides what to show.
    #[error("requested iteration count {requested} is negative")]
    InvalidIterationCount { requested: i32 },

    /// A pass grew the string beyond [`RewriterConfig::max_length`].
    #[error("expansion reached {reached} bytes, exceeding the limit of {limit}")]
    ResourceLimitExceeded { limit: usize, reached: usize },
}

/// Expands Lindenmayer grammars by repeated shortest-match-first substitution.
pub struct Rewriter {
    config: RewriterConfig,
}

impl Rewriter {
    /// Creates a rewriter with the given configuration.
    pub fn new(config: RewriterConfig) -> Self {
        Self { config }
    }

    /// Applies `grammar.iterations` rewrite passes to the axiom and returns
    /// the expanded string.
    ///
    /// With `iterations == 0` the axiom is returned unchanged. The result is
    /// a pure function of the grammar: re-running with the same input yields
    /// a byte-identical string.
    pub fn expand(&self, grammar: &GrammarDefinition) -> Result<String, RewriteError> {
        if grammar.iterations < 0 {
            return Err(RewriteError::InvalidIterationCount {
                requested: grammar.iterations,
            });
        }

        let max_pattern = grammar.max_pattern_len();
        let mut word = grammar.axiom.clone();
        for _ in 0..grammar.iterations {
            word = self.rewrite_pass(&word, &grammar.rules, max_pattern)?;
        }
        Ok(word)
    }

    /// One left-to-right scan-and-substitute sweep, building a fresh string.
    ///
    /// Appending the replacement to the output and advancing the input cursor
    /// past the matched pattern is equivalent to in-place replacement with a
    /// cursor jump: inserted text is never rescanned within the pass.
    fn rewrite_pass(
        &self,
        word: &str,
        rules: &[ProductionRule],
        max_pattern: usize,
    ) -> Result<String, RewriteError> {
        let mut out = String::with_capacity(word.len());
        let mut cursor = 0;

        while cursor < word.len() {
            let rest = &word[cursor..];
            match match_rule(rest, rules, max_pattern) {
                Some(rule) => {
                    out.push_str(&rule.replacement);
                    cursor += rule.pattern.len();
                }
                None => {
                    // Unreachable only for empty `rest`, which the loop guard excludes.
                    if let Some(symbol) = rest.chars().next() {
                        out.push(symbol);
                        cursor += symbol.len_utf8();
                    }
                }
            }

            if out.len() > self.config.max_length {
                return Err(RewriteError::ResourceLimitExceeded {
                    limit: self.config.max_length,
                    reached: out.len(),
                });
            }
        }

        Ok(out)
    }
}

/// Probes prefixes of `rest` in order of increasing symbol length and returns
/// the first rule whose pattern matches.
///
/// Shortest match wins: if both a 1-symbol and a longer pattern have rules at
/// this position, the 1-symbol rule is applied. Alphabets are tiny, so a
/// linear scan over the rule table beats a map lookup that would have to
/// allocate a key per probe.
fn match_rule<'a>(
    rest: &str,
    rules: &'a [ProductionRule],
    max_pattern: usize,
) -> Option<&'a ProductionRule> {
    let limit = max_pattern.min(rest.len());
    for (idx, symbol) in rest.char_indices() {
        let end = idx + symbol.len_utf8();
        if end > limit {
            break;
        }
        if let Some(rule) = rules.iter().find(|r| r.pattern == rest[..end]) {
            return Some(rule);
        }
    }
    None
}
