//! # lsystem-turtle
//!
//! A sovereign generation crate that expands Lindenmayer grammars and
//! interprets the result as 2D turtle graphics, producing engine-agnostic
//! line-segment geometry.
//!
//! It decouples the *grammar* (axiom + production rules) from the *figure*
//! (an ordered vertex buffer) so hosts can feed the output to any renderer:
//! a GPU line-list, an SVG writer, or a plotter pipeline.

pub mod figure;
pub mod grammar;
pub mod interpreter;
pub mod rewriter;
pub mod turtle;

pub use figure::*;
pub use grammar::*;
pub use interpreter::*;
pub use rewriter::*;
pub use turtle::*;

use thiserror::Error;

/// Errors from the combined expand-then-interpret pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    #[error(transparent)]
    Interpret(#[from] InterpretError),
}

/// Expands `grammar` and interprets the result in one step.
///
/// The grammar's own `turn_angle_degrees` is passed through to the
/// interpreter. Every run re-derives the full pipeline from the grammar;
/// nothing is cached between calls.
pub fn generate<A: Clone>(
    grammar: &GrammarDefinition,
    rewriter: &Rewriter,
    interpreter: &TurtleInterpreter<A>,
) -> Result<Figure<A>, Error> {
    let expanded = rewriter.expand(grammar)?;
    let figure = interpreter.interpret(&expanded, grammar.turn_angle_degrees)?;
    Ok(figure)
}
