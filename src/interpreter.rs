//! Interpreter that converts an expanded symbol string into a [`Figure`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::interpret`] with the output of
//! [`Rewriter::expand`](crate::rewriter::Rewriter::expand).

use crate::figure::{Figure, Vertex};
use crate::turtle::{TurtleOp, TurtleState};
use glam::{Mat2, Vec2};
use std::collections::HashMap;
use thiserror::Error;

/// What to do with a symbol that has no registered operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Abort interpretation with [`InterpretError::UnhandledSymbol`],
    /// discarding everything emitted so far. This is the default.
    #[default]
    Abort,
    /// Consume the symbol, log a warning, and continue.
    Skip,
}

/// Errors produced by [`TurtleInterpreter::interpret`].
///
/// Positions are symbol (char) indices into the interpreted string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterpretError {
    /// A symbol with no registered operation was met under
    /// [`UnknownSymbolPolicy::Abort`].
    #[error("unhandled symbol '{symbol}' at position {position}")]
    UnhandledSymbol { symbol: char, position: usize },

    /// A pop symbol occurred with no matching push. Never continuable: any
    /// geometry after an unbalanced `]` would be meaningless.
    #[error("pop at position {position} has no matching push")]
    StackUnderflow { position: usize },
}

/// Configuration for turtle interpretation.
///
/// `A` is the opaque decoration attribute stamped onto every emitted vertex,
/// e.g. a color. It is forwarded verbatim and constant across a run.
#[derive(Clone, Debug)]
pub struct TurtleConfig<A> {
    /// Distance covered by one forward step.
    pub step_length: f32,
    /// Starting position of the turtle.
    pub start: Vec2,
    /// Decoration attached to every emitted vertex.
    pub attribute: A,
    /// Policy for symbols with no registered operation.
    pub unknown_symbols: UnknownSymbolPolicy,
}

impl<A: Default> Default for TurtleConfig<A> {
    fn default() -> Self {
        Self {
            step_length: 0.03,
            start: Vec2::ZERO,
            attribute: A::default(),
            unknown_symbols: UnknownSymbolPolicy::default(),
        }
    }
}

/// Interprets expanded symbol strings as 2D turtle graphics.
pub struct TurtleInterpreter<A> {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig<A>,
}

impl<A: Clone> TurtleInterpreter<A> {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before
    /// calling [`interpret`](Self::interpret).
    pub fn new(config: TurtleConfig<A>) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional symbol-to-operation mappings.
    ///
    /// `F`/`G` draw forward, `A`/`B` move without drawing, `+`/`-` turn,
    /// `[`/`]` push and pop the branch stack, `X`/`Y` are consumed with no
    /// effect (structural symbols common in plant grammars).
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::DrawForward),
            ('G', TurtleOp::DrawForward),
            ('A', TurtleOp::MoveForward),
            ('B', TurtleOp::MoveForward),
            ('-', TurtleOp::TurnNegative),
            ('+', TurtleOp::TurnPositive),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
            ('X', TurtleOp::Skip),
            ('Y', TurtleOp::Skip),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Walks `symbols` left to right and returns the emitted line segments.
    ///
    /// The turtle starts at `config.start` heading along `+X` with a step of
    /// `config.step_length`. `turn_angle_degrees` (positive = counterclockwise)
    /// is taken from the grammar that produced the string.
    ///
    /// Errors abort the whole run: no partial figure is ever returned. Under
    /// [`UnknownSymbolPolicy::Skip`] unmapped symbols are consumed with a
    /// logged warning instead of raising
    /// [`InterpretError::UnhandledSymbol`].
    pub fn interpret(
        &self,
        symbols: &str,
        turn_angle_degrees: i32,
    ) -> Result<Figure<A>, InterpretError> {
        let angle = (turn_angle_degrees as f32).to_radians();
        let rotation = Mat2::from_angle(angle);
        // A pure rotation's inverse is its transpose.
        let inverse_rotation = rotation.transpose();

        let mut turtle = TurtleState::new(
            self.config.start,
            Vec2::new(self.config.step_length, 0.0),
        );
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut figure = Figure::new();

        for (position, symbol) in symbols.chars().enumerate() {
            let Some(op) = self.op_map.get(&symbol) else {
                match self.config.unknown_symbols {
                    UnknownSymbolPolicy::Abort => {
                        return Err(InterpretError::UnhandledSymbol { symbol, position });
                    }
                    UnknownSymbolPolicy::Skip => {
                        log::warn!("skipping unhandled symbol '{symbol}' at position {position}");
                        continue;
                    }
                }
            };

            match op {
                TurtleOp::DrawForward => {
                    let from = self.vertex(turtle.position);
                    turtle.advance();
                    figure.push_segment(from, self.vertex(turtle.position));
                }
                TurtleOp::MoveForward => turtle.advance(),
                TurtleOp::TurnNegative => turtle.rotate(inverse_rotation),
                TurtleOp::TurnPositive => turtle.rotate(rotation),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => {
                    turtle = stack
                        .pop()
                        .ok_or(InterpretError::StackUnderflow { position })?;
                }
                TurtleOp::Skip => {}
            }
        }

        Ok(figure)
    }

    fn vertex(&self, position: Vec2) -> Vertex<A> {
        Vertex {
            position,
            attribute: self.config.attribute.clone(),
        }
    }
}
