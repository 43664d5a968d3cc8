//! Turtle state and operations for 2D line-figure interpretation.

use glam::{Mat2, Vec2};
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// This is the unit saved and restored by the branch stack: position plus the
/// heading vector, whose magnitude is the per-step displacement. One snapshot
/// per `[` goes onto the stack, and the matching `]` restores it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current 2D position of the pen.
    pub position: Vec2,

    /// Displacement applied per forward step. Direction encodes the heading,
    /// length encodes the step size.
    pub heading: Vec2,
}

impl TurtleState {
    pub fn new(position: Vec2, heading: Vec2) -> Self {
        Self { position, heading }
    }

    /// Moves one step along the current heading.
    pub fn advance(&mut self) {
        self.position += self.heading;
    }

    /// Rotates the heading by the given rotation matrix, in place.
    pub fn rotate(&mut self, rotation: Mat2) {
        self.heading = rotation * self.heading;
    }
}

/// Operations the turtle performs in response to a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Move one step forward and emit a line segment (`F`, `G`).
    DrawForward,
    /// Move one step forward without drawing (`A`, `B`).
    MoveForward,
    /// Rotate the heading by minus the configured turn angle (`-`).
    TurnNegative,
    /// Rotate the heading by plus the configured turn angle (`+`).
    TurnPositive,
    /// Save the turtle state onto the branch stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// Consume the symbol with no state change (`X`, `Y`): grammar-structural
    /// symbols with no visual meaning.
    Skip,
}
