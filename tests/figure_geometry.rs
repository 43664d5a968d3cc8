// tests/figure_geometry.rs
use glam::{Vec2, Vec3};
use lsystem_turtle::{
    InterpretError, TurtleConfig, TurtleInterpreter, UnknownSymbolPolicy,
};

const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

fn setup() -> TurtleInterpreter<Vec3> {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        step_length: 1.0,
        start: Vec2::ZERO,
        attribute: GREEN,
        unknown_symbols: UnknownSymbolPolicy::Abort,
    });
    interpreter.populate_standard_symbols();
    interpreter
}

fn assert_close(a: Vec2, b: Vec2) {
    assert!((a - b).length() < 1e-5, "expected {b:?}, got {a:?}");
}

#[test]
fn one_segment_per_draw_symbol() {
    let figure = setup().interpret("FFF", 90).unwrap();
    assert_eq!(figure.segment_count(), 3);
    assert_eq!(figure.len(), 6, "vertex count is always even");
    for (from, to) in figure.segments() {
        let length = (to.position - from.position).length();
        assert!((length - 1.0).abs() < 1e-5, "each segment spans one step");
    }
}

#[test]
fn move_advances_without_drawing() {
    // F draws (0,0)->(1,0); A moves the pen to (2,0) silently; the second
    // segment starts where A left off.
    let figure = setup().interpret("FAF", 90).unwrap();
    assert_eq!(figure.segment_count(), 2);
    let vertices = figure.vertices();
    assert_close(vertices[2].position, Vec2::new(2.0, 0.0));
    assert_close(vertices[3].position, Vec2::new(3.0, 0.0));
}

#[test]
fn positive_turn_rotates_counterclockwise() {
    let figure = setup().interpret("F+F", 90).unwrap();
    let vertices = figure.vertices();
    // After a +90 turn the heading points along +Y.
    assert_close(vertices[3].position, Vec2::new(1.0, 1.0));
}

#[test]
fn negative_turn_is_the_inverse_of_positive() {
    let figure = setup().interpret("+-F", 33).unwrap();
    let vertices = figure.vertices();
    assert_close(vertices[1].position, Vec2::new(1.0, 0.0));
}

#[test]
fn branch_restores_position_and_heading() {
    let interpreter = setup();
    let branched = interpreter.interpret("F[+F]F", 25).unwrap();
    let straight = interpreter.interpret("FF", 25).unwrap();

    assert_eq!(branched.segment_count(), 3);
    // The bracketed branch must leave the main path untouched: the final
    // position matches a plain two-step walk.
    let branched_end = branched.vertices().last().unwrap().position;
    let straight_end = straight.vertices().last().unwrap().position;
    assert_close(branched_end, straight_end);
}

#[test]
fn pop_on_empty_stack_is_an_error() {
    let err = setup().interpret("F]F", 90).unwrap_err();
    assert_eq!(err, InterpretError::StackUnderflow { position: 1 });
}

#[test]
fn unknown_symbol_aborts_by_default() {
    let err = setup().interpret("F~F", 90).unwrap_err();
    assert_eq!(
        err,
        InterpretError::UnhandledSymbol {
            symbol: '~',
            position: 1
        }
    );
}

#[test]
fn unknown_symbol_can_be_skipped_by_policy() {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        step_length: 1.0,
        start: Vec2::ZERO,
        attribute: GREEN,
        unknown_symbols: UnknownSymbolPolicy::Skip,
    });
    interpreter.populate_standard_symbols();

    let figure = interpreter.interpret("F~F", 90).unwrap();
    assert_eq!(figure.segment_count(), 2, "the '~' is consumed, drawing continues");
}

#[test]
fn vertices_carry_the_configured_attribute() {
    let figure = setup().interpret("FF", 90).unwrap();
    assert!(figure.vertices().iter().all(|v| v.attribute == GREEN));
}

#[test]
fn interpretation_is_deterministic() {
    let interpreter = setup();
    let first = interpreter.interpret("F[+F][-F]FG", 25).unwrap();
    let second = interpreter.interpret("F[+F][-F]FG", 25).unwrap();
    assert_eq!(first, second);
}
