// tests/pipeline.rs
use glam::{Vec2, Vec3};
use lsystem_turtle::{
    generate, Error, GrammarDefinition, RewriteError, Rewriter, RewriterConfig, TurtleConfig,
    TurtleInterpreter, UnknownSymbolPolicy,
};

fn setup() -> (Rewriter, TurtleInterpreter<Vec3>) {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        step_length: 0.03,
        start: Vec2::new(-0.78, -0.16),
        attribute: Vec3::new(0.0, 1.0, 0.0),
        unknown_symbols: UnknownSymbolPolicy::Abort,
    });
    interpreter.populate_standard_symbols();
    (Rewriter::new(RewriterConfig::default()), interpreter)
}

#[test]
fn plant_grammar_end_to_end() {
    // Branching plant: every F becomes five Fs, so two passes draw 5^2
    // segments regardless of the brackets and turns around them.
    let grammar = GrammarDefinition::new("F", 2, 25).with_rule("F", "F[+F]F[-F]F");
    let (rewriter, interpreter) = setup();

    let figure = generate(&grammar, &rewriter, &interpreter).unwrap();
    assert_eq!(figure.segment_count(), 25);
    assert_eq!(figure.len() % 2, 0);
}

#[test]
fn rewrite_errors_propagate() {
    let grammar = GrammarDefinition::new("F", 0, 90).adjusted(-1);
    let (rewriter, interpreter) = setup();

    let err = generate(&grammar, &rewriter, &interpreter).unwrap_err();
    assert_eq!(
        err,
        Error::Rewrite(RewriteError::InvalidIterationCount { requested: -1 })
    );
}
