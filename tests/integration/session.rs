//! Multi-call sessions

use chroma::runtime::interpreter::{EMPTY_INPUT, STACK_EMPTY};
use chroma::util::config::RuntimeConfig;
use chroma::{Interpreter, Value};

#[test]
fn test_words_and_register_survive_calls() {
    let mut session = Interpreter::new();
    assert_eq!(session.execute("[ 1 + ] \"INC\" DEF 41 >R"), STACK_EMPTY);
    assert_eq!(session.execute("R> INC"), "42");
    assert_eq!(session.execute("R@"), "Error: Register is empty in R@");
}

#[test]
fn test_each_call_starts_with_empty_stack() {
    let mut session = Interpreter::new();
    session.execute("1 2 3");
    assert_eq!(session.execute("+"), "Error: Stack underflow in +");
    assert_eq!(session.execute(""), EMPTY_INPUT);
}

#[test]
fn test_stack_accessor_after_error() {
    let mut session = Interpreter::new();
    session.execute("1 2 \"x\" +");
    // Operands of the failing word are consumed; earlier values stay
    assert_eq!(session.stack(), vec![Value::Number(1i64.into())]);
}

#[test]
fn test_redefinition_and_delete() {
    let mut session = Interpreter::new();
    session.execute("[ 1 ] \"X\" DEF");
    session.execute("[ 2 ] \"X\" DEF");
    assert_eq!(session.execute("X"), "2");
    assert_eq!(session.environment().len(), 1);
    session.execute("\"X\" DEL");
    assert!(session.environment().is_empty());
}

#[test]
fn test_reset_twice_matches_fresh_session() {
    let mut session = Interpreter::new();
    session.execute("[ 1 ] \"ONE\" DEF 5 >R 1 2");
    session.reset();
    session.reset();
    assert_eq!(session.snapshot(), Interpreter::new().snapshot());
}

#[test]
fn test_configured_limits() {
    let mut session = Interpreter::with_config(RuntimeConfig {
        max_depth: 16,
        max_steps: Some(1000),
        ..RuntimeConfig::default()
    });
    assert_eq!(session.config().max_depth, 16);
    assert_eq!(
        session.execute("[ 1 + DOWN ] \"DOWN\" DEF 0 DOWN"),
        "Error: Recursion limit of 16 nested calls exceeded"
    );
    let mut session = Interpreter::with_config(RuntimeConfig {
        max_depth: 10_000,
        max_steps: Some(1000),
        ..RuntimeConfig::default()
    });
    assert_eq!(
        session.execute("[ 1 DROP LOOP ] \"LOOP\" DEF LOOP"),
        "Error: Step limit of 1000 evaluated tokens exceeded"
    );
}

#[test]
fn test_snapshot_json_shape() {
    let mut session = Interpreter::new();
    session.execute("[ DUP * ] \"SQUARE\" DEF NIL >R 3/4 [ 1 ]");
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "stack": [
                { "type": "number", "value": "3/4" },
                { "type": "vector", "value": [ { "type": "number", "value": "1" } ] }
            ],
            "register": { "type": "nil" },
            "environment": {
                "SQUARE": [
                    { "type": "symbol", "value": "DUP" },
                    { "type": "symbol", "value": "*" }
                ]
            }
        })
    );
}
