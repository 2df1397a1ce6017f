//! End-to-end evaluation through the public `execute` entry point

use chroma::{execute, Interpreter};

#[test]
fn test_plain_arithmetic() {
    assert_eq!(execute("3 4 +"), "7");
    assert_eq!(execute("10 4 -"), "6");
    assert_eq!(execute("2/3 3/4 *"), "1/2");
}

#[test]
fn test_fractions_are_exact() {
    assert_eq!(execute("1/3 1/6 +"), "1/2");
    assert_eq!(execute("0.1 0.2 + 0.3 ="), "true");
}

#[test]
fn test_colored_program_matches_plain_program() {
    let plain = execute("3 4 * 2 -");
    let colored = execute("<green>3 4</green> <red>*</red> <green>2</green> <red>-</red>");
    assert_eq!(plain, "10");
    assert_eq!(colored, plain);
}

#[test]
fn test_color_changes_meaning() {
    assert_eq!(
        execute("<blue>3</blue> <blue>4</blue> <red>+</red>"),
        "Error: Type error in +: expected number, got string and string"
    );
}

#[test]
fn test_errors_are_rendered() {
    assert_eq!(execute("5 0 /"), "Error: Division by zero");
    assert_eq!(execute("TRUE FALSE IF"), "Error: Stack underflow in IF");
    assert_eq!(execute("[ 1"), "Error: Unclosed vector: missing 1 closing bracket(s)");
    assert_eq!(execute("<green>1</red>"), "Error: Closing tag </red> does not match open color green");
}

#[test]
fn test_define_and_call() {
    assert_eq!(execute("[ DUP * ] \"SQUARE\" DEF 5 SQUARE"), "25");
}

#[test]
fn test_vectors() {
    assert_eq!(execute("[ 1 2 3 ] REVERSE"), "[ 3 2 1 ]");
    assert_eq!(execute("[ 1 2 3 ] LENGTH"), "3");
    assert_eq!(execute("[ 1 [ 2 3 ] ] [ 1 [ 2 3 ] ] ="), "true");
}

#[test]
fn test_conditional_word() {
    let source = "[ DUP 0 > [ ] [ -1 * ] IF ] \"ABS\" DEF -3/4 ABS 2 ABS";
    assert_eq!(execute(source), "3/4\n2");
}

#[test]
fn test_mutual_recursion() {
    let mut session = Interpreter::new();
    session.execute("[ DUP 0 = [ DROP TRUE ] [ 1 - ODD ] IF ] \"EVEN\" DEF");
    session.execute("[ DUP 0 = [ DROP FALSE ] [ 1 - EVEN ] IF ] \"ODD\" DEF");
    assert_eq!(session.execute("10 EVEN"), "true");
    assert_eq!(session.execute("7 EVEN"), "false");
    assert_eq!(session.execute("7 ODD"), "true");
}

#[test]
fn test_runaway_recursion_is_an_error() {
    let output = execute("[ FOREVER ] \"FOREVER\" DEF FOREVER");
    assert_eq!(output, "Error: Recursion limit of 256 nested calls exceeded");
}
