//! Branching and calling vectors

use super::{expect_boolean, expect_vector, Builtin};
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::interpreter::Interpreter;
use crate::runtime::value::Value;

pub(super) const WORDS: &[Builtin] = &[
    Builtin {
        name: "IF",
        effect: "( bool [then] [else] -- ... )",
        description: "Run the then-vector if the condition holds, else the else-vector",
        run: branch,
    },
    Builtin {
        name: "CALL",
        effect: "( [body] -- ... )",
        description: "Run a vector as code",
        run: call,
    },
];

fn branch(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.require("IF", 3)?;
    let otherwise = interp.pop("IF")?;
    let then = interp.pop("IF")?;
    let condition = expect_boolean("IF", interp.pop("IF")?)?;

    let (then, otherwise) = match (then, otherwise) {
        (Value::Vector(then), Value::Vector(otherwise)) => (then, otherwise),
        (then, otherwise) => {
            return Err(RuntimeError::type_error(
                "IF",
                "vector branches",
                format!("{} and {}", then.type_name(), otherwise.type_name()),
            ))
        }
    };

    interp.evaluate_body(if condition { &then } else { &otherwise })
}

fn call(interp: &mut Interpreter) -> RuntimeResult<()> {
    let body = expect_vector("CALL", interp.pop("CALL")?)?;
    interp.evaluate_body(&body)
}
