//! Arithmetic and comparison

use super::{pop_number_pair, Builtin};
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::interpreter::Interpreter;
use crate::runtime::rational::Reduce;

pub(super) const WORDS: &[Builtin] = &[
    Builtin {
        name: "+",
        effect: "( a b -- a+b )",
        description: "Add two numbers",
        run: add,
    },
    Builtin {
        name: "-",
        effect: "( a b -- a-b )",
        description: "Subtract the top number from the one below",
        run: subtract,
    },
    Builtin {
        name: "*",
        effect: "( a b -- a*b )",
        description: "Multiply two numbers",
        run: multiply,
    },
    Builtin {
        name: "/",
        effect: "( a b -- a/b )",
        description: "Divide; fails when b is zero",
        run: divide,
    },
    Builtin {
        name: ">",
        effect: "( a b -- bool )",
        description: "True when a > b",
        run: greater_than,
    },
    Builtin {
        name: ">=",
        effect: "( a b -- bool )",
        description: "True when a >= b",
        run: greater_or_equal,
    },
    Builtin {
        name: "=",
        effect: "( a b -- bool )",
        description: "Equality of two values of the same type",
        run: equals,
    },
];

fn add(interp: &mut Interpreter) -> RuntimeResult<()> {
    let (a, b) = pop_number_pair(interp, "+")?;
    interp.push(a.add(&b, Reduce::Now));
    Ok(())
}

fn subtract(interp: &mut Interpreter) -> RuntimeResult<()> {
    let (a, b) = pop_number_pair(interp, "-")?;
    interp.push(a.subtract(&b, Reduce::Now));
    Ok(())
}

fn multiply(interp: &mut Interpreter) -> RuntimeResult<()> {
    let (a, b) = pop_number_pair(interp, "*")?;
    interp.push(a.multiply(&b, Reduce::Now));
    Ok(())
}

fn divide(interp: &mut Interpreter) -> RuntimeResult<()> {
    let (a, b) = pop_number_pair(interp, "/")?;
    interp.push(a.divide(&b, Reduce::Now)?);
    Ok(())
}

fn greater_than(interp: &mut Interpreter) -> RuntimeResult<()> {
    let (a, b) = pop_number_pair(interp, ">")?;
    interp.push(a > b);
    Ok(())
}

fn greater_or_equal(interp: &mut Interpreter) -> RuntimeResult<()> {
    let (a, b) = pop_number_pair(interp, ">=")?;
    interp.push(a >= b);
    Ok(())
}

fn equals(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.require("=", 2)?;
    let b = interp.pop("=")?;
    let a = interp.pop("=")?;
    // 类型不同是错误，而不是 false
    let equal = a.same_type_eq(&b).ok_or_else(|| {
        RuntimeError::type_error(
            "=",
            "operands of the same type",
            format!("{} and {}", a.type_name(), b.type_name()),
        )
    })?;
    interp.push(equal);
    Ok(())
}
