//! Stack shuffling and the register

use super::Builtin;
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::interpreter::Interpreter;

pub(super) const WORDS: &[Builtin] = &[
    Builtin {
        name: "DUP",
        effect: "( a -- a a )",
        description: "Duplicate the top value",
        run: dup,
    },
    Builtin {
        name: "DROP",
        effect: "( a -- )",
        description: "Discard the top value",
        run: drop_top,
    },
    Builtin {
        name: "SWAP",
        effect: "( a b -- b a )",
        description: "Exchange the top two values",
        run: swap,
    },
    Builtin {
        name: "ROT",
        effect: "( a b c -- b c a )",
        description: "Rotate the third value to the top",
        run: rot,
    },
    Builtin {
        name: ">R",
        effect: "( a -- )",
        description: "Move the top value into the register",
        run: to_register,
    },
    Builtin {
        name: "R>",
        effect: "( -- a )",
        description: "Move the register onto the stack, emptying it",
        run: from_register,
    },
    Builtin {
        name: "R@",
        effect: "( -- a )",
        description: "Copy the register onto the stack",
        run: copy_register,
    },
];

fn dup(interp: &mut Interpreter) -> RuntimeResult<()> {
    let top = interp
        .stack
        .last()
        .cloned()
        .ok_or(RuntimeError::StackUnderflow("DUP"))?;
    interp.push(top);
    Ok(())
}

fn drop_top(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.pop("DROP")?;
    Ok(())
}

fn swap(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.require("SWAP", 2)?;
    let len = interp.stack.len();
    interp.stack.swap(len - 1, len - 2);
    Ok(())
}

fn rot(interp: &mut Interpreter) -> RuntimeResult<()> {
    interp.require("ROT", 3)?;
    let len = interp.stack.len();
    interp.stack[len - 3..].rotate_left(1);
    Ok(())
}

fn to_register(interp: &mut Interpreter) -> RuntimeResult<()> {
    let value = interp.pop(">R")?;
    interp.register = Some(value);
    Ok(())
}

fn from_register(interp: &mut Interpreter) -> RuntimeResult<()> {
    let value = interp
        .register
        .take()
        .ok_or(RuntimeError::EmptyRegister("R>"))?;
    interp.push(value);
    Ok(())
}

fn copy_register(interp: &mut Interpreter) -> RuntimeResult<()> {
    let value = interp
        .register
        .clone()
        .ok_or(RuntimeError::EmptyRegister("R@"))?;
    interp.push(value);
    Ok(())
}
