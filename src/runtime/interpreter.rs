//! Dictionary/stack interpreter
//!
//! One [`Interpreter`] is one session. The stack is cleared at the start of
//! every top-level `execute`; the register and the word dictionary survive
//! until [`Interpreter::reset`].

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::frontend::lexer::{tokenize_str_with_nesting, tokenize_with_nesting, Token};
use crate::frontend::markup::ColoredRun;
use crate::runtime::builtins;
use crate::runtime::errors::{RuntimeError, RuntimeResult};
use crate::runtime::value::Value;
use crate::util::config::RuntimeConfig;
use crate::Error;

/// Returned for a program with no tokens (blank or comment-only input)
pub const EMPTY_INPUT: &str = "Empty input";

/// Returned when evaluation leaves nothing on the stack
pub const STACK_EMPTY: &str = "Stack empty";

/// Session state for the stack machine
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(crate) stack: Vec<Value>,
    pub(crate) register: Option<Value>,
    pub(crate) dictionary: IndexMap<String, Vec<Token>>,
    config: RuntimeConfig,
    /// Nesting of word bodies currently being evaluated
    depth: usize,
    /// Tokens dispatched since the last top-level call
    steps: u64,
}

/// Serializable copy of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub stack: Vec<Value>,
    pub register: Option<Value>,
    pub environment: IndexMap<String, Vec<Token>>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Evaluate annotated text and render the stack, or `Error: …`
    pub fn execute(
        &mut self,
        source: &str,
    ) -> String {
        self.try_execute(source).unwrap_or_else(|e| format!("Error: {}", e))
    }

    /// Like [`execute`](Self::execute) but hands the failure to the caller
    pub fn try_execute(
        &mut self,
        source: &str,
    ) -> Result<String, Error> {
        self.begin();
        let tokens = tokenize_str_with_nesting(source, self.config.max_nesting)?;
        Ok(self.evaluate_program(&tokens)?)
    }

    /// Evaluate runs supplied directly by an editing surface
    pub fn execute_runs(
        &mut self,
        runs: &[ColoredRun],
    ) -> String {
        self.begin();
        tokenize_with_nesting(runs, self.config.max_nesting)
            .map_err(Error::from)
            .and_then(|tokens| self.evaluate_program(&tokens).map_err(Error::from))
            .unwrap_or_else(|e| format!("Error: {}", e))
    }

    /// Evaluate an already tokenized program
    ///
    /// Tokens built by the caller skip the lexer, so their nesting is
    /// checked here instead.
    pub fn execute_tokens(
        &mut self,
        tokens: &[Token],
    ) -> String {
        self.begin();
        let deepest = tokens.iter().map(Token::nesting).max().unwrap_or(0);
        let result = self
            .check_nesting(deepest)
            .and_then(|()| self.evaluate_program(tokens));
        result.unwrap_or_else(|e| format!("Error: {}", e))
    }

    /// Clear stack, register and dictionary
    pub fn reset(&mut self) {
        debug!("session reset");
        self.stack.clear();
        self.register = None;
        self.dictionary.clear();
        self.depth = 0;
        self.steps = 0;
    }

    /// Copy of the stack, bottom first
    pub fn stack(&self) -> Vec<Value> {
        self.stack.clone()
    }

    pub fn register(&self) -> Option<Value> {
        self.register.clone()
    }

    /// Copy of the user dictionary in definition order
    pub fn environment(&self) -> IndexMap<String, Vec<Token>> {
        self.dictionary.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stack: self.stack(),
            register: self.register(),
            environment: self.environment(),
        }
    }

    /// Built-in and user word names, sorted and deduplicated
    pub fn words(&self) -> Vec<String> {
        let mut names: Vec<String> = builtins::names()
            .map(str::to_string)
            .chain(self.dictionary.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Render the stack one value per line
    pub fn render(&self) -> String {
        if self.stack.is_empty() {
            return STACK_EMPTY.to_string();
        }
        self.stack
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn begin(&mut self) {
        self.stack.clear();
        self.depth = 0;
        self.steps = 0;
    }

    fn evaluate_program(
        &mut self,
        tokens: &[Token],
    ) -> RuntimeResult<String> {
        if tokens.is_empty() {
            return Ok(EMPTY_INPUT.to_string());
        }
        debug!("evaluating {} top-level tokens", tokens.len());
        for token in tokens {
            self.dispatch(token)?;
        }
        Ok(self.render())
    }

    /// Evaluate one token against the shared stack
    pub(crate) fn dispatch(
        &mut self,
        token: &Token,
    ) -> RuntimeResult<()> {
        self.steps += 1;
        if let Some(limit) = self.config.max_steps {
            if self.steps > limit {
                return Err(RuntimeError::StepLimitExceeded { limit });
            }
        }

        trace!(depth = self.depth, "dispatch {}", token);
        match token {
            Token::Symbol(name) => self.invoke(name),
            literal => {
                self.stack.push(Value::from(literal.clone()));
                Ok(())
            }
        }
    }

    /// Built-ins shadow dictionary entries of the same name
    fn invoke(
        &mut self,
        name: &str,
    ) -> RuntimeResult<()> {
        if let Some(builtin) = builtins::lookup(name) {
            return (builtin.run)(self);
        }
        // The body may redefine or delete its own word, so run a copy
        match self.dictionary.get(name).cloned() {
            Some(body) => self.evaluate_body(&body),
            None => Err(RuntimeError::UnknownWord(name.to_string())),
        }
    }

    /// Run a word body in place on the shared stack
    pub(crate) fn evaluate_body(
        &mut self,
        body: &[Token],
    ) -> RuntimeResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::RecursionLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        let result = body.iter().try_for_each(|token| self.dispatch(token));
        self.depth -= 1;
        result
    }

    // ---- stack helpers shared by the built-ins ----

    pub(crate) fn check_nesting(
        &self,
        depth: usize,
    ) -> RuntimeResult<()> {
        if depth > self.config.max_nesting {
            return Err(RuntimeError::NestingTooDeep {
                limit: self.config.max_nesting,
            });
        }
        Ok(())
    }

    pub(crate) fn require(
        &self,
        word: &'static str,
        count: usize,
    ) -> RuntimeResult<()> {
        if self.stack.len() < count {
            return Err(RuntimeError::StackUnderflow(word));
        }
        Ok(())
    }

    pub(crate) fn pop(
        &mut self,
        word: &'static str,
    ) -> RuntimeResult<Value> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow(word))
    }

    pub(crate) fn push(
        &mut self,
        value: impl Into<Value>,
    ) {
        self.stack.push(value.into());
    }
}
