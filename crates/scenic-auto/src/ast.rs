//! Parsed scenario representation.
//!
//! A scenario is a flat list of commands; there is deliberately no control
//! flow. Every command records the source line it came from so that runtime
//! failures point back at the scenario text.

/// A parsed scenario.
#[derive(Debug, Clone)]
pub struct Script {
    /// The commands, in source order.
    pub commands: Vec<CommandCall>,
}

/// One command invocation, e.g. `tap("change-text-button")`.
#[derive(Debug, Clone)]
pub struct CommandCall {
    /// The command name.
    pub name: String,
    /// The arguments, in order.
    pub args: Vec<Expression>,
    /// The 1-based source line of the command.
    pub line: usize,
}

/// A literal argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A string literal.
    String(String),
    /// An integer literal.
    Number(i64),
}
