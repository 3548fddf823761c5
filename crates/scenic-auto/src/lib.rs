//! # scenic-auto
//!
//! The declarative scenario language for scenic and its runner.
//!
//! A scenario is a linear sequence of stimulus and expectation commands run
//! against a [`UiDriver`](scenic_core::driver::UiDriver) backend:
//!
//! ```text
//! # Type text and submit it on the same screen.
//! type("user-input", "Espresso")
//! tap("change-text-button")
//! expect("message-label", "Espresso")
//! ```
//!
//! The language is intentionally not a programming language: no variables, no
//! control flow. Each line is one observable stimulus or one expected state.
//!
//! ## Modules
//!
//! - [`ast`] - Parsed scenario representation
//! - [`parser`] - Tokenizer and parser for `.scn` sources
//! - [`runner`] - [`ScenarioRunner`](runner::ScenarioRunner) executing scenarios
//! - [`error`] - [`ScenarioError`](error::ScenarioError) with process exit codes

pub mod ast;
pub mod error;
pub mod parser;
pub mod runner;
