//! Scenario execution.
//!
//! [`ScenarioRunner`] maps parsed scenario commands onto core
//! [`ActionType`]s, executes them in order against a driver, and logs every
//! action to a [`Session`]. The first failing step aborts the run with a
//! [`ScenarioError::StepFailed`] pointing at the scenario line.
//!
//! A run always starts from a freshly launched app: the runner issues a
//! `Launch` before the first command, so scenarios describe behavior from the
//! app's initial state. An explicit `launch` command relaunches mid-scenario.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use scenic_core::action::{ActionResult, ActionType};
use scenic_core::driver::UiDriver;
use scenic_core::executor::{ActionExecutor, ExecutionResult};
use scenic_core::session::Session;

use crate::ast::{CommandCall, Expression, Script};
use crate::error::ScenarioError;

pub struct ScenarioRunner {
    session: Arc<Session>,
    executor: ActionExecutor,
}

impl ScenarioRunner {
    pub fn new(session: Arc<Session>, driver: Arc<dyn UiDriver>) -> Self {
        Self {
            session,
            executor: ActionExecutor::new(driver),
        }
    }

    /// Runs a scenario to completion, stopping at the first failing step.
    pub async fn run(&self, script: &Script) -> Result<(), ScenarioError> {
        // Fresh instance per scenario run.
        self.execute_logged(ActionType::Launch, 0).await?;

        for call in &script.commands {
            let action = action_for(call)?;
            self.execute_logged(action, call.line).await?;
        }
        Ok(())
    }

    async fn execute_logged(
        &self,
        action: ActionType,
        line: usize,
    ) -> Result<ExecutionResult, ScenarioError> {
        let start = Instant::now();
        let result = self.executor.execute(action.clone()).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let action_result = if result.success {
            ActionResult::Success
        } else {
            ActionResult::Failure(result.message.clone())
        };
        self.session
            .log_action(action, action_result, Some(duration_ms))
            .await;

        if result.success {
            if let Some(data) = &result.data {
                info!(line, data, "{}", result.message);
            } else {
                info!(line, "{}", result.message);
            }
            Ok(result)
        } else {
            Err(ScenarioError::StepFailed {
                message: result.message,
                line,
            })
        }
    }
}

/// Maps a scenario command onto a core action, validating arity and types.
fn action_for(call: &CommandCall) -> Result<ActionType, ScenarioError> {
    match call.name.as_str() {
        "launch" => {
            expect_arity(call, 0)?;
            Ok(ActionType::Launch)
        }
        "tap" => Ok(ActionType::Tap {
            selector: string_arg(call, 0, "selector")?,
        }),
        "type" => Ok(ActionType::TypeText {
            selector: string_arg(call, 0, "selector")?,
            text: string_arg(call, 1, "text")?,
        }),
        "clear" => Ok(ActionType::ClearText {
            selector: string_arg(call, 0, "selector")?,
        }),
        "read" => Ok(ActionType::ReadText {
            selector: string_arg(call, 0, "selector")?,
        }),
        "expect" => Ok(ActionType::ExpectText {
            selector: string_arg(call, 0, "selector")?,
            expected: string_arg(call, 1, "expected")?,
        }),
        "expect_screen" => Ok(ActionType::ExpectScreen {
            screen: string_arg(call, 0, "screen")?,
        }),
        "pause" => Ok(ActionType::Pause {
            ms: number_arg(call, 0, "ms")? as u64,
        }),
        "log" => Ok(ActionType::LogComment {
            message: string_arg(call, 0, "message")?,
        }),
        other => Err(ScenarioError::Runtime {
            message: format!("Unknown command: {}", other),
            line: call.line,
        }),
    }
}

fn expect_arity(call: &CommandCall, arity: usize) -> Result<(), ScenarioError> {
    if call.args.len() != arity {
        return Err(ScenarioError::Runtime {
            message: format!(
                "{} takes {} argument(s), got {}",
                call.name,
                arity,
                call.args.len()
            ),
            line: call.line,
        });
    }
    Ok(())
}

fn string_arg(call: &CommandCall, idx: usize, name: &str) -> Result<String, ScenarioError> {
    match call.args.get(idx) {
        Some(Expression::String(s)) => Ok(s.clone()),
        Some(other) => Err(ScenarioError::Runtime {
            message: format!(
                "{}: argument '{}' must be a string, got {:?}",
                call.name, name, other
            ),
            line: call.line,
        }),
        None => Err(ScenarioError::Runtime {
            message: format!("{}: missing argument '{}'", call.name, name),
            line: call.line,
        }),
    }
}

fn number_arg(call: &CommandCall, idx: usize, name: &str) -> Result<i64, ScenarioError> {
    match call.args.get(idx) {
        Some(Expression::Number(n)) if *n >= 0 => Ok(*n),
        Some(other) => Err(ScenarioError::Runtime {
            message: format!(
                "{}: argument '{}' must be a non-negative number, got {:?}",
                call.name, name, other
            ),
            line: call.line,
        }),
        None => Err(ScenarioError::Runtime {
            message: format!("{}: missing argument '{}'", call.name, name),
            line: call.line,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;
    use crate::parser::parse;

    fn call(name: &str, args: Vec<Expression>) -> CommandCall {
        CommandCall {
            name: name.to_string(),
            args,
            line: 7,
        }
    }

    #[test]
    fn test_action_for_tap() {
        let action = action_for(&call(
            "tap",
            vec![Expression::String("change-text-button".to_string())],
        ))
        .unwrap();
        assert!(matches!(action, ActionType::Tap { selector } if selector == "change-text-button"));
    }

    #[test]
    fn test_action_for_type() {
        let action = action_for(&call(
            "type",
            vec![
                Expression::String("user-input".to_string()),
                Expression::String("".to_string()),
            ],
        ))
        .unwrap();
        match action {
            ActionType::TypeText { selector, text } => {
                assert_eq!(selector, "user-input");
                assert_eq!(text, "");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_action_for_unknown_command() {
        let err = action_for(&call("swipe", vec![])).unwrap_err();
        match err {
            ScenarioError::Runtime { message, line } => {
                assert!(message.contains("swipe"));
                assert_eq!(line, 7);
            }
            other => panic!("expected runtime error, got {:?}", other),
        }
    }

    #[test]
    fn test_action_for_wrong_arg_type() {
        let err = action_for(&call("tap", vec![Expression::Number(3)])).unwrap_err();
        assert!(matches!(err, ScenarioError::Runtime { line: 7, .. }));
    }

    #[test]
    fn test_action_for_missing_arg() {
        let err = action_for(&call("expect", vec![Expression::String("x".to_string())]))
            .unwrap_err();
        match err {
            ScenarioError::Runtime { message, .. } => assert!(message.contains("expected")),
            other => panic!("expected runtime error, got {:?}", other),
        }
    }

    #[test]
    fn test_action_for_launch_rejects_args() {
        let err = action_for(&call("launch", vec![Expression::Number(1)])).unwrap_err();
        assert!(matches!(err, ScenarioError::Runtime { .. }));
    }

    #[test]
    fn test_action_for_pause() {
        let action = action_for(&call("pause", vec![Expression::Number(1000)])).unwrap();
        assert!(matches!(action, ActionType::Pause { ms: 1000 }));

        let err = action_for(&call("pause", vec![Expression::Number(-5)])).unwrap_err();
        assert!(matches!(err, ScenarioError::Runtime { .. }));
    }

    #[test]
    fn test_full_scenario_maps_cleanly() {
        let script = parse(
            r#"
type("user-input", "Espresso")
tap("change-text-button")
expect("message-label", "Espresso")
"#,
        )
        .unwrap();
        for command in &script.commands {
            action_for(command).unwrap();
        }
    }
}
