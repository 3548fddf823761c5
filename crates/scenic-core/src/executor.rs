//! Action execution against a UI driver.
//!
//! This module provides the [`ActionExecutor`] type, which dispatches
//! [`ActionType`]s to a [`UiDriver`] backend and normalizes the outcomes into
//! [`ExecutionResult`]s. It is the layer scenario runners and the CLI build on.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use scenic_core::action::ActionType;
//! use scenic_core::driver::UiDriver;
//! use scenic_core::executor::ActionExecutor;
//!
//! async fn demo(driver: Arc<dyn UiDriver>) {
//!     let executor = ActionExecutor::new(driver);
//!
//!     let result = executor.execute(ActionType::ExpectText {
//!         selector: "message-label".to_string(),
//!         expected: "Hello World!".to_string(),
//!     }).await;
//!
//!     assert!(result.success);
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info_span, Instrument};

use crate::action::ActionType;
use crate::driver::UiDriver;

/// Result of executing an action.
///
/// Contains success/failure status along with optional data returned by the
/// action (element text, screen info JSON, etc.).
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the action completed successfully.
    pub success: bool,
    /// Human-readable description of the result.
    pub message: String,
    /// Additional data returned by the action (element text, JSON trees, etc.).
    pub data: Option<String>,
}

impl ExecutionResult {
    /// Creates a successful result with a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Creates a failure result with an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Adds data to the result.
    pub fn with_data(mut self, data: String) -> Self {
        self.data = Some(data);
        self
    }
}

/// Executes automation actions against the application under test.
///
/// The executor holds a [`UiDriver`] and provides a single
/// [`execute`](Self::execute) entry point handling all [`ActionType`]
/// variants.
pub struct ActionExecutor {
    driver: Arc<dyn UiDriver>,
}

impl ActionExecutor {
    /// Creates a new executor with any [`UiDriver`] backend.
    pub fn new(driver: Arc<dyn UiDriver>) -> Self {
        Self { driver }
    }

    /// Returns a reference to the underlying driver.
    pub fn driver(&self) -> &Arc<dyn UiDriver> {
        &self.driver
    }

    /// Executes an action and returns the result.
    pub async fn execute(&self, action: ActionType) -> ExecutionResult {
        let action_name = action.name();
        let span = info_span!("execute_action", action = action_name);
        async {
            let start = Instant::now();
            let result = self.execute_inner(action).await;
            let elapsed = start.elapsed();
            debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                success = result.success,
                "action complete"
            );
            result
        }
        .instrument(span)
        .await
    }

    async fn execute_inner(&self, action: ActionType) -> ExecutionResult {
        match action {
            ActionType::Launch => match self.driver.launch().await {
                Ok(_) => ExecutionResult::success("Application launched"),
                Err(e) => ExecutionResult::failure(e.to_string()),
            },

            ActionType::Tap { ref selector } => match self.driver.tap(selector).await {
                Ok(_) => ExecutionResult::success(format!("Tapped '{}'", selector)),
                Err(e) => ExecutionResult::failure(e.to_string()),
            },

            ActionType::TypeText {
                ref selector,
                ref text,
            } => match self.driver.type_text(selector, text).await {
                Ok(_) => {
                    ExecutionResult::success(format!("Typed '{}' into '{}'", text, selector))
                }
                Err(e) => ExecutionResult::failure(e.to_string()),
            },

            ActionType::ClearText { ref selector } => {
                match self.driver.clear_text(selector).await {
                    Ok(_) => ExecutionResult::success(format!("Cleared '{}'", selector)),
                    Err(e) => ExecutionResult::failure(e.to_string()),
                }
            }

            ActionType::ReadText { ref selector } => {
                match self.driver.read_text(selector).await {
                    Ok(Some(text)) => {
                        ExecutionResult::success(format!("Read text of '{}'", selector))
                            .with_data(text)
                    }
                    Ok(None) => {
                        ExecutionResult::success(format!("Element '{}' has no text", selector))
                            .with_data("null".to_string())
                    }
                    Err(e) => ExecutionResult::failure(e.to_string()),
                }
            }

            ActionType::ExpectText {
                ref selector,
                ref expected,
            } => match self.driver.read_text(selector).await {
                // Exact comparison: the displayed text must equal the expected
                // string verbatim, including the empty string. No trimming.
                Ok(Some(ref actual)) if actual == expected => {
                    ExecutionResult::success(format!(
                        "'{}' shows expected text '{}'",
                        selector, expected
                    ))
                    .with_data(actual.clone())
                }
                Ok(Some(actual)) => ExecutionResult::failure(format!(
                    "'{}' shows '{}', expected '{}'",
                    selector, actual, expected
                ))
                .with_data(actual),
                Ok(None) => ExecutionResult::failure(format!(
                    "'{}' has no text, expected '{}'",
                    selector, expected
                )),
                Err(e) => ExecutionResult::failure(e.to_string()),
            },

            ActionType::ExpectScreen { ref screen } => {
                match self.driver.current_screen().await {
                    Ok(ref current) if current == screen => {
                        ExecutionResult::success(format!("On screen '{}'", screen))
                    }
                    Ok(current) => ExecutionResult::failure(format!(
                        "On screen '{}', expected '{}'",
                        current, screen
                    )),
                    Err(e) => ExecutionResult::failure(e.to_string()),
                }
            }

            // The fixed sleeps in recorded scenarios exist for manual visual
            // inspection and have no correctness function; record and move on.
            ActionType::Pause { ms } => {
                ExecutionResult::success(format!("Pause {}ms (no-op)", ms))
            }

            ActionType::LogComment { ref message } => {
                ExecutionResult::success(format!("Logged: {}", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverError;
    use crate::element::{ElementKind, UiElement};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// A canned driver: one screen, one label.
    struct CannedDriver {
        label_text: Mutex<Option<String>>,
    }

    impl CannedDriver {
        fn with_label(text: Option<&str>) -> Self {
            Self {
                label_text: Mutex::new(text.map(String::from)),
            }
        }
    }

    #[async_trait]
    impl UiDriver for CannedDriver {
        async fn launch(&self) -> Result<(), DriverError> {
            Ok(())
        }

        async fn is_launched(&self) -> bool {
            true
        }

        async fn tap(&self, _id: &str) -> Result<(), DriverError> {
            Ok(())
        }

        async fn type_text(&self, _id: &str, _text: &str) -> Result<(), DriverError> {
            Ok(())
        }

        async fn clear_text(&self, id: &str) -> Result<(), DriverError> {
            Err(DriverError::NotEditable(id.to_string()))
        }

        async fn read_text(&self, id: &str) -> Result<Option<String>, DriverError> {
            if id == "message-label" {
                Ok(self.label_text.lock().unwrap().clone())
            } else {
                Err(DriverError::ElementNotFound(id.to_string()))
            }
        }

        async fn dump_tree(&self) -> Result<Vec<UiElement>, DriverError> {
            Ok(vec![UiElement::new(
                "main-screen",
                "",
                ElementKind::Screen,
            )])
        }

        async fn current_screen(&self) -> Result<String, DriverError> {
            Ok("main-screen".to_string())
        }
    }

    #[test]
    fn test_execution_result_success() {
        let result = ExecutionResult::success("ok");
        assert!(result.success);
        assert_eq!(result.message, "ok");
        assert!(result.data.is_none());
    }

    #[test]
    fn test_execution_result_failure() {
        let result = ExecutionResult::failure("boom");
        assert!(!result.success);
        assert_eq!(result.message, "boom");
    }

    #[test]
    fn test_execution_result_with_data() {
        let result = ExecutionResult::success("ok").with_data("Espresso".to_string());
        assert_eq!(result.data.as_deref(), Some("Espresso"));
    }

    #[tokio::test]
    async fn test_expect_text_exact_match() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(Some("Espresso"))));
        let result = executor
            .execute(ActionType::ExpectText {
                selector: "message-label".to_string(),
                expected: "Espresso".to_string(),
            })
            .await;
        assert!(result.success, "{}", result.message);
    }

    #[tokio::test]
    async fn test_expect_text_mismatch_reports_both() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(Some("Espresso"))));
        let result = executor
            .execute(ActionType::ExpectText {
                selector: "message-label".to_string(),
                expected: "Latte".to_string(),
            })
            .await;
        assert!(!result.success);
        assert!(result.message.contains("Espresso"));
        assert!(result.message.contains("Latte"));
    }

    #[tokio::test]
    async fn test_expect_text_empty_string_is_exact() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(Some(""))));
        let result = executor
            .execute(ActionType::ExpectText {
                selector: "message-label".to_string(),
                expected: "".to_string(),
            })
            .await;
        assert!(result.success);

        // " " is not "": no trimming is applied.
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(Some(" "))));
        let result = executor
            .execute(ActionType::ExpectText {
                selector: "message-label".to_string(),
                expected: "".to_string(),
            })
            .await;
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_expect_text_missing_element_fails() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(None)));
        let result = executor
            .execute(ActionType::ExpectText {
                selector: "shown-text-label".to_string(),
                expected: "x".to_string(),
            })
            .await;
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_read_text_without_content() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(None)));
        let result = executor
            .execute(ActionType::ReadText {
                selector: "message-label".to_string(),
            })
            .await;
        assert!(result.success);
        assert_eq!(result.data.as_deref(), Some("null"));
    }

    #[tokio::test]
    async fn test_expect_screen() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(None)));
        let ok = executor
            .execute(ActionType::ExpectScreen {
                screen: "main-screen".to_string(),
            })
            .await;
        assert!(ok.success);

        let wrong = executor
            .execute(ActionType::ExpectScreen {
                screen: "show-text-screen".to_string(),
            })
            .await;
        assert!(!wrong.success);
        assert!(wrong.message.contains("main-screen"));
    }

    #[tokio::test]
    async fn test_pause_is_noop_success() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(None)));
        let start = std::time::Instant::now();
        let result = executor.execute(ActionType::Pause { ms: 1000 }).await;
        assert!(result.success);
        // No actual delay is performed.
        assert!(start.elapsed().as_millis() < 500);
    }

    #[tokio::test]
    async fn test_clear_text_failure_propagates() {
        let executor = ActionExecutor::new(Arc::new(CannedDriver::with_label(None)));
        let result = executor
            .execute(ActionType::ClearText {
                selector: "message-label".to_string(),
            })
            .await;
        assert!(!result.success);
        assert!(result.message.contains("not editable"));
    }
}
