//! Action types and logging for automation operations.
//!
//! This module defines the actions a scenario can perform against the
//! application under test, along with the [`ActionLog`] type for recording
//! executed actions.
//!
//! # Action Types
//!
//! Actions fall into a few categories:
//!
//! - **Lifecycle**: [`ActionType::Launch`]
//! - **Stimulus**: [`ActionType::Tap`], [`ActionType::TypeText`], [`ActionType::ClearText`]
//! - **Observation**: [`ActionType::ReadText`], [`ActionType::ExpectText`], [`ActionType::ExpectScreen`]
//! - **Bookkeeping**: [`ActionType::Pause`], [`ActionType::LogComment`]
//!
//! # Example
//!
//! ```
//! use scenic_core::action::{ActionType, ActionResult, ActionLog};
//!
//! let action = ActionType::ExpectText {
//!     selector: "message-label".to_string(),
//!     expected: "Hello World!".to_string(),
//! };
//!
//! let log = ActionLog::new(action, ActionResult::Success, None);
//! println!("Action {} at {}", log.id, log.timestamp);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The result of executing an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ActionResult {
    /// The action completed successfully.
    Success,

    /// The action failed with the given error message.
    Failure(String),
}

/// Types of actions that can be performed against the application under test.
///
/// Actions are serialized as JSON with a `type` tag discriminator for the
/// session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionType {
    /// Launch the application, or relaunch it into a fresh state.
    Launch,

    /// Tap an element by id.
    Tap {
        /// The element id (supports glob wildcards).
        selector: String,
    },

    /// Type text into an editable element.
    TypeText {
        /// The element id of the editable target.
        selector: String,
        /// The text to type. May be empty or arbitrary.
        text: String,
    },

    /// Clear the contents of an editable element.
    ClearText {
        /// The element id of the editable target.
        selector: String,
    },

    /// Read the displayed text of an element.
    ReadText {
        /// The element id.
        selector: String,
    },

    /// Assert that an element's displayed text equals a string exactly.
    ExpectText {
        /// The element id.
        selector: String,
        /// The exact expected text. The empty string is a legitimate value.
        expected: String,
    },

    /// Assert that a particular screen is currently shown.
    ExpectScreen {
        /// The screen id.
        screen: String,
    },

    /// A cosmetic pause carried over from recorded scenarios.
    ///
    /// Recorded in the log but performs no delay.
    Pause {
        /// The requested pause in milliseconds.
        ms: u64,
    },

    /// Log a comment (for documentation purposes).
    LogComment {
        /// The comment text to log.
        message: String,
    },
}

impl ActionType {
    /// Returns a short, static name for this action type suitable for use in
    /// tracing span metadata. Avoids Debug-formatting enum payloads.
    pub fn name(&self) -> &'static str {
        match self {
            ActionType::Launch => "launch",
            ActionType::Tap { .. } => "tap",
            ActionType::TypeText { .. } => "type_text",
            ActionType::ClearText { .. } => "clear_text",
            ActionType::ReadText { .. } => "read_text",
            ActionType::ExpectText { .. } => "expect_text",
            ActionType::ExpectScreen { .. } => "expect_screen",
            ActionType::Pause { .. } => "pause",
            ActionType::LogComment { .. } => "log_comment",
        }
    }
}

/// A logged action with metadata.
///
/// Each action executed by a scenario run is logged with a unique identifier,
/// timestamp, the action details, and the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    /// Unique identifier for this log entry.
    pub id: Uuid,

    /// When the action was executed.
    pub timestamp: DateTime<Utc>,

    /// The action that was performed.
    pub action: ActionType,

    /// The result of the action.
    pub result: ActionResult,

    /// How long the action took in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ActionLog {
    /// Creates a new action log entry.
    ///
    /// The entry is assigned a new UUID and timestamped with the current time.
    pub fn new(action: ActionType, result: ActionResult, duration_ms: Option<u64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            result,
            duration_ms,
        }
    }
}
