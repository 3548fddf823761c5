//! Automation driver trait for backend-agnostic UI automation.
//!
//! This module defines the [`UiDriver`] trait, the seam between the action
//! executor and whatever actually hosts the user interface. The reference
//! backend is the in-process test app in `scenic-testapp`; the trait is async
//! so that out-of-process backends can implement it as well.
//!
//! The trait includes default implementations for element search methods that
//! work by fetching the current screen's tree via
//! [`dump_tree`](UiDriver::dump_tree) and searching locally. Backends that can
//! search natively may override them.

use async_trait::async_trait;
use thiserror::Error;

use crate::element::{flatten_elements, search_by_id, search_by_text, UiElement};

/// Errors that can occur during driver operations.
#[derive(Error, Debug)]
pub enum DriverError {
    /// No element matching the selector exists on the current screen.
    #[error("No element matching '{0}' on the current screen")]
    ElementNotFound(String),

    /// The element exists but does not accept text input.
    #[error("Element '{0}' is not editable")]
    NotEditable(String),

    /// The element exists but cannot be tapped.
    #[error("Element '{0}' is not tappable")]
    NotTappable(String),

    /// The application has not been launched yet.
    #[error("Application not launched")]
    NotLaunched,

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for backend-agnostic UI automation.
///
/// Implementors provide the core capabilities (launching, tapping, typing,
/// reading text, tree inspection) against their specific backend. All state
/// observable through this trait is scoped to the currently shown screen;
/// after a tap navigates to another screen, subsequent queries see that
/// screen's elements.
#[async_trait]
pub trait UiDriver: Send + Sync {
    /// Launch the application, or relaunch it into its freshly started state.
    ///
    /// Each scenario runs against a fresh instance; no state survives a
    /// relaunch.
    async fn launch(&self) -> Result<(), DriverError>;

    /// Returns true if the application is currently running.
    async fn is_launched(&self) -> bool;

    /// Tap an element by its id.
    async fn tap(&self, id: &str) -> Result<(), DriverError>;

    /// Type text into an editable element by its id.
    ///
    /// Typed text is appended to the element's current contents, matching how
    /// keyboard input behaves in a focused field. Any string is accepted,
    /// including the empty string.
    async fn type_text(&self, id: &str, text: &str) -> Result<(), DriverError>;

    /// Clear the contents of an editable element by its id.
    async fn clear_text(&self, id: &str) -> Result<(), DriverError>;

    /// Read the displayed text of an element by its id.
    ///
    /// Returns `Ok(None)` when the element exists but has no text content.
    /// Has no side effects.
    async fn read_text(&self, id: &str) -> Result<Option<String>, DriverError>;

    /// Get the element tree of the currently shown screen.
    async fn dump_tree(&self) -> Result<Vec<UiElement>, DriverError>;

    /// Get the id of the currently shown screen.
    async fn current_screen(&self) -> Result<String, DriverError>;

    /// Find an element by its id.
    ///
    /// Selectors support glob wildcards (`*` and `?`). The default
    /// implementation fetches the tree and searches locally.
    async fn find_element(&self, selector: &str) -> Result<Option<UiElement>, DriverError> {
        let tree = self.dump_tree().await?;
        Ok(search_by_id(&tree, selector))
    }

    /// Find an element by its visible text.
    ///
    /// Selectors support glob wildcards (`*` and `?`). The default
    /// implementation fetches the tree and searches locally.
    async fn find_by_text(&self, selector: &str) -> Result<Option<UiElement>, DriverError> {
        let tree = self.dump_tree().await?;
        Ok(search_by_text(&tree, selector))
    }

    /// Get a flattened list of addressable elements on the current screen.
    ///
    /// The default implementation fetches the tree and flattens it, keeping
    /// only elements that carry an id or text.
    async fn list_elements(&self) -> Result<Vec<UiElement>, DriverError> {
        let tree = self.dump_tree().await?;
        Ok(flatten_elements(&tree))
    }
}
