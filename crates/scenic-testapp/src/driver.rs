//! In-process [`UiDriver`] implementation for the sample app.
//!
//! [`TestAppDriver`] hosts a [`ChangeTextApp`] behind a tokio mutex and
//! dispatches driver calls onto it: taps press the app's buttons, typing
//! targets the input field, and reads render the current screen's element
//! tree. This is the reference backend the scenario runner and CLI use.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use scenic_core::driver::{DriverError, UiDriver};
use scenic_core::element::{search_by_id, ElementKind, UiElement};

use crate::app::{ChangeTextApp, CHANGE_TEXT_BUTTON, OPEN_SCREEN_BUTTON};

struct Inner {
    app: ChangeTextApp,
    launched: bool,
}

/// Drives an embedded [`ChangeTextApp`] instance.
///
/// Cheap to clone; clones share the same app instance.
#[derive(Clone)]
pub struct TestAppDriver {
    inner: Arc<Mutex<Inner>>,
}

impl TestAppDriver {
    /// Creates a driver for a not-yet-launched app.
    ///
    /// Call [`launch`](UiDriver::launch) before performing any other action.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                app: ChangeTextApp::new(),
                launched: false,
            })),
        }
    }
}

impl Default for TestAppDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds an element on the current screen, or reports it missing.
fn require_element(app: &ChangeTextApp, id: &str) -> Result<UiElement, DriverError> {
    search_by_id(&app.element_tree(), id)
        .ok_or_else(|| DriverError::ElementNotFound(id.to_string()))
}

#[async_trait]
impl UiDriver for TestAppDriver {
    async fn launch(&self) -> Result<(), DriverError> {
        let mut inner = self.inner.lock().await;
        inner.app.relaunch();
        inner.launched = true;
        debug!("test app launched");
        Ok(())
    }

    async fn is_launched(&self) -> bool {
        self.inner.lock().await.launched
    }

    async fn tap(&self, id: &str) -> Result<(), DriverError> {
        let mut inner = self.inner.lock().await;
        if !inner.launched {
            return Err(DriverError::NotLaunched);
        }
        let element = require_element(&inner.app, id)?;
        if element.kind != Some(ElementKind::Button) {
            return Err(DriverError::NotTappable(id.to_string()));
        }
        // Resolve the matched element's concrete id; selectors may be globs.
        match element.id.as_deref() {
            Some(CHANGE_TEXT_BUTTON) => inner.app.press_change_text(),
            Some(OPEN_SCREEN_BUTTON) => inner.app.press_open_screen(),
            other => {
                return Err(DriverError::NotTappable(
                    other.unwrap_or(id).to_string(),
                ))
            }
        }
        debug!(id, "tapped");
        Ok(())
    }

    async fn type_text(&self, id: &str, text: &str) -> Result<(), DriverError> {
        let mut inner = self.inner.lock().await;
        if !inner.launched {
            return Err(DriverError::NotLaunched);
        }
        let element = require_element(&inner.app, id)?;
        if element.kind != Some(ElementKind::TextField) {
            return Err(DriverError::NotEditable(id.to_string()));
        }
        inner.app.type_into_input(text);
        debug!(id, text, "typed");
        Ok(())
    }

    async fn clear_text(&self, id: &str) -> Result<(), DriverError> {
        let mut inner = self.inner.lock().await;
        if !inner.launched {
            return Err(DriverError::NotLaunched);
        }
        let element = require_element(&inner.app, id)?;
        if element.kind != Some(ElementKind::TextField) {
            return Err(DriverError::NotEditable(id.to_string()));
        }
        inner.app.clear_input();
        Ok(())
    }

    async fn read_text(&self, id: &str) -> Result<Option<String>, DriverError> {
        let inner = self.inner.lock().await;
        if !inner.launched {
            return Err(DriverError::NotLaunched);
        }
        let element = require_element(&inner.app, id)?;
        Ok(element.text)
    }

    async fn dump_tree(&self) -> Result<Vec<UiElement>, DriverError> {
        let inner = self.inner.lock().await;
        if !inner.launched {
            return Err(DriverError::NotLaunched);
        }
        Ok(inner.app.element_tree())
    }

    async fn current_screen(&self) -> Result<String, DriverError> {
        let inner = self.inner.lock().await;
        if !inner.launched {
            return Err(DriverError::NotLaunched);
        }
        Ok(inner.app.screen().id().to_string())
    }
}
