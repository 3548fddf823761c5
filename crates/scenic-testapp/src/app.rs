//! The two-screen sample application state machine.
//!
//! The app has a main screen with an input field, two buttons, and a label,
//! plus a second screen with a single label:
//!
//! - `change-text-button` sets the main screen's label to the input text.
//! - `open-screen-button` opens the show-text screen and sets its label to
//!   the input text.
//!
//! In both cases the text is copied verbatim: no transformation, trimming, or
//! validation, and the empty string is a valid submission. Neither update
//! touches the other screen's label.

use scenic_core::element::{ElementKind, UiElement};

/// Id of the main screen.
pub const MAIN_SCREEN: &str = "main-screen";
/// Id of the second screen opened by [`OPEN_SCREEN_BUTTON`].
pub const SHOW_TEXT_SCREEN: &str = "show-text-screen";
/// Id of the editable input field on the main screen.
pub const USER_INPUT: &str = "user-input";
/// Id of the button that updates the main screen's label.
pub const CHANGE_TEXT_BUTTON: &str = "change-text-button";
/// Id of the button that opens the second screen and sets its label.
pub const OPEN_SCREEN_BUTTON: &str = "open-screen-button";
/// Id of the label on the main screen.
pub const MESSAGE_LABEL: &str = "message-label";
/// Id of the label on the show-text screen.
pub const SHOWN_TEXT_LABEL: &str = "shown-text-label";

/// Text shown by the main label before any submission.
pub const DEFAULT_GREETING: &str = "Hello World!";

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// The main screen with input field, buttons, and label.
    Main,
    /// The second screen showing the submitted text.
    ShowText,
}

impl ScreenId {
    /// The element id of this screen.
    pub fn id(self) -> &'static str {
        match self {
            ScreenId::Main => MAIN_SCREEN,
            ScreenId::ShowText => SHOW_TEXT_SCREEN,
        }
    }
}

/// The sample application.
///
/// Holds the full observable state: which screen is shown, the input field's
/// contents, and both labels.
#[derive(Debug, Clone)]
pub struct ChangeTextApp {
    screen: ScreenId,
    input: String,
    message: String,
    shown_text: String,
}

impl ChangeTextApp {
    /// Creates the app in its freshly launched state: main screen shown,
    /// empty input, default greeting in the label.
    pub fn new() -> Self {
        Self {
            screen: ScreenId::Main,
            input: String::new(),
            message: DEFAULT_GREETING.to_string(),
            shown_text: String::new(),
        }
    }

    /// Resets the app to its freshly launched state.
    ///
    /// No state survives a relaunch; each scenario starts from scratch.
    pub fn relaunch(&mut self) {
        *self = Self::new();
    }

    /// The screen currently shown.
    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// Appends typed text to the input field.
    pub fn type_into_input(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// Clears the input field.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Same-screen update: copy the input text to the main label, verbatim.
    pub fn press_change_text(&mut self) {
        self.message = self.input.clone();
    }

    /// Cross-screen update: open the show-text screen and copy the input text
    /// to its label, verbatim. The main screen's label is left untouched.
    pub fn press_open_screen(&mut self) {
        self.shown_text = self.input.clone();
        self.screen = ScreenId::ShowText;
    }

    /// The element tree of the currently shown screen.
    ///
    /// Only the current screen's elements are reachable; the other screen's
    /// elements do not appear in the tree.
    pub fn element_tree(&self) -> Vec<UiElement> {
        match self.screen {
            ScreenId::Main => vec![UiElement::new(MAIN_SCREEN, "", ElementKind::Screen)
                .with_children(vec![
                    UiElement::new(USER_INPUT, self.input.clone(), ElementKind::TextField),
                    UiElement::new(CHANGE_TEXT_BUTTON, "Change Text", ElementKind::Button),
                    UiElement::new(OPEN_SCREEN_BUTTON, "Open Screen", ElementKind::Button),
                    UiElement::new(MESSAGE_LABEL, self.message.clone(), ElementKind::Label),
                ])],
            ScreenId::ShowText => vec![UiElement::new(SHOW_TEXT_SCREEN, "", ElementKind::Screen)
                .with_children(vec![UiElement::new(
                    SHOWN_TEXT_LABEL,
                    self.shown_text.clone(),
                    ElementKind::Label,
                )])],
        }
    }
}

impl Default for ChangeTextApp {
    fn default() -> Self {
        Self::new()
    }
}
