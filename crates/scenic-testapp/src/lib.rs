//! # scenic-testapp
//!
//! The embedded application that scenic scenarios run against: a two-screen
//! sample app where text typed into an input field is copied verbatim to a
//! label, either on the same screen or on a second screen opened by a button.
//!
//! The app is a headless behavioral model. Its observable contract is the
//! element tree it reports for the current screen; there is no renderer.
//!
//! ## Modules
//!
//! - [`app`] - The [`ChangeTextApp`](app::ChangeTextApp) state machine
//! - [`driver`] - [`TestAppDriver`](driver::TestAppDriver), an in-process
//!   [`UiDriver`](scenic_core::driver::UiDriver) for the app

pub mod app;
pub mod driver;
