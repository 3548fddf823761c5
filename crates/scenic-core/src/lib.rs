//! # scenic-core
//!
//! Core library for scripted UI scenario automation.
//!
//! This crate provides the foundational components for driving an application's
//! user interface from declarative scenarios: an element model, a
//! backend-agnostic driver trait, action types, an execution engine, and
//! session tracking with persistent action logs.
//!
//! ## Modules
//!
//! - [`element`] - UI element tree types and selector matching
//! - [`driver`] - The [`UiDriver`](driver::UiDriver) trait implemented by automation backends
//! - [`action`] - Action types and logging for automation operations
//! - [`executor`] - Action execution engine with result handling
//! - [`session`] - Session state management with JSONL action persistence
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use scenic_core::action::ActionType;
//! use scenic_core::driver::UiDriver;
//! use scenic_core::executor::ActionExecutor;
//!
//! async fn demo(driver: Arc<dyn UiDriver>) {
//!     let executor = ActionExecutor::new(driver);
//!     executor.execute(ActionType::Launch).await;
//!
//!     let result = executor.execute(ActionType::Tap {
//!         selector: "change-text-button".to_string(),
//!     }).await;
//!
//!     if result.success {
//!         println!("Tapped!");
//!     }
//! }
//! ```

pub mod action;
pub mod driver;
pub mod element;
pub mod executor;
pub mod session;
