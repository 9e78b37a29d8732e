//! Terminal User Interface for viewing a repository's issues.
//!
//! This module hosts the repository view inside a bubbletea-rs program.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: [`app::RepositoryApp`], wrapping the pure
//!   [`state::RepositoryView`] state machine
//! - **View**: Rendering in `app::rendering` and the stateless components
//! - **Update**: Messages become state machine events; the effects those
//!   events produce run as async commands
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter enum and the view state machine
//! - [`components`]: Stateless UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway, locator and settings are handed over through
//! module-level storage. Call [`set_view_context`] before starting the
//! program, and `RepositoryApp::init()` will pick it up.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::RepositoryApp;
pub use storage::{ViewContext, set_initial_terminal_size, set_view_context};
