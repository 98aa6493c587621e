//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `catalog.rs` — detect/types/sections/directives/help/validate.
//! - `edit.rs` — preview/insert/new.
//! - `session.rs` — interactive line-driven session.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod catalog;
pub mod edit;
pub mod session;

pub use catalog::handle_catalog_commands;
pub use edit::handle_edit_commands;
pub use session::handle_session_command;
