//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `classify.rs` — filename → unit type.
//! - `validate.rs` — directive value spot checks.
//! - `editor.rs` — text buffer, cursor and template insertion.
//! - `session.rs` — action dispatch and editing session state.
//! - `storage.rs` — unit file load/save, config, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - `classify`, `validate` and `editor` are pure.
//! - Side effects live in `storage` only.
//! - Keep command handlers thin; delegate to services.

pub mod classify;
pub mod editor;
pub mod output;
pub mod session;
pub mod storage;
pub mod validate;
