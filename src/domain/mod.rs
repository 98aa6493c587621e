//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `unit_type.rs` — unit-type tag and its static info table.
//! - `catalog.rs` — section/directive lookup tables and directive help.
//! - `models.rs` — config and report/output structs.
//! - `constants.rs` — stable constants (default filename, env names).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep them in sync with
//! `docs/contracts/*`.

pub mod catalog;
pub mod constants;
pub mod models;
pub mod unit_type;
