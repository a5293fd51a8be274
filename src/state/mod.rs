//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only state shared across pages. The `*_flow` modules are
//! page-local state machines that return [`command::Command`]s instead of
//! touching the browser, so they run unchanged under `cargo test`.

pub mod command;
pub mod delete_flow;
pub mod form_flow;
pub mod list_flow;
pub mod login_flow;
pub mod resource;
pub mod session;
