//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (alerts, storage, request
//! dispatch) from page and component logic.

pub mod auth;
pub mod browser;
pub mod commands;
pub mod storage;
