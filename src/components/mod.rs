//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome, cards and forms while reading the session from
//! Leptos context. Lists and forms that hit the API own their flow signal.

pub mod delete_confirm;
pub mod footer;
pub mod navbar;
pub mod postagem_card;
pub mod postagem_form;
pub mod postagem_list;
pub mod postagem_modal;
pub mod tema_card;
pub mod tema_list;
