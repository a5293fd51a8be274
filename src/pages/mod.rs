//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, flow signals) and
//! delegates rendering details to `components`.

pub mod delete_postagem;
pub mod delete_tema;
pub mod home;
pub mod login;
pub mod postagem_form;
pub mod postagens;
pub mod tema_form;
pub mod temas;
