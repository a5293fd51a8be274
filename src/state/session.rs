//! Session state for the logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `app::App` as `RwSignal<SessionState>`. Protected pages
//! read the token from it, and the command runner writes to it on sign-in and
//! logout.
//!
//! The server cannot see localStorage, so the app starts from
//! [`SessionState::pending`] and restores the stored user after hydration.
//! Guards wait while `loading` is set.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UsuarioLogin;
use crate::util::storage;

const STORAGE_KEY: &str = "blogpessoal_usuario";

/// Current user; an empty token means logged out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub usuario: UsuarioLogin,
    /// Stored session not read yet.
    pub loading: bool,
    /// The user ended the session themselves; no login-required alert.
    pub signed_out: bool,
}

impl SessionState {
    /// Initial state shared by the server render and hydration.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Rebuild the session persisted by a previous [`SessionState::login`].
    pub fn restore() -> Self {
        let usuario = storage::load_json::<UsuarioLogin>(STORAGE_KEY).unwrap_or_default();
        Self { usuario, ..Self::default() }
    }

    pub fn token(&self) -> &str {
        &self.usuario.token
    }

    pub fn is_authenticated(&self) -> bool {
        !self.usuario.token.trim().is_empty()
    }

    pub fn login(&mut self, usuario: UsuarioLogin) {
        storage::save_json(STORAGE_KEY, &usuario);
        *self = Self { usuario, ..Self::default() };
    }

    /// Forced logout, e.g. after a 403.
    pub fn logout(&mut self) {
        storage::remove(STORAGE_KEY);
        *self = Self::default();
    }

    /// Logout requested by the user from the navbar.
    pub fn sign_out(&mut self) {
        self.logout();
        self.signed_out = true;
    }
}
