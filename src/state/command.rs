//! Side effects requested by the view flows.
//!
//! ARCHITECTURE
//! ============
//! Flows never touch the browser. They return [`Command`]s, which
//! `util::commands::CommandRunner` executes; request outcomes are fed back
//! through [`Flow::settle`]. Tests drive flows directly and assert on the
//! returned commands.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use serde_json::Value;

use crate::net::service::{ApiError, ApiRequest};
use crate::net::types::UsuarioLogin;

pub const LOGIN_ROUTE: &str = "/";
pub const HOME_ROUTE: &str = "/home";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Você precisa estar logado";
pub const LOGGED_OUT_MESSAGE: &str = "O usuário foi desconectado!";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Blocking browser alert.
    Alert(String),
    /// Client-side route change.
    Navigate(String),
    /// Clear the session after the API rejected the token.
    Logout,
    /// Clear the session at the user's request.
    SignOut,
    /// Store a freshly authenticated user in the session.
    SignIn(UsuarioLogin),
    /// Perform an API call and settle the issuing flow with its outcome.
    Send(ApiRequest),
}

/// A view flow that issues requests one at a time.
pub trait Flow {
    /// Consume the outcome of the request most recently emitted as
    /// [`Command::Send`].
    fn settle(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command>;
}

/// Commands run when a protected view is reached without a token.
pub fn login_required() -> Vec<Command> {
    vec![
        Command::Alert(LOGIN_REQUIRED_MESSAGE.to_owned()),
        Command::Navigate(LOGIN_ROUTE.to_owned()),
    ]
}

/// Commands for a user-initiated logout. Session guards skip their
/// login-required alert for [`Command::SignOut`].
pub fn logout() -> Vec<Command> {
    vec![
        Command::Alert(LOGGED_OUT_MESSAGE.to_owned()),
        Command::SignOut,
        Command::Navigate(LOGIN_ROUTE.to_owned()),
    ]
}

pub fn has_token(token: &str) -> bool {
    !token.trim().is_empty()
}

/// Commands for a failed request: forced logout on 403, otherwise the
/// optional alert.
pub fn failure(err: &ApiError, alert: Option<&str>) -> Vec<Command> {
    if err.is_forbidden() {
        return vec![Command::Logout];
    }
    alert.map(|msg| vec![Command::Alert(msg.to_owned())]).unwrap_or_default()
}
