//! Login form flow.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use serde_json::Value;

use super::command::{Command, Flow, HOME_ROUTE};
use crate::net::service::{ApiError, ApiRequest, LOGIN_PATH, RequestOptions};
use crate::net::types::{Credenciais, UsuarioLogin};

pub const LOGIN_FAILED_MESSAGE: &str = "Dados do usuário inconsistentes!";

#[derive(Clone, Debug, Default)]
pub struct LoginFlow {
    pub busy: bool,
}

/// Trim and require both fields.
///
/// # Errors
///
/// Returns the message to alert when either field is blank.
pub fn validate_credentials(usuario: &str, senha: &str) -> Result<Credenciais, &'static str> {
    let usuario = usuario.trim();
    if usuario.is_empty() || senha.is_empty() {
        return Err("Informe usuário e senha.");
    }
    Ok(Credenciais { usuario: usuario.to_owned(), senha: senha.to_owned() })
}

impl LoginFlow {
    pub fn submit(&mut self, usuario: &str, senha: &str) -> Vec<Command> {
        if self.busy {
            return Vec::new();
        }
        let credenciais = match validate_credentials(usuario, senha) {
            Ok(c) => c,
            Err(msg) => return vec![Command::Alert(msg.to_owned())],
        };
        let Ok(body) = serde_json::to_value(&credenciais) else {
            return vec![Command::Alert(LOGIN_FAILED_MESSAGE.to_owned())];
        };
        self.busy = true;
        vec![Command::Send(ApiRequest::post(LOGIN_PATH, body, RequestOptions::default()))]
    }
}

impl Flow for LoginFlow {
    fn settle(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command> {
        if !self.busy {
            return Vec::new();
        }
        self.busy = false;
        let usuario = outcome
            .ok()
            .and_then(|body| serde_json::from_value::<UsuarioLogin>(body).ok())
            .filter(|u| !u.token.trim().is_empty());
        match usuario {
            Some(usuario) => vec![Command::SignIn(usuario), Command::Navigate(HOME_ROUTE.to_owned())],
            None => vec![Command::Alert(LOGIN_FAILED_MESSAGE.to_owned())],
        }
    }
}
