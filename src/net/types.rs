//! REST DTOs for the blog API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON payloads so serde round-trips stay
//! lossless. Ids are optional because create requests omit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A theme used to tag posts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub descricao: String,
}

/// A blog post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Postagem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub texto: String,
    /// Server-assigned timestamp; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default)]
    pub tema: Option<Tema>,
    #[serde(default)]
    pub usuario: Option<Usuario>,
}

/// A registered user as embedded in posts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: String,
    /// Login name (an email address).
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub senha: String,
    #[serde(default)]
    pub foto: String,
}

/// The logged-in user as returned by `POST /usuarios/logar`.
///
/// An empty `token` means "not authenticated".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsuarioLogin {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub senha: String,
    #[serde(default)]
    pub foto: String,
    #[serde(default)]
    pub token: String,
}

impl UsuarioLogin {
    /// The user reference stamped into posts created by this session.
    pub fn as_usuario(&self) -> Usuario {
        Usuario {
            id: self.id,
            nome: self.nome.clone(),
            usuario: self.usuario.clone(),
            senha: String::new(),
            foto: self.foto.clone(),
        }
    }
}

/// Credentials body for `POST /usuarios/logar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credenciais {
    pub usuario: String,
    pub senha: String,
}
