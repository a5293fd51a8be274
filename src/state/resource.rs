//! Per-entity routing, validation and user-facing messages.
//!
//! DESIGN
//! ======
//! The list, form and delete flows are generic over [`Resource`], so `Tema`
//! and `Postagem` share one implementation and differ only in the constants
//! below.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::{Postagem, Tema, UsuarioLogin};

pub trait Resource: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// REST collection path, e.g. `/temas`.
    const API_PATH: &'static str;
    /// Client route of the list view.
    const LIST_ROUTE: &'static str;

    const CREATED_MESSAGE: &'static str;
    const CREATE_FAILED_MESSAGE: &'static str;
    const UPDATED_MESSAGE: &'static str;
    const UPDATE_FAILED_MESSAGE: &'static str;
    const DELETED_MESSAGE: &'static str;
    const DELETE_FAILED_MESSAGE: &'static str;
    /// Shown in place of the summary when the entity could not be fetched.
    const LOAD_FAILED_LABEL: &'static str;
    const LIST_FAILED_MESSAGE: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Short text identifying the entity in confirmation views.
    fn summary(&self) -> String;

    /// Local checks run before a create/update request.
    ///
    /// # Errors
    ///
    /// Returns the message to alert when the draft is not submittable.
    fn validate(&self) -> Result<(), &'static str>;

    /// Fill in session-derived fields before submit.
    fn prepare(&mut self, _usuario: &UsuarioLogin) {}

    fn item_path(id: &str) -> String {
        format!("{}/{id}", Self::API_PATH)
    }
}

pub const POST_TITLE_MIN_CHARS: usize = 5;
pub const POST_TEXT_MIN_CHARS: usize = 10;

impl Resource for Tema {
    const API_PATH: &'static str = "/temas";
    const LIST_ROUTE: &'static str = "/temas";

    const CREATED_MESSAGE: &'static str = "Tema cadastrado com sucesso";
    const CREATE_FAILED_MESSAGE: &'static str = "Erro ao cadastrar o tema.";
    const UPDATED_MESSAGE: &'static str = "Tema atualizado com sucesso";
    const UPDATE_FAILED_MESSAGE: &'static str = "Erro ao atualizar o tema.";
    const DELETED_MESSAGE: &'static str = "Tema apagado com sucesso";
    const DELETE_FAILED_MESSAGE: &'static str = "Erro ao deletar o tema.";
    const LOAD_FAILED_LABEL: &'static str = "Erro ao carregar tema";
    const LIST_FAILED_MESSAGE: &'static str = "Erro ao carregar os temas.";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn summary(&self) -> String {
        self.descricao.clone()
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.descricao.trim().is_empty() {
            return Err("Informe a descrição do tema.");
        }
        Ok(())
    }
}

impl Resource for Postagem {
    const API_PATH: &'static str = "/postagens";
    const LIST_ROUTE: &'static str = "/postagens";

    const CREATED_MESSAGE: &'static str = "Postagem cadastrada com sucesso";
    const CREATE_FAILED_MESSAGE: &'static str = "Erro ao cadastrar a postagem.";
    const UPDATED_MESSAGE: &'static str = "Postagem atualizada com sucesso";
    const UPDATE_FAILED_MESSAGE: &'static str = "Erro ao atualizar a postagem.";
    const DELETED_MESSAGE: &'static str = "Postagem apagada com sucesso";
    const DELETE_FAILED_MESSAGE: &'static str = "Erro ao deletar a postagem.";
    const LOAD_FAILED_LABEL: &'static str = "Erro ao carregar postagem";
    const LIST_FAILED_MESSAGE: &'static str = "Erro ao carregar as postagens.";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn summary(&self) -> String {
        self.titulo.clone()
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.titulo.trim().chars().count() < POST_TITLE_MIN_CHARS {
            return Err("O título deve ter no mínimo 5 caracteres.");
        }
        if self.texto.trim().chars().count() < POST_TEXT_MIN_CHARS {
            return Err("O texto deve ter no mínimo 10 caracteres.");
        }
        if self.tema.as_ref().and_then(|t| t.id).is_none() {
            return Err("Selecione um tema.");
        }
        Ok(())
    }

    fn prepare(&mut self, usuario: &UsuarioLogin) {
        self.usuario = Some(usuario.as_usuario());
    }
}
