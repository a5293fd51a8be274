//! Create/edit form flow for temas and postagens.

#[cfg(test)]
#[path = "form_flow_test.rs"]
mod form_flow_test;

use serde_json::Value;

use super::command::{self, Command, Flow};
use super::resource::Resource;
use crate::net::service::{ApiError, ApiRequest, RequestOptions};
use crate::net::types::UsuarioLogin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Guarded,
    /// Fetching the entity being edited.
    Loading,
    Editing,
    Saving,
    Done,
}

#[derive(Clone, Debug)]
pub struct FormFlow<R> {
    phase: FormPhase,
    id: Option<String>,
    token: String,
    draft: R,
}

impl<R: Resource> Default for FormFlow<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> FormFlow<R> {
    pub fn new() -> Self {
        Self { phase: FormPhase::Editing, id: None, token: String::new(), draft: R::default() }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The entity as last loaded or submitted.
    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Loading | FormPhase::Saving)
    }

    /// Guard on the token; with an `id`, fetch the entity to prefill.
    pub fn mount(&mut self, token: &str, id: Option<&str>) -> Vec<Command> {
        if !command::has_token(token) {
            self.phase = FormPhase::Guarded;
            return command::login_required();
        }
        self.token = token.to_owned();
        self.id = id.map(str::trim).filter(|id| !id.is_empty()).map(str::to_owned);
        match self.id.as_deref() {
            Some(id) => {
                self.phase = FormPhase::Loading;
                vec![Command::Send(ApiRequest::get(R::item_path(id), self.options()))]
            }
            None => {
                self.phase = FormPhase::Editing;
                Vec::new()
            }
        }
    }

    /// Validate and send `draft`: `PUT` when editing, `POST` otherwise. An
    /// edit always carries the route id, even if the prefill never arrived.
    pub fn submit(&mut self, mut draft: R, usuario: &UsuarioLogin) -> Vec<Command> {
        if self.phase != FormPhase::Editing {
            return Vec::new();
        }
        if let Some(id) = self.id.as_deref() {
            let Ok(id) = id.parse::<i64>() else {
                leptos::logging::warn!("{} edit with non-numeric id {id:?}", R::API_PATH);
                return vec![Command::Alert(R::UPDATE_FAILED_MESSAGE.to_owned())];
            };
            draft.set_id(id);
        }
        draft.prepare(usuario);
        if let Err(msg) = draft.validate() {
            return vec![Command::Alert(msg.to_owned())];
        }
        let body = match serde_json::to_value(&draft) {
            Ok(body) => body,
            Err(e) => {
                leptos::logging::error!("form encode failed: {e}");
                return vec![Command::Alert(self.failed_message().to_owned())];
            }
        };
        let request = if self.is_edit() {
            ApiRequest::put(R::API_PATH, body, self.options())
        } else {
            ApiRequest::post(R::API_PATH, body, self.options())
        };
        self.draft = draft;
        self.phase = FormPhase::Saving;
        vec![Command::Send(request)]
    }

    pub fn cancel(&self) -> Vec<Command> {
        vec![Command::Navigate(R::LIST_ROUTE.to_owned())]
    }

    fn options(&self) -> RequestOptions {
        RequestOptions::authorized(&self.token)
    }

    fn failed_message(&self) -> &'static str {
        if self.is_edit() { R::UPDATE_FAILED_MESSAGE } else { R::CREATE_FAILED_MESSAGE }
    }

    fn success_message(&self) -> &'static str {
        if self.is_edit() { R::UPDATED_MESSAGE } else { R::CREATED_MESSAGE }
    }
}

impl<R: Resource> Flow for FormFlow<R> {
    fn settle(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command> {
        match self.phase {
            FormPhase::Loading => {
                self.phase = FormPhase::Editing;
                match outcome {
                    Ok(body) => match serde_json::from_value(body) {
                        Ok(entity) => {
                            self.draft = entity;
                            Vec::new()
                        }
                        Err(e) => {
                            leptos::logging::warn!("{} prefill decode failed: {e}", R::API_PATH);
                            vec![Command::Alert(R::LOAD_FAILED_LABEL.to_owned())]
                        }
                    },
                    Err(err) => command::failure(&err, Some(R::LOAD_FAILED_LABEL)),
                }
            }
            FormPhase::Saving => match outcome {
                Ok(_) => {
                    self.phase = FormPhase::Done;
                    vec![
                        Command::Alert(self.success_message().to_owned()),
                        Command::Navigate(R::LIST_ROUTE.to_owned()),
                    ]
                }
                Err(err) => {
                    self.phase = FormPhase::Editing;
                    command::failure(&err, Some(self.failed_message()))
                }
            },
            FormPhase::Guarded | FormPhase::Editing | FormPhase::Done => Vec::new(),
        }
    }
}
