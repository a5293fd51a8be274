//! Delete-confirmation flow shared by the tema and postagem delete pages.
//!
//! DESIGN
//! ======
//! Phases advance `LoadingFetch -> Ready -> LoadingDelete -> Done`; a failed
//! delete returns to `Ready`. `confirm` is only accepted in `Ready`, so one
//! view instance can never have two deletes in flight.

#[cfg(test)]
#[path = "delete_flow_test.rs"]
mod delete_flow_test;

use serde_json::Value;

use super::command::{self, Command, Flow};
use super::resource::Resource;
use crate::net::service::{ApiError, ApiRequest, RequestOptions};

pub const LOADING_LABEL: &str = "Carregando...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletePhase {
    /// Mounted without a session; nothing will be fetched.
    Guarded,
    LoadingFetch,
    Ready,
    LoadingDelete,
    Done,
}

#[derive(Clone, Debug)]
pub struct DeleteFlow<R> {
    phase: DeletePhase,
    id: Option<String>,
    token: String,
    entity: Option<R>,
}

impl<R: Resource> Default for DeleteFlow<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> DeleteFlow<R> {
    /// A flow that has not mounted yet; it renders as loading.
    pub fn new() -> Self {
        Self { phase: DeletePhase::LoadingFetch, id: None, token: String::new(), entity: None }
    }

    pub fn phase(&self) -> DeletePhase {
        self.phase
    }

    pub fn entity(&self) -> Option<&R> {
        self.entity.as_ref()
    }

    /// Start the view: guard on the token, then fetch the entity by `id`.
    pub fn mount(&mut self, token: &str, id: Option<&str>) -> Vec<Command> {
        if !command::has_token(token) {
            self.phase = DeletePhase::Guarded;
            return command::login_required();
        }
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            self.phase = DeletePhase::Ready;
            return vec![Command::Navigate(R::LIST_ROUTE.to_owned())];
        };
        self.token = token.to_owned();
        self.id = Some(id.to_owned());
        self.entity = None;
        self.phase = DeletePhase::LoadingFetch;
        vec![Command::Send(ApiRequest::get(R::item_path(id), self.options()))]
    }

    /// "Não": return to the list without touching the API.
    pub fn cancel(&self) -> Vec<Command> {
        vec![Command::Navigate(R::LIST_ROUTE.to_owned())]
    }

    /// "Sim": issue the delete, unless a request is already in flight.
    pub fn confirm(&mut self) -> Vec<Command> {
        if self.phase != DeletePhase::Ready {
            return Vec::new();
        }
        let Some(id) = self.id.as_deref() else {
            return Vec::new();
        };
        let request = ApiRequest::delete(R::item_path(id), self.options());
        self.phase = DeletePhase::LoadingDelete;
        vec![Command::Send(request)]
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DeletePhase::LoadingFetch | DeletePhase::LoadingDelete)
    }

    pub fn confirm_enabled(&self) -> bool {
        self.phase == DeletePhase::Ready
    }

    /// Text for the entity panel.
    pub fn display_text(&self) -> String {
        if self.is_loading() {
            return LOADING_LABEL.to_owned();
        }
        self.entity
            .as_ref()
            .map(Resource::summary)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| R::LOAD_FAILED_LABEL.to_owned())
    }

    fn options(&self) -> RequestOptions {
        RequestOptions::authorized(&self.token)
    }

    fn settle_fetch(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command> {
        self.phase = DeletePhase::Ready;
        match outcome {
            Ok(body) => {
                self.entity = serde_json::from_value(body)
                    .inspect_err(|e| leptos::logging::warn!("{} fetch decode failed: {e}", R::API_PATH))
                    .ok();
                Vec::new()
            }
            Err(err) => command::failure(&err, None),
        }
    }

    fn settle_delete(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command> {
        match outcome {
            Ok(_) => {
                self.phase = DeletePhase::Done;
                vec![
                    Command::Alert(R::DELETED_MESSAGE.to_owned()),
                    Command::Navigate(R::LIST_ROUTE.to_owned()),
                ]
            }
            Err(err) => {
                self.phase = DeletePhase::Ready;
                command::failure(&err, Some(R::DELETE_FAILED_MESSAGE))
            }
        }
    }
}

impl<R: Resource> Flow for DeleteFlow<R> {
    fn settle(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command> {
        match self.phase {
            DeletePhase::LoadingFetch => self.settle_fetch(outcome),
            DeletePhase::LoadingDelete => self.settle_delete(outcome),
            DeletePhase::Guarded | DeletePhase::Ready | DeletePhase::Done => Vec::new(),
        }
    }
}
