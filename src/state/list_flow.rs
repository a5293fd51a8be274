//! List flow backing the tema/postagem list views and the tema selector.

#[cfg(test)]
#[path = "list_flow_test.rs"]
mod list_flow_test;

use serde_json::Value;

use super::command::{self, Command, Flow};
use super::resource::Resource;
use crate::net::service::{ApiError, ApiRequest, RequestOptions};

#[derive(Clone, Debug)]
pub struct ListFlow<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R: Resource> Default for ListFlow<R> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<R: Resource> ListFlow<R> {
    /// Guard on the token, then request the whole collection.
    pub fn mount(&mut self, token: &str) -> Vec<Command> {
        if !command::has_token(token) {
            self.loading = false;
            return command::login_required();
        }
        self.loading = true;
        self.error = None;
        vec![Command::Send(ApiRequest::get(R::API_PATH, RequestOptions::authorized(token)))]
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|item| item.id() == Some(id))
    }
}

impl<R: Resource> Flow for ListFlow<R> {
    fn settle(&mut self, outcome: Result<Value, ApiError>) -> Vec<Command> {
        if !self.loading {
            return Vec::new();
        }
        self.loading = false;
        match outcome {
            Ok(body) => {
                match serde_json::from_value::<Vec<R>>(body) {
                    Ok(items) => self.items = items,
                    Err(e) => {
                        leptos::logging::warn!("list decode failed for {}: {e}", R::API_PATH);
                        self.error = Some(R::LIST_FAILED_MESSAGE.to_owned());
                    }
                }
                Vec::new()
            }
            Err(err) => {
                if !err.is_forbidden() {
                    self.error = Some(R::LIST_FAILED_MESSAGE.to_owned());
                }
                command::failure(&err, None)
            }
        }
    }
}
