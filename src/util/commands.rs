//! Executes flow [`Command`]s against the browser, router and session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own an `RwSignal<F: Flow>` and hand its commands to
//! [`CommandRunner::run`]. Requests are spawned on the local executor; when a
//! request settles, its outcome goes back into the same flow and the resulting
//! commands are run in turn.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ApiConfig;
use crate::net::service::ApiRequest;
use crate::state::command::{Command, Flow};
use crate::state::session::SessionState;
use crate::util::browser;

#[derive(Clone)]
pub struct CommandRunner<N> {
    session: RwSignal<SessionState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    config: ApiConfig,
    navigate: N,
}

impl<N> CommandRunner<N>
where
    N: Fn(&str, NavigateOptions) + Clone + Send + Sync + 'static,
{
    /// Build a runner from the session and config contexts.
    pub fn new(navigate: N) -> Self {
        Self {
            session: expect_context::<RwSignal<SessionState>>(),
            config: expect_context::<ApiConfig>(),
            navigate,
        }
    }

    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    pub fn run<F>(&self, flow: RwSignal<F>, commands: Vec<Command>)
    where
        F: Flow + Send + Sync + 'static,
    {
        for command in commands {
            if let Some(request) = self.apply(command) {
                self.dispatch(flow, request);
            }
        }
    }

    /// Run commands that have no flow to settle (navbar actions, guards).
    pub fn run_local(&self, commands: Vec<Command>) {
        for command in commands {
            if let Some(request) = self.apply(command) {
                leptos::logging::warn!("dropping {} {}: no flow to settle", request.method.as_str(), request.path);
            }
        }
    }

    /// Run a flow method against the current flow value, then its commands.
    pub fn drive<F>(&self, flow: RwSignal<F>, step: impl FnOnce(&mut F) -> Vec<Command>)
    where
        F: Flow + Send + Sync + 'static,
    {
        let commands = flow.try_update(step).unwrap_or_default();
        self.run(flow, commands);
    }

    /// Execute a local command; requests are handed back to the caller.
    fn apply(&self, command: Command) -> Option<ApiRequest> {
        match command {
            Command::Alert(message) => browser::alert(&message),
            Command::Navigate(path) => (self.navigate)(&path, NavigateOptions::default()),
            Command::Logout => self.session.update(SessionState::logout),
            Command::SignOut => self.session.update(SessionState::sign_out),
            Command::SignIn(usuario) => self.session.update(|s| s.login(usuario)),
            Command::Send(request) => return Some(request),
        }
        None
    }

    fn dispatch<F>(&self, flow: RwSignal<F>, request: ApiRequest)
    where
        F: Flow + Send + Sync + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let runner = self.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::service::send(&runner.config, &request).await;
                if let Err(e) = &outcome {
                    leptos::logging::warn!("{} {} failed: {e}", request.method.as_str(), request.path);
                }
                runner.drive(flow, |f| f.settle(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (flow, request);
        }
    }
}
