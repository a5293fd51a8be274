//! Shared session guard for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page mounts its flow with the current token and must
//! redirect to login if the session is cleared while it is open (for example
//! after a 403 forces logout). Nothing happens until the stored session has
//! been restored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::command::{self, Command, Flow};
use crate::state::session::SessionState;
use crate::util::commands::CommandRunner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    /// Session still loading.
    Wait,
    /// First run with a known session: mount the flow.
    Mount,
    /// The session was lost while the page was open.
    LoginRequired,
    Idle,
}

/// Decide the guard's next step. `seen` is the authentication state at the
/// previous run, `None` until the flow has been mounted.
pub fn guard_step(seen: Option<bool>, session: &SessionState) -> GuardAction {
    if session.loading {
        return GuardAction::Wait;
    }
    match seen {
        None => GuardAction::Mount,
        Some(true) if !session.is_authenticated() && !session.signed_out => GuardAction::LoginRequired,
        Some(_) => GuardAction::Idle,
    }
}

/// Mount `flow` once with the session token, then replay the login guard
/// whenever the token goes from present to absent.
pub fn install_session_guard<F, N, M>(runner: CommandRunner<N>, flow: RwSignal<F>, mount: M)
where
    F: Flow + Send + Sync + 'static,
    N: Fn(&str, NavigateOptions) + Clone + Send + Sync + 'static,
    M: Fn(&mut F, &str) -> Vec<Command> + 'static,
{
    let session = runner.session();
    Effect::new(move |seen: Option<Option<bool>>| {
        let seen = seen.flatten();
        let (action, token) = session.with(|s| (guard_step(seen, s), s.token().to_owned()));
        match action {
            GuardAction::Wait => return seen,
            GuardAction::Mount => runner.drive(flow, |f| mount(f, &token)),
            GuardAction::LoginRequired => runner.run_local(command::login_required()),
            GuardAction::Idle => {}
        }
        Some(command::has_token(&token))
    });
}
