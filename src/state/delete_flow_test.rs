use super::*;
use crate::net::service::Method;
use crate::net::types::{Postagem, Tema};

const TOKEN: &str = "Bearer abc";

fn sends(commands: &[Command]) -> Vec<&ApiRequest> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Send(req) => Some(req),
            _ => None,
        })
        .collect()
}

fn forbidden() -> ApiError {
    ApiError::Status { status: 403, body: String::new() }
}

fn mounted_ready() -> DeleteFlow<Tema> {
    let mut flow = DeleteFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    flow.settle(Ok(serde_json::json!({ "id": 7, "descricao": "Rust" })));
    flow
}

// =============================================================
// Mount
// =============================================================

#[test]
fn mount_without_token_redirects_without_request() {
    let mut flow = DeleteFlow::<Tema>::new();
    let commands = flow.mount("", Some("7"));
    assert_eq!(commands, command::login_required());
    assert!(sends(&commands).is_empty());
    assert_eq!(flow.phase(), DeletePhase::Guarded);
}

#[test]
fn mount_with_token_issues_one_authorized_fetch() {
    let mut flow = DeleteFlow::<Tema>::new();
    let commands = flow.mount(TOKEN, Some("7"));
    let requests = sends(&commands);
    assert_eq!(commands.len(), 1);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/temas/7");
    assert_eq!(requests[0].options.authorization(), Some(TOKEN));
    assert!(flow.is_loading());
    assert!(!flow.confirm_enabled());
    assert_eq!(flow.display_text(), "Carregando...");
}

#[test]
fn mount_without_id_returns_to_list() {
    let mut flow = DeleteFlow::<Tema>::new();
    assert_eq!(flow.mount(TOKEN, None), vec![Command::Navigate("/temas".to_owned())]);
    assert_eq!(flow.mount(TOKEN, Some("  ")), vec![Command::Navigate("/temas".to_owned())]);
}

#[test]
fn fetch_success_shows_description() {
    let flow = mounted_ready();
    assert!(!flow.is_loading());
    assert!(flow.confirm_enabled());
    assert_eq!(flow.display_text(), "Rust");
}

#[test]
fn fetch_twice_with_same_id_shows_same_description() {
    let mut flow = mounted_ready();
    let first = flow.display_text();
    let commands = flow.mount(TOKEN, Some("7"));
    assert_eq!(sends(&commands)[0].method, Method::Get);
    flow.settle(Ok(serde_json::json!({ "id": 7, "descricao": "Rust" })));
    assert_eq!(flow.display_text(), first);
}

#[test]
fn fetch_failure_ends_loading_with_error_label() {
    let mut flow = DeleteFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    let commands = flow.settle(Err(ApiError::Status { status: 404, body: String::new() }));
    assert!(commands.is_empty());
    assert!(!flow.is_loading());
    assert_eq!(flow.display_text(), "Erro ao carregar tema");
}

#[test]
fn fetch_forbidden_forces_logout() {
    let mut flow = DeleteFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    assert_eq!(flow.settle(Err(forbidden())), vec![Command::Logout]);
    assert!(!flow.is_loading());
}

#[test]
fn fetch_with_unexpected_body_shows_error_label() {
    let mut flow = DeleteFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    flow.settle(Ok(serde_json::json!("oops")));
    assert_eq!(flow.display_text(), "Erro ao carregar tema");
}

// =============================================================
// Cancel
// =============================================================

#[test]
fn cancel_navigates_to_list_without_request() {
    let flow = mounted_ready();
    assert_eq!(flow.cancel(), vec![Command::Navigate("/temas".to_owned())]);
}

// =============================================================
// Confirm
// =============================================================

#[test]
fn confirm_issues_one_authorized_delete_and_enters_loading() {
    let mut flow = mounted_ready();
    let commands = flow.confirm();
    let requests = sends(&commands);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path, "/temas/7");
    assert_eq!(requests[0].options.authorization(), Some(TOKEN));
    assert!(flow.is_loading());
    assert!(!flow.confirm_enabled());
    assert_eq!(flow.phase(), DeletePhase::LoadingDelete);
}

#[test]
fn second_confirm_while_deleting_is_ignored() {
    let mut flow = mounted_ready();
    flow.confirm();
    assert!(flow.confirm().is_empty());
}

#[test]
fn confirm_before_fetch_settles_is_ignored() {
    let mut flow = DeleteFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    assert!(flow.confirm().is_empty());
}

#[test]
fn delete_success_alerts_and_returns_to_list() {
    let mut flow = mounted_ready();
    flow.confirm();
    let commands = flow.settle(Ok(serde_json::Value::Null));
    assert_eq!(
        commands,
        vec![
            Command::Alert("Tema apagado com sucesso".to_owned()),
            Command::Navigate("/temas".to_owned()),
        ]
    );
    assert_eq!(flow.phase(), DeletePhase::Done);
    assert!(!flow.is_loading());
}

#[test]
fn delete_forbidden_forces_logout() {
    let mut flow = mounted_ready();
    flow.confirm();
    assert_eq!(flow.settle(Err(forbidden())), vec![Command::Logout]);
    assert!(!flow.is_loading());
}

#[test]
fn delete_other_failure_alerts_and_stays() {
    let mut flow = mounted_ready();
    flow.confirm();
    let commands = flow.settle(Err(ApiError::Status { status: 500, body: String::new() }));
    assert_eq!(commands, vec![Command::Alert("Erro ao deletar o tema.".to_owned())]);
    assert!(!commands.iter().any(|c| matches!(c, Command::Navigate(_))));
    assert!(flow.confirm_enabled());
}

#[test]
fn delete_can_be_retried_after_failure() {
    let mut flow = mounted_ready();
    flow.confirm();
    flow.settle(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(sends(&flow.confirm()).len(), 1);
}

#[test]
fn stray_settle_after_done_is_ignored() {
    let mut flow = mounted_ready();
    flow.confirm();
    flow.settle(Ok(serde_json::Value::Null));
    assert!(flow.settle(Err(forbidden())).is_empty());
}

// =============================================================
// Postagem
// =============================================================

#[test]
fn postagem_flow_uses_postagem_routes_and_messages() {
    let mut flow = DeleteFlow::<Postagem>::new();
    let commands = flow.mount(TOKEN, Some("3"));
    assert_eq!(sends(&commands)[0].path, "/postagens/3");
    flow.settle(Ok(serde_json::json!({ "id": 3, "titulo": "Meu post", "texto": "..." })));
    assert_eq!(flow.display_text(), "Meu post");
    flow.confirm();
    assert_eq!(
        flow.settle(Ok(serde_json::Value::Null)),
        vec![
            Command::Alert("Postagem apagada com sucesso".to_owned()),
            Command::Navigate("/postagens".to_owned()),
        ]
    );
}
