use super::*;
use crate::net::service::Method;
use crate::net::types::{Postagem, Tema};

const TOKEN: &str = "Bearer abc";

fn login() -> UsuarioLogin {
    UsuarioLogin { id: Some(1), nome: "Duda".to_owned(), token: TOKEN.to_owned(), ..UsuarioLogin::default() }
}

fn tema(descricao: &str) -> Tema {
    Tema { id: None, descricao: descricao.to_owned() }
}

fn only_request(commands: &[Command]) -> &ApiRequest {
    match commands {
        [Command::Send(req)] => req,
        other => panic!("expected a single request, got {other:?}"),
    }
}

#[test]
fn mount_without_token_is_guarded() {
    let mut flow = FormFlow::<Tema>::new();
    assert_eq!(flow.mount("", None), command::login_required());
    assert_eq!(flow.phase(), FormPhase::Guarded);
    assert!(flow.submit(tema("Rust"), &login()).is_empty());
}

#[test]
fn mount_for_create_issues_no_request() {
    let mut flow = FormFlow::<Tema>::new();
    assert!(flow.mount(TOKEN, None).is_empty());
    assert!(!flow.is_edit());
    assert_eq!(flow.phase(), FormPhase::Editing);
}

#[test]
fn mount_for_edit_fetches_and_prefills() {
    let mut flow = FormFlow::<Tema>::new();
    let commands = flow.mount(TOKEN, Some("4"));
    let req = only_request(&commands);
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/temas/4");
    assert!(flow.is_busy());

    assert!(flow.settle(Ok(serde_json::json!({ "id": 4, "descricao": "Java" }))).is_empty());
    assert_eq!(flow.draft(), &Tema { id: Some(4), descricao: "Java".to_owned() });
    assert!(!flow.is_busy());
}

#[test]
fn edit_fetch_forbidden_forces_logout() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("4"));
    let err = ApiError::Status { status: 403, body: String::new() };
    assert_eq!(flow.settle(Err(err)), vec![Command::Logout]);
}

#[test]
fn submit_invalid_alerts_without_request() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, None);
    assert_eq!(
        flow.submit(tema("   "), &login()),
        vec![Command::Alert("Informe a descrição do tema.".to_owned())]
    );
    assert_eq!(flow.phase(), FormPhase::Editing);
}

#[test]
fn submit_create_posts_to_collection() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, None);
    let commands = flow.submit(tema("Rust"), &login());
    let req = only_request(&commands);
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/temas");
    assert_eq!(req.body, Some(serde_json::json!({ "descricao": "Rust" })));
    assert_eq!(req.options.authorization(), Some(TOKEN));
    assert!(flow.is_busy());
}

#[test]
fn submit_while_saving_is_ignored() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, None);
    flow.submit(tema("Rust"), &login());
    assert!(flow.submit(tema("Rust"), &login()).is_empty());
}

#[test]
fn submit_edit_puts_to_collection() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("4"));
    flow.settle(Ok(serde_json::json!({ "id": 4, "descricao": "Java" })));
    let commands = flow.submit(Tema { id: Some(4), descricao: "Kotlin".to_owned() }, &login());
    let req = only_request(&commands);
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/temas");
    assert_eq!(req.body, Some(serde_json::json!({ "id": 4, "descricao": "Kotlin" })));
}

#[test]
fn create_success_alerts_and_navigates() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, None);
    flow.submit(tema("Rust"), &login());
    assert_eq!(
        flow.settle(Ok(serde_json::json!({ "id": 9, "descricao": "Rust" }))),
        vec![
            Command::Alert("Tema cadastrado com sucesso".to_owned()),
            Command::Navigate("/temas".to_owned()),
        ]
    );
    assert_eq!(flow.phase(), FormPhase::Done);
}

#[test]
fn update_failure_alerts_and_allows_resubmit() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("4"));
    flow.settle(Ok(serde_json::json!({ "id": 4, "descricao": "Java" })));
    flow.submit(Tema { id: Some(4), descricao: "Kotlin".to_owned() }, &login());
    let err = ApiError::Status { status: 400, body: String::new() };
    assert_eq!(flow.settle(Err(err)), vec![Command::Alert("Erro ao atualizar o tema.".to_owned())]);
    assert_eq!(flow.phase(), FormPhase::Editing);
    assert_eq!(flow.draft().descricao, "Kotlin");
}

#[test]
fn save_forbidden_forces_logout() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, None);
    flow.submit(tema("Rust"), &login());
    let err = ApiError::Status { status: 403, body: String::new() };
    assert_eq!(flow.settle(Err(err)), vec![Command::Logout]);
}

#[test]
fn postagem_submit_stamps_author() {
    let mut flow = FormFlow::<Postagem>::new();
    flow.mount(TOKEN, None);
    let draft = Postagem {
        titulo: "Primeiro post".to_owned(),
        texto: "Um texto com tamanho suficiente".to_owned(),
        tema: Some(Tema { id: Some(2), descricao: "Rust".to_owned() }),
        ..Postagem::default()
    };
    let commands = flow.submit(draft, &login());
    let req = only_request(&commands);
    assert_eq!(req.path, "/postagens");
    let body = req.body.as_ref().unwrap();
    assert_eq!(body["usuario"]["id"], 1);
    assert_eq!(body["tema"]["id"], 2);
}

#[test]
fn cancel_returns_to_list() {
    let flow = FormFlow::<Postagem>::new();
    assert_eq!(flow.cancel(), vec![Command::Navigate("/postagens".to_owned())]);
}

#[test]
fn edit_fetch_failure_alerts() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    let err = ApiError::Status { status: 500, body: String::new() };
    assert_eq!(flow.settle(Err(err)), vec![Command::Alert("Erro ao carregar tema".to_owned())]);
    assert_eq!(flow.phase(), FormPhase::Editing);
}

#[test]
fn edit_prefill_undecodable_alerts() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    assert_eq!(
        flow.settle(Ok(serde_json::json!("oops"))),
        vec![Command::Alert("Erro ao carregar tema".to_owned())]
    );
}

#[test]
fn edit_after_failed_prefill_still_puts_route_id() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("7"));
    flow.settle(Err(ApiError::Status { status: 500, body: String::new() }));
    let commands = flow.submit(tema("Nova"), &login());
    let req = only_request(&commands);
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.body, Some(serde_json::json!({ "id": 7, "descricao": "Nova" })));
}

#[test]
fn edit_with_non_numeric_id_is_not_sent() {
    let mut flow = FormFlow::<Tema>::new();
    flow.mount(TOKEN, Some("abc"));
    flow.settle(Err(ApiError::Status { status: 404, body: String::new() }));
    assert_eq!(
        flow.submit(tema("Nova"), &login()),
        vec![Command::Alert("Erro ao atualizar o tema.".to_owned())]
    );
    assert_eq!(flow.phase(), FormPhase::Editing);
}
