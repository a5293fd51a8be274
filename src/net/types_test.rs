use super::*;

#[test]
fn tema_without_id_omits_id_field() {
    let tema = Tema { id: None, descricao: "Rust".to_owned() };
    let json = serde_json::to_value(&tema).unwrap();
    assert_eq!(json, serde_json::json!({ "descricao": "Rust" }));
}

#[test]
fn tema_ignores_embedded_post_list() {
    let tema: Tema = serde_json::from_value(serde_json::json!({
        "id": 4,
        "descricao": "Java",
        "postagem": [{ "id": 1, "titulo": "Hello" }]
    }))
    .unwrap();
    assert_eq!(tema, Tema { id: Some(4), descricao: "Java".to_owned() });
}

#[test]
fn postagem_parses_nested_tema_and_usuario() {
    let post: Postagem = serde_json::from_value(serde_json::json!({
        "id": 9,
        "titulo": "Primeiro post",
        "texto": "Conteudo do post",
        "data": "2024-05-01T12:00:00",
        "tema": { "id": 2, "descricao": "Rust" },
        "usuario": { "id": 1, "nome": "Duda", "usuario": "duda@email.com", "senha": "", "foto": "" }
    }))
    .unwrap();
    assert_eq!(post.id, Some(9));
    assert_eq!(post.tema.as_ref().map(|t| t.descricao.as_str()), Some("Rust"));
    assert_eq!(post.usuario.as_ref().map(|u| u.nome.as_str()), Some("Duda"));
    assert_eq!(post.data.as_deref(), Some("2024-05-01T12:00:00"));
}

#[test]
fn postagem_create_body_has_no_id_or_data() {
    let post = Postagem {
        titulo: "Titulo".to_owned(),
        texto: "Texto longo".to_owned(),
        tema: Some(Tema { id: Some(2), descricao: "Rust".to_owned() }),
        ..Postagem::default()
    };
    let json = serde_json::to_value(&post).unwrap();
    assert!(json.get("id").is_none());
    assert!(json.get("data").is_none());
    assert_eq!(json["tema"]["id"], 2);
}

#[test]
fn usuario_login_defaults_to_empty_token() {
    let user: UsuarioLogin = serde_json::from_value(serde_json::json!({ "nome": "Duda" })).unwrap();
    assert!(user.token.is_empty());
}

#[test]
fn as_usuario_drops_password() {
    let login = UsuarioLogin {
        id: Some(7),
        nome: "Duda".to_owned(),
        usuario: "duda@email.com".to_owned(),
        senha: "segredo".to_owned(),
        foto: "https://example.test/foto.png".to_owned(),
        token: "Bearer abc".to_owned(),
    };
    let usuario = login.as_usuario();
    assert_eq!(usuario.id, Some(7));
    assert!(usuario.senha.is_empty());
    assert_eq!(usuario.foto, "https://example.test/foto.png");
}
