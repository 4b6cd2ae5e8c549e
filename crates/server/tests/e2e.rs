use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, AppState};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

/// Spin up the real router over a fresh in-memory SQLite database on an
/// ephemeral port. One connection in the pool so every handler sees the
/// same in-memory database.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout: Duration::from_secs(5),
        idle_timeout: Duration::from_secs(60),
        acquire_timeout: Duration::from_secs(10),
        sqlx_logging: false,
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let state = AppState::new(db);
    let app: Router = routes::build_router(cors(), state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn create_client(app: &TestApp, name: &str) -> anyhow::Result<Uuid> {
    let res = client()
        .post(format!("{}/users", app.base_url))
        .json(&json!({ "name": name }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    Ok(body["id"].as_str().unwrap().parse()?)
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_and_list_clients() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 1").await?;

    let res = client().get(format!("{}/users", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id.to_string());
    assert_eq!(listed[0]["name"], "Client teste 1");
    assert!(listed[0]["date"].is_string());
    assert!(listed[0]["contacts"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_clients_listed_in_creation_order() -> anyhow::Result<()> {
    let app = start_server().await?;

    let mut created_ids = Vec::new();
    for i in 0..6 {
        created_ids.push(create_client(&app, &format!("Client ordem {}", i)).await?.to_string());
    }

    let res = client().get(format!("{}/users", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let listed: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, created_ids, "clients not in creation order");
    Ok(())
}

#[tokio::test]
async fn e2e_create_contact_payload_shape() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 1").await?;

    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&json!({"type": "Pessoal", "email": "pessoal@mail.com", "phone": "21999908501"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["client"]["id"], id.to_string());
    assert_eq!(body["client"]["name"], "Client teste 1");
    assert!(body["client"]["date"].is_string());
    assert_eq!(body["type"], "Pessoal");
    assert_eq!(body["email"], "pessoal@mail.com");
    assert_eq!(body["phone"], "21999908501");
    Ok(())
}

#[tokio::test]
async fn e2e_contact_without_channels_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 2").await?;

    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&json!({"type": "Inválido", "email": "", "phone": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Insira pelo menos um telefone ou email");
    Ok(())
}

#[tokio::test]
async fn e2e_duplicate_email_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 3").await?;

    let contact = json!({"type": "Pessoal", "email": "pessoal@mail.com", "phone": "21999908501"});
    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&contact)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    // Same email, different phone
    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&json!({"type": "Trabalho", "email": "pessoal@mail.com", "phone": "21999908551"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "O email do usuário já foi cadastrado");
    Ok(())
}

#[tokio::test]
async fn e2e_duplicate_phone_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 4").await?;

    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&json!({"type": "Pessoal", "email": "pessoal@mail.com", "phone": "21999908501"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    // Same phone, different email
    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&json!({"type": "Trabalho", "email": "trabalho@mail.com", "phone": "21999908501"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "O email do usuário já foi cadastrado");
    Ok(())
}

#[tokio::test]
async fn e2e_contact_for_unknown_client_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let invalid_id = "a9aa99a9-999a-99a9-999a-9aa999aaaaaa";

    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, invalid_id))
        .json(&json!({"type": "Pessoal", "email": "pessoal@mail.com", "phone": "21999908501"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Usuário não encontrado");
    Ok(())
}

#[tokio::test]
async fn e2e_list_contacts_in_creation_order() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 5").await?;

    for (kind, email, phone) in [
        ("Pessoal", "pessoal@mail.com", "21999908501"),
        ("Trabalho", "trabalho@mail.com", "21999908551"),
        ("Recados", "recados@mail.com", "21999999999"),
    ] {
        let res = client()
            .post(format!("{}/user/{}/contact", app.base_url, id))
            .json(&json!({"type": kind, "email": email, "phone": phone}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = client().get(format!("{}/users", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    let contacts = body[0]["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0]["phone"], "21999908501");
    assert_eq!(contacts[0]["email"], "pessoal@mail.com");
    assert_eq!(contacts[1]["phone"], "21999908551");
    assert_eq!(contacts[1]["email"], "trabalho@mail.com");
    assert_eq!(contacts[2]["phone"], "21999999999");
    assert_eq!(contacts[2]["email"], "recados@mail.com");
    Ok(())
}

#[tokio::test]
async fn e2e_delete_contact() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 7").await?;

    let res = client()
        .post(format!("{}/user/{}/contact", app.base_url, id))
        .json(&json!({"type": "Pessoal", "email": "pessoal@mail.com", "phone": "21999908501"}))
        .send()
        .await?;
    let contact_id = res.json::<serde_json::Value>().await?["id"].as_str().unwrap().to_string();

    let res = client()
        .delete(format!("{}/user/{}/contact/{}", app.base_url, id, contact_id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    // Gone from subsequent listings
    let res = client().get(format!("{}/users", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert!(body[0]["contacts"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_delete_for_unknown_client_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let invalid_id = "a9aa99a9-999a-99a9-999a-9aa999aaaaaa";

    let res = client()
        .delete(format!("{}/user/{}/contact/{}", app.base_url, invalid_id, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Usuário não encontrado");
    Ok(())
}

#[tokio::test]
async fn e2e_delete_unknown_contact_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let id = create_client(&app, "Client teste 8").await?;

    let res = client()
        .delete(format!("{}/user/{}/contact/{}", app.base_url, id, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Contato não encontrado");
    Ok(())
}
