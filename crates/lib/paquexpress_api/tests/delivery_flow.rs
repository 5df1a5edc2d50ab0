//! Integration tests — build the router against a real PostgreSQL database
//! and drive the full register → login → upload → confirm flow.
//!
//! Requires `TEST_DATABASE_URL` pointing at a PostgreSQL instance the tests
//! may write to; each test skips with a message when it is unset.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use paquexpress_api::{AppState, config::ApiConfig};
use paquexpress_core::media::MediaStore;
use tower::ServiceExt;

const MULTIPART_BOUNDARY: &str = "paquexpress-test-boundary";

struct TestCtx {
    app: Router,
    pool: sqlx::PgPool,
    // Keeps the uploads dir alive for the duration of the test.
    _uploads: tempfile::TempDir,
}

async fn setup() -> Option<TestCtx> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return None;
    };

    let pool = sqlx::PgPool::connect(&url).await.expect("connect to test PG");
    paquexpress_api::migrate(&pool).await.expect("migrations");

    let uploads = tempfile::tempdir().expect("tempdir");
    let media = MediaStore::new(uploads.path().join("uploads")).expect("media store");

    let state = AppState {
        pool: pool.clone(),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            pg_connection_url: url,
            jwt_secret: "test-secret".into(),
            uploads_dir: uploads.path().join("uploads").display().to_string(),
            public_base_url: "http://127.0.0.1:8000".into(),
        },
        media,
    };

    Some(TestCtx {
        app: paquexpress_api::router(state),
        pool,
        _uploads: uploads,
    })
}

/// Unique email per test run so tests can share a database.
fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    format!("{tag}-{nanos}@paquexpress.test")
}

fn form_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

async fn register(app: &Router, nombre: &str, email: &str, password: &str) -> StatusCode {
    let req = form_request(
        "/auth/register",
        format!("nombre={nombre}&email={email}&password={password}"),
    );
    app.clone().oneshot(req).await.expect("request").status()
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Option<String>) {
    let req = form_request("/auth/login", format!("username={email}&password={password}"));
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    if status != StatusCode::OK {
        return (status, None);
    }
    let json = json_body(resp).await;
    assert_eq!(json["token_type"], "bearer");
    let token = json["access_token"].as_str().expect("token").to_string();
    (status, Some(token))
}

async fn upload_photo(app: &Router, filename: &str, bytes: &[u8]) -> serde_json::Value {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let req = Request::builder()
        .method("POST")
        .uri("/fotos/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let resp = app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp).await
}

fn confirm_request(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/entregas/confirmar")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let Some(ctx) = setup().await else { return };
    let email = unique_email("dup");

    assert_eq!(
        register(&ctx.app, "Ana", &email, "secreta123").await,
        StatusCode::OK
    );

    let req = form_request(
        "/auth/register",
        format!("nombre=Ana&email={email}&password=secreta123"),
    );
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(json["error"], "conflict");
}

#[tokio::test]
async fn racing_duplicate_insert_maps_to_conflict() {
    let Some(ctx) = setup().await else { return };
    let email = unique_email("race");

    // A second insert that slipped past the pre-check hits the UNIQUE
    // index directly; it must surface as a conflict, not a server error.
    let hash = paquexpress_core::auth::password::hash_password("secreta123").expect("hash");
    paquexpress_core::auth::queries::create_agent(&ctx.pool, "Ana", &email, &hash)
        .await
        .expect("first insert");
    let err = paquexpress_core::auth::queries::create_agent(&ctx.pool, "Ana", &email, &hash)
        .await
        .expect_err("duplicate insert");
    assert!(matches!(
        paquexpress_api::error::AppError::from(err),
        paquexpress_api::error::AppError::Conflict(_)
    ));
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let Some(ctx) = setup().await else { return };
    let email = unique_email("badpw");

    assert_eq!(
        register(&ctx.app, "Ana", &email, "secreta123").await,
        StatusCode::OK
    );

    let (status, token) = login(&ctx.app, &email, "wrong-password").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(token.is_none());

    // unknown email: same status, no account probing
    let (status, _) = login(&ctx.app, &unique_email("ghost"), "whatever").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_package_is_not_found() {
    let Some(ctx) = setup().await else { return };

    let req = Request::builder()
        .uri("/paquetes/999999999")
        .body(Body::empty())
        .unwrap();
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn confirm_without_token_is_unauthorized() {
    let Some(ctx) = setup().await else { return };

    let req = confirm_request(
        None,
        serde_json::json!({
            "paquete_id": 1, "gps_lat": 0.0, "gps_lon": 0.0, "foto_url": "x"
        }),
    );
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn confirm_with_deleted_agent_is_unauthorized() {
    let Some(ctx) = setup().await else { return };
    let email = unique_email("deleted");

    assert_eq!(
        register(&ctx.app, "Ana", &email, "secreta123").await,
        StatusCode::OK
    );
    let (_, token) = login(&ctx.app, &email, "secreta123").await;
    let token = token.expect("token");

    // The token is still within its expiry window, but its subject is gone.
    let agent = paquexpress_core::auth::queries::get_agent_by_email(&ctx.pool, &email)
        .await
        .expect("query")
        .expect("agent");
    paquexpress_core::auth::queries::delete_agent(&ctx.pool, agent.id)
        .await
        .expect("delete");

    let req = confirm_request(
        Some(&token),
        serde_json::json!({
            "paquete_id": 1, "gps_lat": 0.0, "gps_lon": 0.0, "foto_url": "x"
        }),
    );
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn end_to_end_delivery_flow() {
    let Some(ctx) = setup().await else { return };
    let email = unique_email("e2e");

    // register + login
    assert_eq!(
        register(&ctx.app, "Ana", &email, "secreta123").await,
        StatusCode::OK
    );
    let (status, token) = login(&ctx.app, &email, "secreta123").await;
    assert_eq!(status, StatusCode::OK);
    let token = token.expect("token");

    // package fixture (provisioned out of band in production)
    let uid = unique_email("pkg");
    let paquete_id = paquexpress_core::packages::insert_package(
        &ctx.pool,
        &uid,
        "Av. Siempre Viva 742",
        19.4326,
        -99.1332,
    )
    .await
    .expect("insert package");

    // package lookup
    let req = Request::builder()
        .uri(format!("/paquetes/{paquete_id}"))
        .body(Body::empty())
        .unwrap();
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    let pkg = json_body(resp).await;
    assert_eq!(pkg["paquete_uid"], uid.as_str());
    assert_eq!(pkg["direccion"], "Av. Siempre Viva 742");

    // photo upload
    let photo = upload_photo(&ctx.app, "entrega.jpg", b"fake jpeg bytes").await;
    let ruta = photo["ruta"].as_str().expect("ruta").to_string();
    assert!(ruta.contains("/uploads/foto_"), "unexpected ruta: {ruta}");
    assert!(ruta.ends_with(".jpg"));

    // confirm delivery
    let req = confirm_request(
        Some(&token),
        serde_json::json!({
            "paquete_id": paquete_id,
            "gps_lat": 19.4327,
            "gps_lon": -99.1330,
            "foto_url": ruta,
        }),
    );
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    // the persisted record ties agent, package and photo together
    let agent = paquexpress_core::auth::queries::get_agent_by_email(&ctx.pool, &email)
        .await
        .expect("query")
        .expect("agent");
    let record = paquexpress_core::deliveries::latest_delivery_for_package(&ctx.pool, paquete_id)
        .await
        .expect("query")
        .expect("delivery record");
    assert_eq!(record.agente_id, agent.id);
    assert_eq!(record.paquete_id, paquete_id);
    assert_eq!(record.foto_url, ruta);
    assert_eq!(record.gps_lat, 19.4327);
    assert_eq!(record.gps_lon, -99.1330);
}

#[tokio::test]
async fn confirm_with_unknown_package_is_not_found() {
    let Some(ctx) = setup().await else { return };
    let email = unique_email("nopkg");

    assert_eq!(
        register(&ctx.app, "Ana", &email, "secreta123").await,
        StatusCode::OK
    );
    let (_, token) = login(&ctx.app, &email, "secreta123").await;

    let req = confirm_request(
        token.as_deref(),
        serde_json::json!({
            "paquete_id": 999999999i64, "gps_lat": 0.0, "gps_lon": 0.0, "foto_url": "x"
        }),
    );
    let resp = ctx.app.clone().oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
