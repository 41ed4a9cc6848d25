use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::Method;
use serde_json::{json, Value};
use tempfile::TempDir;

use marquee::api::{ApiBody, ApiClient};
use marquee::commands::auth::{self, AuthOutcome, SIGNUP_SUCCESS};
use marquee::commands::shows::BookOutcome;
use marquee::commands::{bookings, movies, shows};
use marquee::models::user::Credentials;
use marquee::render::{Renderer, BOOKINGS_PLACEHOLDER};
use marquee::session::SessionStore;
use marquee::store::LocalStore;
use marquee::theme::Theme;
use marquee::AppConfig;

/// Counters for requests the stub booking server saw.
#[derive(Clone, Default)]
struct Hits {
    book: Arc<AtomicUsize>,
    booked_seat: Arc<AtomicUsize>,
    cancel: Arc<AtomicUsize>,
}

fn booking_json(seat_number: u64, status: &str) -> Value {
    json!({
        "id": 7,
        "show": {
            "id": 2,
            "movie": { "id": 1, "title": "X", "duration_minutes": 90 },
            "screen_name": "Screen A",
            "date_time": "2026-08-07T18:30:00Z",
            "total_seats": 50,
        },
        "seat_number": seat_number,
        "status": status,
        "created_at": "2026-08-01T09:00:00Z",
    })
}

async fn echo_auth(headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| Value::String(value.to_string()))
        .unwrap_or(Value::Null);
    Json(json!({ "auth": auth }))
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "secret" {
        Json(json!({ "access": "tok-1", "refresh": "tok-2" })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "No active account found with the given credentials" })),
        )
            .into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({ "id": 1, "username": body["username"] })),
    )
}

async fn book(
    State(hits): State<Hits>,
    Path(_show_id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    hits.book.fetch_add(1, Ordering::SeqCst);
    let seat = body["seat_number"].as_u64().unwrap_or_default();
    hits.booked_seat.store(seat as usize, Ordering::SeqCst);
    Json(booking_json(seat, "booked"))
}

async fn my_bookings(State(hits): State<Hits>, headers: HeaderMap) -> impl IntoResponse {
    if !headers.contains_key("authorization") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Authentication credentials were not provided." })),
        )
            .into_response();
    }
    let status = if hits.cancel.load(Ordering::SeqCst) > 0 {
        "cancelled"
    } else {
        "booked"
    };
    Json(json!([booking_json(3, status)])).into_response()
}

async fn cancel(State(hits): State<Hits>, Path(_booking_id): Path<i64>) -> Json<Value> {
    hits.cancel.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "detail": "Booking cancelled." }))
}

fn stub() -> (Router, Hits) {
    let hits = Hits::default();
    let app = Router::new()
        .route("/echo-auth", get(echo_auth))
        .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "out of coffee") }))
        .route("/plain", get(|| async { "just text" }))
        .route(
            "/movies/",
            get(|| async { Json(json!([{ "id": 1, "title": "X", "duration_minutes": 90 }])) }),
        )
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/shows/:id/book/", post(book))
        .route("/my-bookings/", get(my_bookings))
        .route("/bookings/:id/cancel/", post(cancel))
        .with_state(hits.clone());
    (app, hits)
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve stub") });
    addr
}

fn client_for(addr: SocketAddr, dir: &TempDir) -> ApiClient {
    let cfg = AppConfig {
        base_url: format!("http://{}", addr),
        request_timeout: Duration::from_secs(5),
        state_path: None,
    };
    let store = LocalStore::open(dir.path().join("state.json")).unwrap();
    ApiClient::new(&cfg, SessionStore::new(store)).unwrap()
}

fn renderer() -> Renderer {
    Renderer::new(Theme::Light).unwrap()
}

#[tokio::test]
async fn movie_grid_renders_one_book_hint_per_movie() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    let out = movies::grid(&client, &renderer()).await.unwrap();
    assert_eq!(out.matches("marquee shows 1").count(), 1);
}

#[tokio::test]
async fn bearer_header_only_when_token_stored() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let mut client = client_for(addr, &dir);

    let body = client.request(Method::GET, "/echo-auth", None).await.unwrap();
    match body {
        ApiBody::Json(value) => assert_eq!(value["auth"], Value::Null),
        ApiBody::Text(text) => panic!("expected JSON, got {}", text),
    }

    client.session_mut().save("T", "").unwrap();
    let body = client.request(Method::GET, "/echo-auth", None).await.unwrap();
    match body {
        ApiBody::Json(value) => assert_eq!(value["auth"], "Bearer T"),
        ApiBody::Text(text) => panic!("expected JSON, got {}", text),
    }
}

#[tokio::test]
async fn failed_response_surfaces_exact_body_text() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    let err = client
        .request(Method::GET, "/teapot", None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "out of coffee");
    assert_eq!(err.status(), Some(reqwest::StatusCode::IM_A_TEAPOT));

    // JSON error bodies surface verbatim too
    let err = client
        .request(Method::GET, "/my-bookings/", None)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"{"detail":"Authentication credentials were not provided."}"#
    );
}

#[tokio::test]
async fn bodies_decode_by_content_type() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    let body = client.request(Method::GET, "/movies/", None).await.unwrap();
    match body {
        ApiBody::Json(value) => assert_eq!(value[0]["title"], "X"),
        ApiBody::Text(text) => panic!("expected JSON, got {}", text),
    }

    let body = client.request(Method::GET, "/plain", None).await.unwrap();
    match body {
        ApiBody::Text(text) => assert_eq!(text, "just text"),
        ApiBody::Json(value) => panic!("expected text, got {}", value),
    }
}

#[tokio::test]
async fn login_persists_token_and_sends_it_afterwards() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let mut client = client_for(addr, &dir);
    let renderer = renderer();

    let creds = Credentials {
        username: "bob".to_string(),
        password: "secret".to_string(),
    };
    match auth::login(&mut client, &renderer, &creds).await.unwrap() {
        AuthOutcome::Success(status) => assert!(status.contains("Hi, bob")),
        AuthOutcome::Failure(message) => panic!("login failed: {}", message),
    }
    assert_eq!(client.session().token(), "tok-1");
    assert_eq!(client.session().username(), "bob");

    let body = client.request(Method::GET, "/echo-auth", None).await.unwrap();
    match body {
        ApiBody::Json(value) => assert_eq!(value["auth"], "Bearer tok-1"),
        ApiBody::Text(text) => panic!("expected JSON, got {}", text),
    }
}

#[tokio::test]
async fn login_failure_is_rendered_inline_not_propagated() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let mut client = client_for(addr, &dir);
    let renderer = renderer();

    let creds = Credentials {
        username: "bob".to_string(),
        password: "wrong".to_string(),
    };
    match auth::login(&mut client, &renderer, &creds).await.unwrap() {
        AuthOutcome::Failure(message) => {
            assert!(message.contains("No active account"));
        }
        AuthOutcome::Success(status) => panic!("unexpected login success: {}", status),
    }
    assert_eq!(client.session().token(), "");
}

#[tokio::test]
async fn signup_success_does_not_log_in() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);

    let creds = Credentials {
        username: "bob".to_string(),
        password: "secret".to_string(),
    };
    match auth::signup(&client, &creds).await {
        AuthOutcome::Success(message) => assert_eq!(message, SIGNUP_SUCCESS),
        AuthOutcome::Failure(message) => panic!("signup failed: {}", message),
    }
    assert_eq!(client.session().token(), "");
}

#[tokio::test]
async fn book_without_token_sends_nothing() {
    let (app, hits) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);
    let renderer = renderer();

    match shows::book(&client, &renderer, 2, 3).await.unwrap() {
        BookOutcome::LoginRequired(notice) => assert!(notice.contains("marquee login")),
        BookOutcome::Booked(confirmation) => panic!("unexpected booking: {}", confirmation),
    }
    assert_eq!(hits.book.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn book_with_token_sends_chosen_seat() {
    let (app, hits) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let mut client = client_for(addr, &dir);
    let renderer = renderer();

    client.session_mut().save("tok-1", "bob").unwrap();
    match shows::book(&client, &renderer, 2, 3).await.unwrap() {
        BookOutcome::Booked(confirmation) => {
            assert!(confirmation.contains("Booked!"));
            assert!(confirmation.contains("seat 3"));
        }
        BookOutcome::LoginRequired(notice) => panic!("unexpected notice: {}", notice),
    }
    assert_eq!(hits.book.load(Ordering::SeqCst), 1);
    assert_eq!(hits.booked_seat.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn bookings_fetch_failure_renders_single_placeholder_row() {
    let (app, _) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let client = client_for(addr, &dir);
    let renderer = renderer();

    let out = bookings::list(&client, &renderer).await.unwrap();
    assert_eq!(out, BOOKINGS_PLACEHOLDER);
    assert!(!out.contains("cancel"));
}

#[tokio::test]
async fn cancel_reloads_the_bookings_list() {
    let (app, hits) = stub();
    let addr = serve(app).await;
    let dir = TempDir::new().unwrap();
    let mut client = client_for(addr, &dir);
    let renderer = renderer();

    client.session_mut().save("tok-1", "bob").unwrap();
    let out = bookings::list(&client, &renderer).await.unwrap();
    assert!(out.contains("seat 3 — booked"));

    let out = bookings::cancel(&client, &renderer, 7).await.unwrap();
    assert_eq!(hits.cancel.load(Ordering::SeqCst), 1);
    assert!(out.contains("seat 3 — cancelled"));
}
