//! In-process fake of the notes API, served by axum on an ephemeral port.
//!
//! It implements the same envelope contract as the real server and records
//! every request so tests can assert on headers, bodies, and on requests that
//! must never have been sent.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use api::{ApiClient, ApiConfig, Note, NoteId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "correct horse";
pub const TOKEN: &str = "tok_3f9a1c";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub notes: Vec<Value>,
    pub emails: Vec<String>,
    pub requests: Vec<Recorded>,
    pub next_id: u32,
    /// Next `POST /v1/notes` fails with this message.
    pub reject_next_create: Option<String>,
    /// Login answers `ok: true` without a token.
    pub omit_token: bool,
}

type Shared = Arc<Mutex<FakeState>>;
type Reply = (StatusCode, Json<Value>);

pub struct FakeApi {
    pub state: Shared,
    pub base_url: String,
}

impl FakeApi {
    pub async fn start() -> Self {
        let state: Shared = Arc::default();
        let app = Router::new()
            .route("/v1/auth/login", post(login))
            .route("/users", post(create_user))
            .route("/v1/notes", get(list_notes).post(create_note))
            .route(
                "/v1/notes/{id}",
                get(get_note).put(update_note).delete(delete_note),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig::new(&self.base_url).unwrap())
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.with_state(|s| {
            s.requests
                .iter()
                .filter(|r| r.method == method && r.path == path)
                .cloned()
                .collect()
        })
    }

    /// Insert a note directly on the server, bypassing the client.
    pub fn seed_note(&self, title: &str, content: &str) -> NoteId {
        self.with_state(|s| insert_note(s, title, content, "2025-01-01T09:00:00Z"))
    }

    pub fn server_notes(&self) -> Vec<Note> {
        self.with_state(|s| {
            s.notes
                .iter()
                .map(|n| serde_json::from_value(n.clone()).unwrap())
                .collect()
        })
    }
}

fn insert_note(s: &mut FakeState, title: &str, content: &str, created_at: &str) -> NoteId {
    s.next_id += 1;
    let id = format!("n{}", s.next_id);
    s.notes.push(json!({
        "_id": id,
        "title": title,
        "content": content,
        "createdAt": created_at,
        "__v": 0,
    }));
    NoteId::new(id)
}

fn record(state: &Shared, method: &'static str, path: String, headers: &HeaderMap, body: &[u8]) {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = Recorded {
        method,
        path,
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: serde_json::from_slice(body).unwrap_or(Value::Null),
    };
    state.lock().unwrap().requests.push(recorded);
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some(TOKEN)
}

fn fail(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "ok": false, "message": message })))
}

fn unauthorized() -> Reply {
    fail(StatusCode::UNAUTHORIZED, "Unauthorized")
}

async fn login(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Reply {
    record(&state, "POST", "/v1/auth/login".into(), &headers, &body);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if body["email"] != EMAIL || body["password"] != PASSWORD {
        return fail(StatusCode::UNAUTHORIZED, "Invalid email or password");
    }
    if state.lock().unwrap().omit_token {
        return (StatusCode::OK, Json(json!({ "ok": true })));
    }
    (StatusCode::OK, Json(json!({ "ok": true, "token": TOKEN })))
}

async fn create_user(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Reply {
    record(&state, "POST", "/users".into(), &headers, &body);
    if headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) != Some("application/json") {
        return fail(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected JSON");
    }
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let Some(email) = body["email"].as_str() else {
        return fail(StatusCode::BAD_REQUEST, "Email is required");
    };
    let mut s = state.lock().unwrap();
    if s.emails.iter().any(|e| e == email) {
        return fail(StatusCode::CONFLICT, "Email already registered");
    }
    s.emails.push(email.to_string());
    (
        StatusCode::CREATED,
        Json(json!({ "ok": true, "message": "User created successfully" })),
    )
}

async fn list_notes(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    record(&state, "GET", "/v1/notes".into(), &headers, &[]);
    if !authorized(&headers) {
        return unauthorized();
    }
    let notes = state.lock().unwrap().notes.clone();
    (StatusCode::OK, Json(json!({ "ok": true, "data": notes })))
}

async fn create_note(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Reply {
    record(&state, "POST", "/v1/notes".into(), &headers, &body);
    if !authorized(&headers) {
        return unauthorized();
    }
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut s = state.lock().unwrap();
    if let Some(message) = s.reject_next_create.take() {
        return fail(StatusCode::BAD_REQUEST, &message);
    }
    let id = insert_note(
        &mut s,
        body["title"].as_str().unwrap_or_default(),
        body["content"].as_str().unwrap_or_default(),
        body["createdAt"].as_str().unwrap_or_default(),
    );
    let note = s.notes.iter().find(|n| n["_id"] == id.as_str()).cloned();
    (StatusCode::CREATED, Json(json!({ "ok": true, "data": note })))
}

async fn get_note(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Reply {
    record(&state, "GET", format!("/v1/notes/{id}"), &headers, &[]);
    if !authorized(&headers) {
        return unauthorized();
    }
    let s = state.lock().unwrap();
    match s.notes.iter().find(|n| n["_id"] == id.as_str()) {
        Some(note) => (StatusCode::OK, Json(json!({ "ok": true, "data": note }))),
        None => fail(StatusCode::NOT_FOUND, "Note not found"),
    }
}

async fn update_note(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    record(&state, "PUT", format!("/v1/notes/{id}"), &headers, &body);
    if !authorized(&headers) {
        return unauthorized();
    }
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut s = state.lock().unwrap();
    let Some(note) = s.notes.iter_mut().find(|n| n["_id"] == id.as_str()) else {
        return fail(StatusCode::NOT_FOUND, "Note not found");
    };
    note["title"] = body["title"].clone();
    note["content"] = body["content"].clone();
    (StatusCode::OK, Json(json!({ "ok": true })))
}

async fn delete_note(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Reply {
    record(&state, "DELETE", format!("/v1/notes/{id}"), &headers, &[]);
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut s = state.lock().unwrap();
    let before = s.notes.len();
    s.notes.retain(|n| n["_id"] != id.as_str());
    if s.notes.len() == before {
        return fail(StatusCode::NOT_FOUND, "Note not found");
    }
    (StatusCode::OK, Json(json!({ "ok": true })))
}
