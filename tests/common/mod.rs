// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mock portal backend for integration tests.
//!
//! An axum router bound to an ephemeral local port. Every handler records
//! the call it received so tests can assert on headers and call counts.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use portal_client::config::Config;
use portal_client::navigation::Navigator;
use portal_client::session::{MemoryStore, Session};
use portal_client::PortalClient;
use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const USERNAME: &str = "johndoe";
pub const ADMIN_USERNAME: &str = "admin";
pub const PASSWORD: &str = "SecurePass123!";
pub const DOWNLOAD_BYTES: &[u8] = b"date,consumption\n2024-01-01,1.5\n";
pub const EXPORT_BYTES: &[u8] = b"hour,cost\n0,1.25\n";

/// One request as seen by the backend.
#[derive(Debug, Clone)]
pub struct Call {
    pub route: &'static str,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub query: Option<String>,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl Call {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// How `/auth/refresh` answers.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum RefreshMode {
    /// Issue this access token and start accepting it.
    Issue(String),
    /// 401 Invalid refresh token
    Reject,
    /// 200 with a body that is not a token response
    Garbage,
    /// Answer with this status and an error body
    Status(u16),
    /// Hold the request for longer than any test client waits
    Stall,
}

pub struct MockState {
    calls: Mutex<Vec<Call>>,
    valid_tokens: Mutex<HashSet<String>>,
    refresh: Mutex<RefreshMode>,
    refresh_delay_ms: AtomicU64,
    /// Statuses reported by successive `GET /calculations/{id}`; the last repeats.
    calc_statuses: Mutex<VecDeque<&'static str>>,
}

#[allow(dead_code)]
impl MockState {
    fn record(&self, route: &'static str, headers: &HeaderMap, query: Option<String>, body: &[u8]) {
        let header_str = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.calls.lock().unwrap().push(Call {
            route,
            authorization: header_str(header::AUTHORIZATION),
            content_type: header_str(header::CONTENT_TYPE),
            query,
            body: body.to_vec(),
        });
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let Some(token) = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
        else {
            return false;
        };
        self.valid_tokens.lock().unwrap().contains(token)
    }

    pub fn accept_token(&self, token: &str) {
        self.valid_tokens.lock().unwrap().insert(token.to_string());
    }

    pub fn set_refresh(&self, mode: RefreshMode) {
        *self.refresh.lock().unwrap() = mode;
    }

    pub fn set_refresh_delay(&self, delay: Duration) {
        self.refresh_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn set_calculation_statuses(&self, statuses: &[&'static str]) {
        *self.calc_statuses.lock().unwrap() = statuses.iter().copied().collect();
    }

    fn next_calculation_status(&self) -> &'static str {
        let mut statuses = self.calc_statuses.lock().unwrap();
        if statuses.len() > 1 {
            statuses.pop_front().unwrap_or("completed")
        } else {
            statuses.front().copied().unwrap_or("completed")
        }
    }

    /// Record the call; `Err` carries the 401 to return when the bearer
    /// token is not accepted.
    fn guard(
        &self,
        route: &'static str,
        headers: &HeaderMap,
        query: Option<String>,
        body: &[u8],
    ) -> Result<(), Response> {
        self.record(route, headers, query, body);
        if self.authorized(headers) {
            Ok(())
        } else {
            Err(unauthorized())
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, route: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.route == route)
            .collect()
    }
}

pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

/// Start the mock backend on 127.0.0.1 with an ephemeral port.
pub async fn start_backend() -> MockBackend {
    let state = Arc::new(MockState {
        calls: Mutex::new(Vec::new()),
        valid_tokens: Mutex::new(HashSet::new()),
        refresh: Mutex::new(RefreshMode::Reject),
        refresh_delay_ms: AtomicU64::new(0),
        calc_statuses: Mutex::new(VecDeque::from(["completed"])),
    });

    let app = Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/always-401", get(always_unauthorized))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/refresh", post(refresh))
        .route("/api/v1/files/", get(list_files))
        .route("/api/v1/files/upload", post(upload_file))
        .route("/api/v1/files/{id}", get(get_file).delete(delete_file))
        .route("/api/v1/files/{id}/download", get(download_file))
        .route("/api/v1/users/", get(list_users))
        .route("/api/v1/users/me", put(update_me))
        .route("/api/v1/users/{id}", delete(delete_user))
        .route("/api/v1/users/{id}/toggle-active", patch(toggle_active))
        .route(
            "/api/v1/calculations/",
            get(list_calculations).post(create_calculation),
        )
        .route(
            "/api/v1/calculations/{id}",
            get(get_calculation).delete(delete_calculation),
        )
        .route("/api/v1/calculations/{id}/results", get(get_calculation))
        .route("/api/v1/calculations/{id}/logs", get(calculation_logs))
        .route("/api/v1/calculations/{id}/cancel", post(cancel_calculation))
        .route("/api/v1/calculations/{id}/recalculate", post(recalculate))
        .route("/api/v1/calculations/{id}/export", get(export_results))
        .route("/api/v1/calculations/{id}/filter-by-date", post(filter_by_date))
        .route(
            "/api/v1/configurations/",
            get(list_configurations).post(create_configuration),
        )
        .route("/api/v1/configurations/default", get(default_configuration))
        .route(
            "/api/v1/configurations/{id}",
            get(get_configuration)
                .put(update_configuration)
                .delete(delete_configuration),
        )
        .route("/api/v1/configurations/{id}/set-default", post(set_default))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Client over an in-memory store, pointed at the backend.
#[allow(dead_code)]
pub fn test_client(backend: &MockBackend) -> (PortalClient, MemoryStore) {
    let store = MemoryStore::new();
    let session = Session::new(Arc::new(store.clone()));
    let client = PortalClient::new(Config::with_base_url(&backend.base_url), session)
        .expect("Failed to build client");
    (client, store)
}

/// Client whose requests give up after `timeout`.
#[allow(dead_code)]
pub fn test_client_with_timeout(
    backend: &MockBackend,
    timeout: Duration,
) -> (PortalClient, MemoryStore) {
    let store = MemoryStore::new();
    let session = Session::new(Arc::new(store.clone()));
    let config = Config {
        request_timeout: timeout,
        ..Config::with_base_url(&backend.base_url)
    };
    let client = PortalClient::new(config, session).expect("Failed to build client");
    (client, store)
}

/// Navigator that records redirects instead of navigating.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct RecordingNavigator {
    pub location: Arc<Mutex<String>>,
    pub redirects: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let nav = Self::default();
        *nav.location.lock().unwrap() = path.to_string();
        nav
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.location.lock().unwrap().clone()
    }

    fn redirect(&self, path: &str) {
        *self.location.lock().unwrap() = path.to_string();
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

pub fn user_json(username: &str) -> Value {
    let role = if username == ADMIN_USERNAME { "admin" } else { "user" };
    json!({
        "id": format!("user-{}", username),
        "username": username,
        "email": format!("{}@electree.cz", username),
        "full_name": null,
        "role": role,
        "is_active": true,
        "created_at": "2024-01-15T10:30:00"
    })
}

pub fn file_json(id: &str) -> Value {
    json!({
        "id": id,
        "file_type": "csv",
        "original_filename": "spotreba_2024.csv",
        "stored_filename": format!("{}_spotreba_2024.csv", id),
        "file_size": 524288,
        "date_from": "2024-01-01",
        "date_to": "2024-12-31",
        "rows_count": 8760,
        "created_at": "2024-01-15T10:30:00"
    })
}

pub fn calculation_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": "user-johndoe",
        "name": "Optimalizace FVE + Baterie 2024",
        "description": null,
        "status": status,
        "input_params": { "Baterie": { "b_cap": 3000 } },
        "file_ids": ["f-1"],
        "created_at": "2024-01-15T10:30:00",
        "started_at": null,
        "completed_at": null,
        "error_message": null
    })
}

pub fn configuration_json(id: &str, is_default: bool) -> Value {
    json!({
        "id": id,
        "user_id": "user-johndoe",
        "name": "Můj dům - FVE 7kW",
        "description": null,
        "config_data": { "FVE": { "pv_powernom": 7000 } },
        "is_default": is_default,
        "created_at": "2024-01-15T10:30:00",
        "updated_at": null
    })
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": format!("{} not found", what) })),
    )
        .into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Could not validate credentials" })),
    )
        .into_response()
}

// ─── Handlers ────────────────────────────────────────────────────────────────

async fn health(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("health", &headers, None, &[]);
    Json(json!({ "status": "ok" })).into_response()
}

async fn always_unauthorized(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("always-401", &headers, None, &[]);
    unauthorized()
}

async fn login(State(state): State<Arc<MockState>>, headers: HeaderMap, body: Bytes) -> Response {
    state.record("login", &headers, None, &body);

    let form = String::from_utf8_lossy(&body).into_owned();
    let field = |name: &str| {
        form.split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", name)))
            .map(|v| v.replace("%21", "!"))
    };
    let username = field("username").unwrap_or_default();
    let password = field("password").unwrap_or_default();

    if (username != USERNAME && username != ADMIN_USERNAME) || password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
            .into_response();
    }

    state.accept_token("A");
    Json(json!({
        "access_token": "A",
        "refresh_token": "R",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": user_json(&username)
    }))
    .into_response()
}

async fn register(State(state): State<Arc<MockState>>, headers: HeaderMap, body: Bytes) -> Response {
    state.record("register", &headers, None, &body);
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let username = payload["username"].as_str().unwrap_or("unknown");
    (StatusCode::CREATED, Json(user_json(username))).into_response()
}

async fn me(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.record("me", &headers, None, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut user = user_json(USERNAME);
    user["full_name"] = json!("John Doe");
    Json(user).into_response()
}

async fn refresh(State(state): State<Arc<MockState>>, headers: HeaderMap, body: Bytes) -> Response {
    state.record("refresh", &headers, None, &body);

    let delay = state.refresh_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if payload["refresh_token"] != "R" {
        return unauthorized();
    }

    let mode = state.refresh.lock().unwrap().clone();
    match mode {
        RefreshMode::Issue(token) => {
            state.accept_token(&token);
            Json(json!({ "access_token": token, "token_type": "bearer" })).into_response()
        }
        RefreshMode::Reject => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid refresh token" })),
        )
            .into_response(),
        RefreshMode::Garbage => (StatusCode::OK, "<html>gateway timeout</html>").into_response(),
        RefreshMode::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "detail": "Internal server error" }))).into_response()
        }
        RefreshMode::Stall => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            StatusCode::GATEWAY_TIMEOUT.into_response()
        }
    }
}

async fn list_files(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    state.record("files", &headers, query, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "total": 2, "files": [file_json("f-1"), file_json("f-2")] })).into_response()
}

async fn upload_file(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    state.record("upload", &headers, query, &body);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut record = file_json("f-new");
    record["file_size"] = json!(body.len());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn get_file(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.record("get_file", &headers, None, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "File not found" }))).into_response();
    }
    Json(file_json(&id)).into_response()
}

async fn delete_file(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> Response {
    state.record("delete_file", &headers, None, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn download_file(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> Response {
    state.record("download", &headers, None, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        DOWNLOAD_BYTES,
    )
        .into_response()
}

async fn list_users(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    state.record("users", &headers, query, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "total": 2, "users": [user_json(USERNAME), user_json(ADMIN_USERNAME)] }))
        .into_response()
}

async fn update_me(State(state): State<Arc<MockState>>, headers: HeaderMap, body: Bytes) -> Response {
    state.record("update_me", &headers, None, &body);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut user = user_json(USERNAME);
    if let Some(name) = payload.get("full_name") {
        user["full_name"] = name.clone();
    }
    Json(user).into_response()
}

async fn delete_user(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> Response {
    state.record("delete_user", &headers, None, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn toggle_active(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.record("toggle_active", &headers, None, &[]);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut user = user_json(USERNAME);
    user["id"] = json!(id);
    user["is_active"] = json!(false);
    Json(user).into_response()
}

async fn list_calculations(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    if let Err(resp) = state.guard("calculations", &headers, query, &[]) {
        return resp;
    }
    Json(json!({ "total": 1, "calculations": [calculation_json("c-1", "completed")] }))
        .into_response()
}

async fn create_calculation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(resp) = state.guard("create_calculation", &headers, None, &body) {
        return resp;
    }
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut record = calculation_json("c-new", "pending");
    record["name"] = payload["name"].clone();
    record["input_params"] = payload["input_params"].clone();
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn get_calculation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("get_calculation", &headers, None, &[]) {
        return resp;
    }
    if id == "missing" {
        return not_found("Calculation");
    }
    let status = state.next_calculation_status();
    let results = if status == "completed" {
        json!({ "total_cost": 45678.9, "savings": 12345.67 })
    } else {
        Value::Null
    };
    Json(json!({
        "id": id,
        "name": "Optimalizace FVE + Baterie 2024",
        "status": status,
        "results": results,
        "cost_table": [{ "item": "energy", "cost": 1200.0 }],
        "battery_cycles_year": 287.5,
        "execution_time_seconds": 125.5,
        "created_at": "2024-01-15T10:30:00",
        "completed_at": null
    }))
    .into_response()
}

async fn delete_calculation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("delete_calculation", &headers, None, &[]) {
        return resp;
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn calculation_logs(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("calculation_logs", &headers, None, &[]) {
        return resp;
    }
    Json(json!({
        "calculation_id": id,
        "total_logs": 2,
        "logs": [
            { "timestamp": "2024-01-15T10:30:05", "level": "INFO", "message": "Loading input files" },
            { "timestamp": "2024-01-15T10:32:15", "level": "INFO", "message": "Optimization finished" }
        ]
    }))
    .into_response()
}

async fn cancel_calculation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("cancel", &headers, None, &[]) {
        return resp;
    }
    if id == "c-done" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Cannot cancel calculation with status: completed" })),
        )
            .into_response();
    }
    Json(json!({ "message": "Calculation cancelled", "calculation_id": id })).into_response()
}

async fn recalculate(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("recalculate", &headers, None, &[]) {
        return resp;
    }
    Json(json!({ "message": "Calculation restarted", "calculation_id": id, "status": "pending" }))
        .into_response()
}

async fn export_results(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    Path(_id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("export", &headers, query, &[]) {
        return resp;
    }
    ([(header::CONTENT_TYPE, "text/csv")], EXPORT_BYTES).into_response()
}

async fn filter_by_date(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    if let Err(resp) = state.guard("filter_by_date", &headers, None, &body) {
        return resp;
    }
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let date_from = payload["date_from"].clone();
    let date_to = payload["date_to"].clone();
    Json(json!({
        "calculation_id": id,
        "date_from": date_from,
        "date_to": date_to,
        "cost_table": [{ "item": "energy", "cost": 300.0 }],
        "energy_balance": null,
        "financial_balance": null,
        "results": { "total_cost": 300.0 }
    }))
    .into_response()
}

async fn list_configurations(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(resp) = state.guard("configurations", &headers, None, &[]) {
        return resp;
    }
    Json(json!({
        "total": 2,
        "configurations": [configuration_json("cfg-1", true), configuration_json("cfg-2", false)]
    }))
    .into_response()
}

async fn create_configuration(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(resp) = state.guard("create_configuration", &headers, None, &body) {
        return resp;
    }
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut record = configuration_json("cfg-new", payload["is_default"] == true);
    record["name"] = payload["name"].clone();
    record["config_data"] = payload["config_data"].clone();
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn default_configuration(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Err(resp) = state.guard("default_configuration", &headers, None, &[]) {
        return resp;
    }
    Json(configuration_json("cfg-1", true)).into_response()
}

async fn get_configuration(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("get_configuration", &headers, None, &[]) {
        return resp;
    }
    if id == "missing" {
        return not_found("Configuration");
    }
    Json(configuration_json(&id, false)).into_response()
}

async fn update_configuration(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    if let Err(resp) = state.guard("update_configuration", &headers, None, &body) {
        return resp;
    }
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let mut record = configuration_json(&id, false);
    if let Some(name) = payload.get("name") {
        record["name"] = name.clone();
    }
    record["updated_at"] = json!("2024-02-01T08:00:00");
    Json(record).into_response()
}

async fn delete_configuration(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(_id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("delete_configuration", &headers, None, &[]) {
        return resp;
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn set_default(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(resp) = state.guard("set_default", &headers, None, &[]) {
        return resp;
    }
    Json(configuration_json(&id, true)).into_response()
}
