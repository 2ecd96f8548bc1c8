//! In-process mock backend for the session-level tests.
//!
//! A trimmed-down counterpart of the client crate's mock: section upserts
//! are stored per temp payroll id, and the workflow endpoints capture the
//! bodies the sessions send so the tests can assert on them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// The temp payroll id the mock mints for every new application.
pub const MINTED_TEMP_ID: &str = "TEMP9001";

#[derive(Default)]
pub struct MockState {
    /// Section payloads keyed by `(temp_id, tab_slug)`.
    pub sections: Mutex<HashMap<(String, String), Value>>,
    /// Raw `METHOD path?query` of every request, in arrival order.
    pub requests: Mutex<Vec<String>>,
    /// Body of the campus submit call.
    pub submit_body: Mutex<Option<Value>>,
    /// Body of the DO forward-to-CO call.
    pub forward_body: Mutex<Option<Value>>,
    /// Body of the CO update-checklist call.
    pub checklist_body: Mutex<Option<Value>>,
    /// Bodies of the reject calls (back-to-campus and reject-back-to-do).
    pub reject_bodies: Mutex<Vec<Value>>,
}

impl MockState {
    pub fn recorded_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn section(&self, temp_id: &str, slug: &str) -> Option<Value> {
        self.sections
            .lock()
            .unwrap()
            .get(&(temp_id.to_string(), slug.to_string()))
            .cloned()
    }

    fn record(&self, method: &Method, uri: &Uri) {
        self.requests.lock().unwrap().push(format!("{method} {uri}"));
    }
}

/// Start the mock backend on an ephemeral port. Returns its base URL and
/// the shared state for assertions.
pub async fn spawn_backend() -> (String, Arc<MockState>) {
    let state = Arc::new(MockState::default());

    let app = Router::new()
        .route(
            "/api/employee/generate-temp-payroll-id/{hr_id}",
            post(generate_temp_id),
        )
        .route("/api/employee/tab/{slug}", post(save_section))
        .route(
            "/api/employee/tab/forward-to-divisional-office/{temp_id}",
            post(submit),
        )
        .route(
            "/api/EmpDetailsFORCODO/employee/basic-info/{temp_id}",
            get(read_basic_info),
        )
        .route("/api/EmpDetailsFORCODO/address/{temp_id}", get(read_address))
        .route(
            "/api/employee/central-office/update-checklist",
            post(update_checklist),
        )
        .route(
            "/api/employee/central-office/reject-back-to-do",
            post(reject),
        )
        .fallback(fallback)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });

    (format!("http://{addr}"), state)
}

async fn generate_temp_id(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.record(&method, &uri);
    state.sections.lock().unwrap().insert(
        (MINTED_TEMP_ID.to_string(), "basic-info".to_string()),
        body,
    );
    Json(json!({ "tempPayrollId": MINTED_TEMP_ID }))
}

#[derive(serde::Deserialize)]
struct TempIdQuery {
    #[serde(rename = "tempPayrollId")]
    temp_payroll_id: Option<String>,
}

async fn save_section(
    State(state): State<Arc<MockState>>,
    Path(slug): Path<String>,
    Query(query): Query<TempIdQuery>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.record(&method, &uri);
    let Some(temp_id) = query.temp_payroll_id else {
        return (StatusCode::BAD_REQUEST, "tempPayrollId is required").into_response();
    };
    state
        .sections
        .lock()
        .unwrap()
        .insert((temp_id, slug), body);
    StatusCode::OK.into_response()
}

async fn submit(
    State(state): State<Arc<MockState>>,
    Path(_temp_id): Path<String>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record(&method, &uri);
    *state.submit_body.lock().unwrap() = Some(body);
    StatusCode::OK
}

async fn read_section(
    state: &MockState,
    method: Method,
    uri: Uri,
    temp_id: &str,
    slug: &str,
) -> impl IntoResponse {
    state.record(&method, &uri);
    match state.section(temp_id, slug) {
        Some(value) => Json(value).into_response(),
        None => (StatusCode::NOT_FOUND, "no such application").into_response(),
    }
}

async fn read_basic_info(
    State(state): State<Arc<MockState>>,
    Path(temp_id): Path<String>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    read_section(&state, method, uri, &temp_id, "basic-info").await
}

async fn read_address(
    State(state): State<Arc<MockState>>,
    Path(temp_id): Path<String>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    read_section(&state, method, uri, &temp_id, "address-info").await
}

async fn update_checklist(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record(&method, &uri);
    *state.checklist_body.lock().unwrap() = Some(body);
    StatusCode::OK
}

async fn reject(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record(&method, &uri);
    state.reject_bodies.lock().unwrap().push(body);
    StatusCode::OK
}

/// The `Do Controller` endpoints carry a literal space, which arrives
/// percent-encoded; they are matched here on the raw path instead of a
/// route template.
async fn fallback(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    state.record(&method, &uri);
    let path = uri.path();
    if method == Method::POST
        && path.starts_with("/api/employee/Do%20Controller/forward-to-central-office/")
    {
        if let Ok(parsed) = serde_json::from_slice::<Value>(&body) {
            *state.forward_body.lock().unwrap() = Some(parsed);
        }
        return StatusCode::OK.into_response();
    }
    if method == Method::POST && path == "/api/employee/Do%20Controller/back-to-campus" {
        if let Ok(parsed) = serde_json::from_slice::<Value>(&body) {
            state.reject_bodies.lock().unwrap().push(parsed);
        }
        return StatusCode::OK.into_response();
    }
    (StatusCode::NOT_FOUND, "unknown route").into_response()
}
