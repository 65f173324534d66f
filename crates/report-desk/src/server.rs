//! JSON HTTP server for the projects and reports API.
//!
//! Nearly every handler is a direct parameter-to-store mapping with no
//! business logic. The one exception is the repeated-word endpoint,
//! which reads the full report corpus and runs the pure
//! [`filter_repeated`] pass over it.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`    | `/health` | Health check (returns version) |
//! | `GET`    | `/api/v1/projects` | List all projects |
//! | `GET`    | `/api/v1/projects/{id}` | Get a project by ID |
//! | `POST`   | `/api/v1/projects` | Create a project |
//! | `PUT`    | `/api/v1/projects/{id}` | Update a project |
//! | `DELETE` | `/api/v1/projects/{id}` | Delete a project |
//! | `GET`    | `/api/v1/reports/repeating-words` | Reports with a word repeated ≥ 3 times |
//! | `GET`    | `/api/v1/projects/{project_id}/reports` | List reports for a project |
//! | `GET`    | `/api/v1/reports/{report_id}` | Get a report by ID |
//! | `POST`   | `/api/v1/projects/{project_id}/reports` | Create a report under a project |
//! | `PUT`    | `/api/v1/reports/{report_id}` | Update a report's text |
//! | `DELETE` | `/api/v1/reports/{report_id}` | Delete a report |
//!
//! # Error Contract
//!
//! All error responses share one schema:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "report not found: r9" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support
//! browser-based clients.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use report_desk_core::analysis::filter_repeated;
use report_desk_core::models::{Project, Report};
use report_desk_core::store::Store;

use crate::config::Config;
use crate::db;
use crate::sqlite_store::SqliteStore;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    store: Arc<dyn Store>,
}

/// Starts the HTTP server against the configured SQLite database.
///
/// Binds to the address configured in `[server].bind` and registers all
/// route handlers. The server runs indefinitely until the process is
/// terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(config).await?;
    let store: Arc<dyn Store> = Arc::new(SqliteStore::new(pool));
    run_server_with_store(config, store).await
}

/// Starts the HTTP server with a caller-supplied [`Store`] backend.
///
/// Like [`run_server`], but the storage backend is injected, so an
/// in-memory store can stand in for SQLite.
pub async fn run_server_with_store(config: &Config, store: Arc<dyn Store>) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();

    let app = router(store);

    println!("Report Desk listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router over a [`Store`] backend.
fn router(store: Arc<dyn Store>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState { store };

    // The literal repeating-words segment is registered alongside the
    // {report_id} capture; Axum prefers the literal match.
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/v1/projects", get(handle_list_projects))
        .route("/api/v1/projects", post(handle_create_project))
        .route("/api/v1/projects/{id}", get(handle_get_project))
        .route("/api/v1/projects/{id}", put(handle_update_project))
        .route("/api/v1/projects/{id}", delete(handle_delete_project))
        .route(
            "/api/v1/reports/repeating-words",
            get(handle_repeating_words),
        )
        .route(
            "/api/v1/projects/{project_id}/reports",
            get(handle_reports_for_project),
        )
        .route(
            "/api/v1/projects/{project_id}/reports",
            post(handle_create_report),
        )
        .route("/api/v1/reports/{report_id}", get(handle_get_report))
        .route("/api/v1/reports/{report_id}", put(handle_update_report))
        .route("/api/v1/reports/{report_id}", delete(handle_delete_report))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

/// Constructs a 404 Not Found error.
fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

/// Maps a store failure to a 500 Internal Server Error.
fn internal(err: anyhow::Error) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: err.to_string(),
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ Project routes ============

/// Request body for `POST /api/v1/projects`.
#[derive(Deserialize)]
struct CreateProjectRequest {
    /// Caller-supplied ID; a UUID is generated when absent.
    id: Option<String>,
    name: String,
    description: Option<String>,
}

/// Request body for `PUT /api/v1/projects/{id}`.
#[derive(Deserialize)]
struct UpdateProjectRequest {
    name: String,
    description: Option<String>,
}

/// Handler for `GET /api/v1/projects`.
async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.store.list_projects().await.map_err(internal)?;
    Ok(Json(projects))
}

/// Handler for `GET /api/v1/projects/{id}`.
async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let project = state.store.get_project(&id).await.map_err(internal)?;
    match project {
        Some(p) => Ok(Json(p)),
        None => Err(not_found(format!("project not found: {}", id))),
    }
}

/// Handler for `POST /api/v1/projects`.
async fn handle_create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    if req.name.trim().is_empty() {
        return Err(bad_request("name must not be empty"));
    }

    let project = Project {
        id: non_blank_or_uuid(req.id),
        name: req.name,
        description: req.description,
    };

    state
        .store
        .create_project(&project)
        .await
        .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Handler for `PUT /api/v1/projects/{id}`.
async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    if req.name.trim().is_empty() {
        return Err(bad_request("name must not be empty"));
    }

    let changed = state
        .store
        .update_project(&id, &req.name, req.description.as_deref())
        .await
        .map_err(internal)?;

    if !changed {
        return Err(not_found(format!("project not found: {}", id)));
    }

    Ok(Json(Project {
        id,
        name: req.name,
        description: req.description,
    }))
}

/// Handler for `DELETE /api/v1/projects/{id}`.
async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state.store.delete_project(&id).await.map_err(internal)?;
    if !deleted {
        return Err(not_found(format!("project not found: {}", id)));
    }
    Ok(Json(
        serde_json::json!({ "message": "Project deleted successfully" }),
    ))
}

// ============ Report routes ============

/// Request body for `POST /api/v1/projects/{project_id}/reports`.
#[derive(Deserialize)]
struct CreateReportRequest {
    /// Caller-supplied ID; a UUID is generated when absent.
    id: Option<String>,
    /// Report text; absent or null is treated as the empty string.
    text: Option<String>,
}

/// Request body for `PUT /api/v1/reports/{report_id}`.
#[derive(Deserialize)]
struct UpdateReportRequest {
    text: String,
}

/// Handler for `GET /api/v1/reports/repeating-words`.
///
/// Fetches the full report corpus, runs the pure repeated-word filter
/// over it, and serializes the qualifying subset unchanged — same
/// fields, same relative order.
async fn handle_repeating_words(
    State(state): State<AppState>,
) -> Result<Json<Vec<Report>>, AppError> {
    let corpus = state.store.all_reports().await.map_err(internal)?;
    Ok(Json(filter_repeated(&corpus)))
}

/// Handler for `GET /api/v1/projects/{project_id}/reports`.
async fn handle_reports_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Report>>, AppError> {
    let reports = state
        .store
        .reports_for_project(&project_id)
        .await
        .map_err(internal)?;
    Ok(Json(reports))
}

/// Handler for `GET /api/v1/reports/{report_id}`.
async fn handle_get_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<Report>, AppError> {
    let report = state.store.get_report(&report_id).await.map_err(internal)?;
    match report {
        Some(r) => Ok(Json(r)),
        None => Err(not_found(format!("report not found: {}", report_id))),
    }
}

/// Handler for `POST /api/v1/projects/{project_id}/reports`.
async fn handle_create_report(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(req): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<Report>), AppError> {
    // Reports must hang off an existing project.
    let project = state
        .store
        .get_project(&project_id)
        .await
        .map_err(internal)?;
    if project.is_none() {
        return Err(not_found(format!("project not found: {}", project_id)));
    }

    let report = Report {
        id: non_blank_or_uuid(req.id),
        text: req.text.unwrap_or_default(),
        project_id,
    };

    state
        .store
        .create_report(&report)
        .await
        .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Handler for `PUT /api/v1/reports/{report_id}`.
async fn handle_update_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
    Json(req): Json<UpdateReportRequest>,
) -> Result<Json<Report>, AppError> {
    let changed = state
        .store
        .update_report(&report_id, &req.text)
        .await
        .map_err(internal)?;

    if !changed {
        return Err(not_found(format!("report not found: {}", report_id)));
    }

    // Re-read to return the stored row, project_id included.
    let report = state.store.get_report(&report_id).await.map_err(internal)?;
    match report {
        Some(r) => Ok(Json(r)),
        None => Err(not_found(format!("report not found: {}", report_id))),
    }
}

/// Handler for `DELETE /api/v1/reports/{report_id}`.
async fn handle_delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state
        .store
        .delete_report(&report_id)
        .await
        .map_err(internal)?;
    if !deleted {
        return Err(not_found(format!("report not found: {}", report_id)));
    }
    Ok(Json(
        serde_json::json!({ "message": "Report deleted successfully" }),
    ))
}

/// Use the caller-supplied ID when present and non-blank, otherwise
/// generate a fresh UUID.
fn non_blank_or_uuid(id: Option<String>) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    }
}
