//! Axum JSON API for the AQL builder.
//!
//! Serves the reference catalog and templates, and exposes the validator
//! and clause assembler to browser front-ends.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Settings;
use crate::query::{ClauseError, ClauseSet, SortDir, Table, TimeClause};
use crate::reference::{self, Field, FunctionCategory, OperatorKind, TimeStyle};
use crate::templates;
use crate::validation::{self, ValidationReport};

/// Application state shared across handlers
pub struct AppState {
    pub settings: Settings,
}

/// Build the axum router with all routes
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Reference catalog
        .route("/api/reference/event-fields", get(event_fields))
        .route("/api/reference/flow-fields", get(flow_fields))
        .route("/api/reference/functions", get(list_functions))
        .route("/api/reference/operators", get(list_operators))
        .route("/api/reference/time-clauses", get(list_time_clauses))
        // Templates
        .route("/api/templates", get(list_templates))
        .route("/api/templates/render", post(render_template))
        // Query tools
        .route("/api/validate", post(validate_query))
        .route("/api/build", post(build_query))
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn serve(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = Arc::new(AppState { settings });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "AQL builder API listening");

    println!("AQL Builder API");
    println!("   URL: http://{}", addr);
    println!();
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

#[derive(Serialize)]
struct QueryResponse {
    query: String,
}

// ============================================================================
// Reference API
// ============================================================================

/// GET /api/reference/event-fields
async fn event_fields() -> Json<&'static [Field]> {
    Json(reference::fields(Table::Events))
}

/// GET /api/reference/flow-fields
async fn flow_fields() -> Json<&'static [Field]> {
    Json(reference::fields(Table::Flows))
}

/// GET /api/reference/functions - functions keyed by category title
async fn list_functions() -> Json<Map<String, Value>> {
    let mut result = Map::new();
    for category in FunctionCategory::ALL {
        result.insert(
            category.title().to_string(),
            serde_json::json!(reference::functions(category)),
        );
    }
    Json(result)
}

/// GET /api/reference/operators
async fn list_operators() -> Json<Map<String, Value>> {
    let mut result = Map::new();
    for kind in OperatorKind::ALL {
        result.insert(
            kind.key().to_string(),
            serde_json::json!(reference::operators(kind)),
        );
    }
    Json(result)
}

/// GET /api/reference/time-clauses
async fn list_time_clauses() -> Json<Map<String, Value>> {
    let mut result = Map::new();
    for style in TimeStyle::ALL {
        result.insert(
            style.key().to_string(),
            serde_json::json!(reference::time_examples(style)),
        );
    }
    Json(result)
}

// ============================================================================
// Templates API
// ============================================================================

/// GET /api/templates - templates keyed by category name
async fn list_templates() -> Json<Map<String, Value>> {
    let mut result = Map::new();
    for category in templates::categories() {
        result.insert(
            category.name.to_string(),
            serde_json::json!(category.templates),
        );
    }
    Json(result)
}

#[derive(Deserialize)]
struct RenderRequest {
    name: String,
    #[serde(default)]
    values: HashMap<String, String>,
    #[serde(default)]
    time: Option<String>,
}

/// POST /api/templates/render - fill placeholders and swap the time range
async fn render_template(
    Json(req): Json<RenderRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let template = templates::find_by_name(&req.name).ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            format!("Unknown template '{}'", req.name),
        )
    })?;

    tracing::debug!(template = template.name, "rendering template");
    Ok(Json(QueryResponse {
        query: template.render(&req.values, req.time.as_deref()),
    }))
}

// ============================================================================
// Query API
// ============================================================================

#[derive(Deserialize)]
struct ValidateRequest {
    #[serde(default)]
    query: String,
}

/// POST /api/validate
async fn validate_query(Json(req): Json<ValidateRequest>) -> Json<ValidationReport> {
    let report = validation::report(&req.query);
    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated query"
    );
    Json(report)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct BuildRequest {
    select: Vec<String>,
    from: Option<String>,
    #[serde(rename = "where")]
    where_conditions: Vec<String>,
    group_by: Vec<String>,
    having: Vec<String>,
    order_by: Vec<String>,
    order_dir: Option<String>,
    limit: Option<u64>,
    time: Option<String>,
}

impl BuildRequest {
    fn into_clause_set(self, settings: &Settings) -> Result<ClauseSet, ApiError> {
        let bad_request = |e: ClauseError| api_error(StatusCode::BAD_REQUEST, e.to_string());

        let table = match self.from.as_deref() {
            Some(name) => name.parse::<Table>().map_err(bad_request)?,
            None => settings.builder.default_table,
        };
        let dir = match self.order_dir.as_deref() {
            Some(dir) => dir.parse::<SortDir>().map_err(bad_request)?,
            None => settings.builder.order_dir,
        };

        let mut clauses = ClauseSet::new().from(table);
        clauses.set_select(&self.select);
        for condition in &self.where_conditions {
            clauses.add_where(condition);
        }
        clauses.set_group_by(&self.group_by);
        for condition in &self.having {
            clauses.add_having(condition);
        }
        clauses.set_order_by(&self.order_by, dir);
        if let Some(limit) = self.limit.and_then(NonZeroU64::new) {
            clauses.set_limit(limit);
        }
        if let Some(time) = self.time.as_deref().map(str::trim) {
            if !time.is_empty() {
                clauses.set_time(TimeClause::raw(time));
            }
        }
        Ok(clauses)
    }
}

/// POST /api/build - assemble a query, one clause per line
async fn build_query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BuildRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let clauses = req.into_clause_set(&state.settings).inspect_err(|(status, body)| {
        tracing::debug!(status = %status, error = %body.error, "rejected build request");
    })?;

    Ok(Json(QueryResponse {
        query: clauses.to_aql_multiline(),
    }))
}
