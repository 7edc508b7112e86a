//! HTTP server mode for REST API access to provider operations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::provider::{ConfiguredProvider, Response};
use crate::resource::ResourceState;
use crate::types::JsonObject;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Provider configured once at startup; its client is shared by all requests
    pub provider: ConfiguredProvider,
    /// Schema document served at `/schema`
    pub schema: Value,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState { config };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/schema", get(schema))
        .route("/resources/:resource_type", post(create_resource))
        .route(
            "/resources/:resource_type/:id",
            get(read_resource)
                .put(update_resource)
                .delete(delete_resource),
        )
        .route("/resources/:resource_type/:id/import", post(import_resource))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Provider and resource schemas
async fn schema(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(state.config.schema.clone())),
    )
}

/// Map an operation response onto an HTTP response
fn respond(response: Response, success_status: StatusCode) -> axum::response::Response {
    let status = if response.has_errors() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        success_status
    };
    let body = ApiResponse {
        success: !response.has_errors(),
        error: response
            .has_errors()
            .then(|| response.diagnostics.error_summary()),
        data: Some(response),
    };
    (status, Json(body)).into_response()
}

fn unknown_resource(resource_type: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(format!(
            "Unknown resource type: {resource_type}"
        ))),
    )
        .into_response()
}

fn bare_state(id: String) -> ResourceState {
    ResourceState {
        id,
        attributes: JsonObject::new(),
    }
}

/// Create a resource from the request body config
async fn create_resource(
    State(state): State<Arc<AppState>>,
    Path(resource_type): Path<String>,
    Json(config): Json<Value>,
) -> impl IntoResponse {
    let provider = &state.config.provider;
    if !provider.has_resource(&resource_type) {
        return unknown_resource(&resource_type);
    }
    let response = provider.create(&resource_type, &config).await;
    respond(response, StatusCode::CREATED)
}

/// Read a resource by ID
async fn read_resource(
    State(state): State<Arc<AppState>>,
    Path((resource_type, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let provider = &state.config.provider;
    if !provider.has_resource(&resource_type) {
        return unknown_resource(&resource_type);
    }
    let response = provider.read(&resource_type, bare_state(id)).await;
    respond(response, StatusCode::OK)
}

/// Update a resource by ID; the prior state is read from Mailjet first
async fn update_resource(
    State(state): State<Arc<AppState>>,
    Path((resource_type, id)): Path<(String, String)>,
    Json(config): Json<Value>,
) -> impl IntoResponse {
    let provider = &state.config.provider;
    if !provider.has_resource(&resource_type) {
        return unknown_resource(&resource_type);
    }

    let current = provider.read(&resource_type, bare_state(id.clone())).await;
    if current.has_errors() {
        return respond(current, StatusCode::OK);
    }
    let prior = current.state.unwrap_or_else(|| bare_state(id));

    let response = provider.update(&resource_type, prior, &config).await;
    respond(response, StatusCode::OK)
}

/// Delete a resource by ID
async fn delete_resource(
    State(state): State<Arc<AppState>>,
    Path((resource_type, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let provider = &state.config.provider;
    if !provider.has_resource(&resource_type) {
        return unknown_resource(&resource_type);
    }
    let response = provider.delete(&resource_type, bare_state(id)).await;
    respond(response, StatusCode::OK)
}

/// Import an existing resource by ID
async fn import_resource(
    State(state): State<Arc<AppState>>,
    Path((resource_type, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let provider = &state.config.provider;
    if !provider.has_resource(&resource_type) {
        return unknown_resource(&resource_type);
    }
    let response = provider.import(&resource_type, &id).await;
    respond(response, StatusCode::OK)
}
