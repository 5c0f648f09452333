//! `donate api` — HTTP server (Axum).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Static greeting |
//! | `GET`  | `/all` | All charity records as a JSON array |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! An empty store is not an error: `GET /all` answers 200 with
//! `{"message": "no charities registered"}` instead of an array.
//!
//! # Error contract
//!
//! Store failures produce
//! `{"error": {"code": "internal", "message": "..."}}` with status 500.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use donate_helper_core::list;
use donate_helper_core::store::Listing;

use crate::config::Config;
use crate::sqlite_store::SqliteStore;

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and runs until the
/// process is terminated. The store is opened once and shared across
/// handlers; the workflows hold no mutable state of their own.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    // try_init: the subscriber may already be set when the server is
    // embedded (e.g. spawned from a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let store = Arc::new(SqliteStore::open(config).await?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handle_root))
        .route("/all", get(handle_all))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(store);

    info!("listening on http://{}", config.server.bind);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

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

fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: message.into(),
    }
}

// ============ GET / ============

async fn handle_root() -> &'static str {
    "Hello, World!"
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /all ============

/// Handler for `GET /all`.
///
/// Returns every charity record as a JSON array, in store-defined order.
async fn handle_all(State(store): State<Arc<SqliteStore>>) -> Result<Response, AppError> {
    let listing = list::list_charities(store.as_ref()).await.map_err(|e| {
        error!("listing charities failed: {}", e);
        internal(e.to_string())
    })?;

    match listing {
        Listing::Empty => Ok(Json(serde_json::json!({ "message": list::NO_CHARITIES_API }))
            .into_response()),
        Listing::Records(records) => Ok(Json(records).into_response()),
    }
}
