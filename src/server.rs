//! HTTP surface: health check and the PDF endpoint.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{self, InvalidHeaderValue},
        HeaderValue, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::{ApiError, RenderError, Result};
use crate::itinerary::ItineraryData;
use crate::pipeline::{generate_pdf, PipelineConfig};

const CORS_MAX_AGE: Duration = Duration::from_secs(300);

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: PipelineConfig,
    pub allowed_origin: HeaderValue,
}

impl AppState {
    pub fn new(config: &Config) -> std::result::Result<Self, InvalidHeaderValue> {
        Ok(AppState {
            pipeline: config.render.clone(),
            allowed_origin: HeaderValue::from_str(&config.cors.allowed_origin)?,
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Build the application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE);

    let origin = SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.allowed_origin.clone(),
    );

    Router::new()
        .route("/api/health", get(health_check).options(preflight))
        .route("/api/generate-pdf", post(generate).options(preflight))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(origin)
        .with_state(state)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Vigovia PDF API is running",
    })
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Decode, validate and render one itinerary. The body is parsed as JSON
/// whatever its declared content type.
async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let data = ItineraryData::from_json_slice(&body)?;
    data.validate()?;

    let destination = data.trip_details.destination.clone();
    log::info!(
        "Generating PDF for {} ({} day(s))",
        destination,
        data.daily_itinerary.len()
    );

    let pipeline = state.pipeline;
    let (bytes, layout) = tokio::task::spawn_blocking(move || generate_pdf(&data, &pipeline))
        .await
        .map_err(|e| RenderError::Worker(e.to_string()))??;

    log::info!(
        "Rendered {} page(s), {} bytes for {}",
        layout.pages.len(),
        bytes.len(),
        destination
    );

    let content_type = HeaderValue::from_static("application/pdf");
    let disposition = content_disposition(&destination);
    let length = HeaderValue::from(bytes.len());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, length),
        ],
        bytes,
    )
        .into_response())
}

/// `<destination>_Itinerary.pdf` restricted to a header-safe character set.
pub fn download_filename(destination: &str) -> String {
    let cleaned: String = destination
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = cleaned.trim();
    if stem.is_empty() {
        "Itinerary.pdf".to_string()
    } else {
        format!("{stem}_Itinerary.pdf")
    }
}

fn content_disposition(destination: &str) -> HeaderValue {
    let original = format!("{destination}_Itinerary.pdf");
    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        download_filename(destination),
        urlencoding::encode(&original)
    );
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"Itinerary.pdf\""))
}
