use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::core::error::AppError;
use crate::core::models::{EncodeRequest, ServerInfo};
use crate::render::{generate_composite, OUTPUT_FILENAME};

type ApiError = (StatusCode, Json<serde_json::Value>);

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "qrlogo"
    }))
}

pub async fn get_server_info(State(server_info): State<ServerInfo>) -> Json<ServerInfo> {
    Json(server_info)
}

/// Generate a composite QR code from a multipart form with a `url` text
/// field and a `logo` file field. Responds with the finished PNG.
pub async fn generate(mut multipart: Multipart) -> Result<impl IntoResponse, ApiError> {
    info!("Generate request received");

    let mut url: Option<String> = None;
    let mut logo: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        error_body(StatusCode::BAD_REQUEST, "Malformed form data")
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "url" => {
                let text = field.text().await.map_err(|e| {
                    error!("Failed to read url field: {}", e);
                    error_body(StatusCode::BAD_REQUEST, "Malformed url field")
                })?;
                url = Some(text);
            }
            "logo" => {
                let bytes = field.bytes().await.map_err(|e| {
                    error!("Failed to read logo field: {}", e);
                    error_body(StatusCode::BAD_REQUEST, "Malformed logo upload")
                })?;
                logo = Some(bytes.to_vec());
            }
            other => {
                info!("Ignoring unexpected form field: {}", other);
            }
        }
    }

    // Validation happens before any encoding work starts.
    let url = url.filter(|u| !u.is_empty()).ok_or_else(|| {
        error_body(StatusCode::BAD_REQUEST, "Please enter a URL and upload a logo")
    })?;
    let logo = logo.filter(|b| !b.is_empty()).ok_or_else(|| {
        error_body(StatusCode::BAD_REQUEST, "Please enter a URL and upload a logo")
    })?;

    let request = EncodeRequest::new(url);
    let png = generate_composite(&request, &logo).map_err(|e| {
        error!("Generation failed: {}", e);
        let status = match e {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Encoding(_) | AppError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_body(status, &e.to_string())
    })?;

    info!("Generated composite QR code ({} bytes)", png.len());

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "image/png".parse().unwrap());
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", OUTPUT_FILENAME)
            .parse()
            .unwrap(),
    );

    Ok((headers, png))
}

/// Handle 404 errors for API routes
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "API endpoint not found"
        })),
    )
}

fn error_body(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}
