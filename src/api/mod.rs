use crate::core::cpf;
use crate::domain::model::{CpfQuery, CpfResponse, QueryFailure, RegistryStatus};
use crate::domain::ports::RegistryLookup;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use std::sync::Arc;

const USAGE_MESSAGE: &str =
    "Passe um CPF na query string (?cpf=123456789) ou no corpo da requisição.";

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn RegistryLookup>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/validarcpf", any(validar_cpf))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Validates a CPF locally and, when the checksum holds, against the
/// Receita Federal registry. Accepts the CPF from the query string or from a
/// JSON body, on any method.
async fn validar_cpf(
    State(state): State<AppState>,
    Query(query): Query<CpfQuery>,
    body: Bytes,
) -> Response {
    tracing::info!("Processing CPF validation request");

    let cpf = match extract_cpf(query, &body) {
        Ok(cpf) => cpf,
        Err(reply) => return reply,
    };

    let validation = cpf::validate(&cpf);
    if !validation.valid {
        tracing::info!("CPF failed checksum validation");
        return (
            StatusCode::BAD_REQUEST,
            Json(CpfResponse::invalid_digits(cpf)),
        )
            .into_response();
    }

    match state.registry.verify(&validation.digits).await {
        Ok(RegistryStatus::Found) => {
            (StatusCode::OK, Json(CpfResponse::found(cpf))).into_response()
        }
        Ok(RegistryStatus::NotFound(status)) => {
            tracing::info!("Registry answered with status {}", status);
            (StatusCode::BAD_REQUEST, Json(CpfResponse::not_found(cpf))).into_response()
        }
        Err(e) => {
            tracing::warn!("Registry lookup failed: {}", e);
            let failure = QueryFailure {
                error: format!("Erro na consulta: {}", e),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response()
        }
    }
}

// The query string wins; the body is only parsed when no usable query value
// is present. An empty value counts as absent, as does a non-string field.
fn extract_cpf(query: CpfQuery, body: &[u8]) -> std::result::Result<String, Response> {
    if let Some(cpf) = query.cpf.filter(|c| !c.is_empty()) {
        return Ok(cpf);
    }

    let parsed: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => {
            return Err((StatusCode::BAD_REQUEST, "Invalid JSON body.").into_response());
        }
    };

    match parsed.get("cpf").and_then(|v| v.as_str()) {
        Some(cpf) if !cpf.is_empty() => Ok(cpf.to_string()),
        _ => Err((StatusCode::BAD_REQUEST, USAGE_MESSAGE).into_response()),
    }
}
