//! Servidor web Axum que expõe o serviço Unique Terms no contrato LAPPS

mod config;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde_json::Value;
use terms_core::{Data, UniqueTerms};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

/// Estado compartilhado da aplicação
struct AppState {
    service: UniqueTerms,
}

/// Falhas das rotas, convertidas em resposta HTTP com envelope `ERROR`
enum ApiError {
    /// Rejeição do adaptador do serviço
    Rejected(terms_core::Error),
    /// Falha do próprio servidor (ex: tarefa de lote abortada)
    Internal(String),
}

impl From<terms_core::Error> for ApiError {
    fn from(err: terms_core::Error) -> Self {
        ApiError::Rejected(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::Rejected(err) if err.is_client_error() => (StatusCode::BAD_REQUEST, Data::from(&err)),
            ApiError::Rejected(err) => (StatusCode::INTERNAL_SERVER_ERROR, Data::from(&err)),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, Data::error(message)),
        };
        warn!(status = status.as_u16(), payload = %envelope.payload, "Requisição rejeitada");
        (status, Json(envelope)).into_response()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    let state = Arc::new(AppState {
        service: UniqueTerms::new(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("não foi possível escutar em {}", config.bind))?;
    info!("🚀 Servidor Unique Terms iniciado em http://{}", config.bind);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/metadata", get(metadata_handler))
        .route("/execute", post(execute_handler))
        .route("/execute/batch", post(batch_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Retorna os metadados do serviço (envelope `META`)
async fn metadata_handler(State(state): State<Arc<AppState>>) -> Result<Json<Data>, ApiError> {
    Ok(Json(state.service.metadata_envelope()?))
}

/// Executa o serviço sobre um envelope `Data` recebido no corpo
///
/// O corpo é lido como bytes crus para que JSON inválido (ou UTF-8 inválido)
/// também vire envelope `ERROR`.
async fn execute_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Data>, ApiError> {
    let input = Data::from_slice(&body)?;
    Ok(Json(state.service.process(input)?))
}

/// Executa o serviço sobre uma lista de envelopes, em paralelo
///
/// Itens que não são envelopes válidos voltam como `ERROR` na mesma posição.
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Data>>, ApiError> {
    let items: Vec<Value> = serde_json::from_slice(&body)
        .map_err(|e| terms_core::Error::malformed(format!("esperava array de envelopes: {}", e)))?;
    info!("Lote recebido: {} envelopes", items.len());

    // Itens inválidos já são respondidos aqui; só os envelopes válidos vão ao serviço
    let mut outputs: Vec<Option<Data>> = Vec::with_capacity(items.len());
    let mut inputs = Vec::new();
    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Data>(item) {
            Ok(data) => {
                outputs.push(None);
                inputs.push((position, data));
            }
            Err(e) => {
                let err = terms_core::Error::malformed(e.to_string());
                warn!(position, error = %err, "Item do lote rejeitado");
                outputs.push(Some(Data::from(&err)));
            }
        }
    }

    // Roda o lote no pool do Rayon fora das threads do runtime
    let service = state.service;
    let (positions, envelopes): (Vec<usize>, Vec<Data>) = inputs.into_iter().unzip();
    let responses = tokio::task::spawn_blocking(move || service.respond_batch(envelopes))
        .await
        .map_err(|e| ApiError::Internal(format!("falha ao processar lote: {}", e)))?;

    for (position, response) in positions.into_iter().zip(responses) {
        outputs[position] = Some(response);
    }
    Ok(Json(outputs.into_iter().flatten().collect()))
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
