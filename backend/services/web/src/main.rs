mod check;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use credcheck_common::types::ServiceInfo;
use credcheck_config::{init_tracing, AppConfig};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::check::client::ScoringClient;

const SERVICE_NAME: &str = "credcheck-web";

#[derive(Clone)]
pub struct AppState {
    pub client: ScoringClient,
    pub info: ServiceInfo,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info)
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = format!(
        "# HELP credcheck_up Service up indicator\n\
         # TYPE credcheck_up gauge\n\
         credcheck_up 1\n\
         # HELP credcheck_info Service info\n\
         # TYPE credcheck_info gauge\n\
         credcheck_info{{service=\"{}\",version=\"{}\"}} 1\n",
        state.info.name, state.info.version
    );

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(check::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = SERVICE_NAME, scoring_url = %config.scoring_url, "starting");

    let client = ScoringClient::new(&config.scoring_url).expect("failed to create scoring client");
    let state = AppState {
        client,
        info: ServiceInfo::new(SERVICE_NAME, &config.scoring_url),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
