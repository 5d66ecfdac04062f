use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, analyze_upload_handler, health_handler, index_handler, report_handler,
    submit_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.upload.max_body_bytes());

    Router::new()
        .route("/", get(index_handler).post(submit_handler::<F, L>))
        .route("/health", get(health_handler::<F, L>))
        .route("/api/v1/analyze", post(analyze_handler::<F, L>))
        .route("/api/v1/analyze/upload", post(analyze_upload_handler::<F, L>))
        .route("/api/v1/report", post(report_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
