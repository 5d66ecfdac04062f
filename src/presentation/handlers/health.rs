use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub model: String,
    pub scaffold: bool,
}

pub async fn health_handler<F, L>(State(state): State<AppState<F, L>>) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            environment: state.settings.environment.as_str(),
            model: state.settings.llm.model.clone(),
            scaffold: state.settings.scaffold.enabled,
        }),
    )
}
