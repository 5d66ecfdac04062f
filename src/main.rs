use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use deepreader::application::ports::LlmClient;
use deepreader::application::services::{AnalysisService, ReaderService};
use deepreader::infrastructure::llm::{MockLlmClient, OpenAiClient};
use deepreader::infrastructure::observability::{TracingConfig, init_tracing};
use deepreader::infrastructure::text_processing::DocxAdapter;
use deepreader::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().context("failed to read APP_ENVIRONMENT")?;
    let settings = Settings::load(environment).context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    init_tracing(&TracingConfig::from_settings(
        &settings.logging,
        settings.environment,
    ));
    tracing::info!(?settings, "Configuration loaded");

    let llm_client: Arc<dyn LlmClient> = if settings.scaffold.enabled {
        tracing::warn!("Scaffold mode enabled, completions are served by the local mock");
        Arc::new(MockLlmClient::new(settings.scaffold.mock_delay()))
    } else {
        let client = OpenAiClient::new(
            &settings.llm.base_url,
            &settings.llm.api_key,
            &settings.llm.model,
            settings.llm.request_timeout(),
        )?;
        tracing::info!(
            url = client.completions_url(),
            model = client.model(),
            "Completion endpoint configured"
        );
        Arc::new(client)
    };

    let analysis_service = AnalysisService::new(llm_client, settings.analysis_options());
    let reader_service = Arc::new(ReaderService::new(
        Arc::new(DocxAdapter::new()),
        analysis_service,
        settings.analysis.max_concurrent_analyses,
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        reader_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
