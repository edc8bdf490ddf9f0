use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use sentimeter::application::services::SentimentService;
use sentimeter::infrastructure::observability::{TracingConfig, init_tracing};
use sentimeter::infrastructure::sentiment::PredictorFactory;
use sentimeter::presentation::{AppState, Environment, PageRenderer, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
        &settings.logging.level,
    ));

    let factory = Arc::new(PredictorFactory::new(settings.sentiment.model.clone()));
    let sentiment_service = Arc::new(SentimentService::new(settings.backend(), factory));

    tracing::info!(
        backend = %sentiment_service.backend(),
        model = %settings.sentiment.model,
        preload = settings.sentiment.preload,
        "Sentiment service configured"
    );

    if settings.sentiment.preload {
        let backend = sentiment_service.warm_up().await?;
        tracing::info!(backend = %backend, "Sentiment predictor preloaded");
    }

    let pages = Arc::new(PageRenderer::new().context("Failed to load page templates")?);
    let router = create_router(AppState::new(sentiment_service, pages));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
