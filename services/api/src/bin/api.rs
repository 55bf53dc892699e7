//! services/api/src/bin/api.rs

use api_lib::{
    adapters::OpenAiCompletionAdapter,
    config::Config,
    error::ApiError,
    web::{cors_layer, rest::ApiDoc, router, AppState},
};
use emotion_core::EmotionAnalyzer;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!(
        "Configuration loaded. Provider: {:?}, model: {}",
        config.provider, config.model
    );

    // --- 2. Initialize the Model Adapter & Analyzer ---
    let client = OpenAiCompletionAdapter::client_for(&config.api_key, config.api_base.as_deref());
    let completion = Arc::new(OpenAiCompletionAdapter::new(client, config.model.clone()));

    let mut analyzer = EmotionAnalyzer::new(completion);
    if let Some(timeout) = config.model_timeout {
        info!("Model calls are bounded to {:?}", timeout);
        analyzer = analyzer.with_timeout(timeout);
    }

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState { analyzer });

    // --- 4. Create the Web Router ---
    let cors = cors_layer(&config.allowed_origins)?;
    let app = router(app_state)
        .layer(cors)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
