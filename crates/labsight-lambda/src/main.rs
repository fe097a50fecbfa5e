use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use labsight_lambda::config::AppConfig;
use labsight_lambda::state::{AppState, AwsCollaborators};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;

    tracing::info!(
        region = %config.region,
        model_id = %config.model_id,
        max_upload_bytes = config.max_upload_bytes,
        "starting labsight"
    );

    let state = AppState {
        collaborators: Arc::new(AwsCollaborators::new(sdk_config, &config)),
        max_upload_bytes: config.max_upload_bytes,
    };
    let app = labsight_lambda::router(state);

    match config.bind_addr {
        Some(addr) => {
            let listener = TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
