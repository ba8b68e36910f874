// One-shot pipeline run: search, crawl, analyze, score, persist.
//
// Usage: run_pipeline [query]

use anyhow::{Context, Result};
use server_core::{build_pipeline, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_QUERY: &str =
    "Dubai Luxury Residential Real Estate Market Size And Trends Analysis";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,insight=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    let config = Config::from_env().context("Failed to load configuration")?;
    let pipeline = build_pipeline(&config)
        .await
        .context("Failed to build pipeline")?;

    tracing::info!(%query, "Running research pipeline");

    // Hold the run result so the crawler is torn down on either path.
    let run_result = pipeline.run(&query).await;
    pipeline.close().await.context("Failed to close crawler")?;

    let outcome = run_result.context("Pipeline run failed")?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
