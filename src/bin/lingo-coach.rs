//! lingo-coach -- language-learning practice API server.
//!
//! Usage: lingo-coach  (configuration via environment / .env)

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = lingo_coach::Config::from_env();

    lingo_coach::api::serve(config).await
}
