mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "client bundle not found; run `trunk build` in client/");
    }
    match config.backend_url.as_deref() {
        Some(url) => tracing::info!(backend = url, "forwarding /api to backend"),
        None => tracing::warn!("BACKEND_URL not set; /api requests will fail"),
    }

    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::app(state, &config.dist_dir);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind, "protasker listening");
    axum::serve(listener, app).await.expect("server failed");
}
