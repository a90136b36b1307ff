mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    tracing::info!(
        backend = %config.client.backend,
        api_base = %config.client.api_base,
        "client configuration loaded"
    );

    let port = config.port;
    let app = routes::app(config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "tasklist listening");
    axum::serve(listener, app).await.expect("server failed");
}
