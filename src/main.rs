use std::{env, sync::Arc};

use rebound::{config::RedirectsConfig, redirect::redirect_router, AppState};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rebound=debug,tower_http=info".into()),
        )
        .init();

    let config_path = env::var("REBOUND_CONFIG").unwrap_or_else(|_| "rebound.toml".to_owned());

    let config = RedirectsConfig::from_file(&config_path).await.unwrap();
    let table = config.into_table().unwrap();

    let state = Arc::new(AppState::new(table));

    let app = redirect_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("[::]:{}", env::var("PORT").unwrap_or("3000".to_owned()))
        .parse()
        .unwrap();

    tracing::info!("Listening on: {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
