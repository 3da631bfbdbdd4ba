mod model;
mod server;

use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router,
    service::token::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::purge_expired_tokens(&db).await;

    let tokens = TokenService::from_config(&config);
    let state = AppState::new(db, tokens, config.media_url.clone());

    let mut app = router::router().with_state(state);

    // Media behind an absolute URL is served elsewhere.
    let media_path = config.media_url.trim_end_matches('/');
    if media_path.starts_with('/') {
        app = app.nest_service(media_path, ServeDir::new(&config.media_root));
    }

    let app = app.layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .await
        .map_err(InternalError::from)?;

    Ok(())
}
