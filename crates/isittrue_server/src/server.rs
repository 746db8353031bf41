//! Server lifecycle: bind and serve the API router.

use std::sync::Arc;

use tracing::info;

use isittrue_analyzer::{Analyzer, GenerativeDriver, Settings};
use isittrue_error::{ServerError, ServerErrorKind};

use crate::routes;

/// Bind to the configured address and serve until shutdown.
pub async fn serve<D>(settings: &Settings, analyzer: Arc<Analyzer<D>>) -> Result<(), ServerError>
where
    D: GenerativeDriver + 'static,
{
    let app = routes::router(analyzer);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Startup(format!("bind {addr}: {e}"))))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Startup(e.to_string())))
}
