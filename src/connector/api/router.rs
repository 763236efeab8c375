use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::domain::{DomainError, LaunchView};

use super::container::Container;

/// The whole control panel: one page, one trigger, a text output area.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Incentive System Demo</title>
<style>
  body { font-family: sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }
  button { font-size: 1rem; padding: 0.5rem 1.5rem; cursor: pointer; }
  pre { background: #f4f4f4; padding: 1rem; min-height: 1.5rem; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Incentive System Demo</h1>
<p>Next.js based incentive system demo. Provides realtime updates through a
GraphQL API and WebSockets.</p>
<button id="start">Start server</button>
<pre id="output"></pre>
<script>
  const output = document.getElementById('output');
  document.getElementById('start').addEventListener('click', async () => {
    output.textContent = '...';
    const res = await fetch('/api/launch', { method: 'POST' });
    output.textContent = await res.text();
  });
</script>
</body>
</html>
"#;

pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/launch", post(launch))
        .route("/api/status", get(status))
        .route("/api/stop", post(stop))
        .with_state(container)
}

/// Maps domain errors onto HTTP statuses with the error text as the body.
struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.0.to_string()).into_response()
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn launch(State(container): State<Arc<Container>>) -> Result<String, ApiError> {
    let report = container.start_use_case().execute().await?;
    Ok(report.message)
}

async fn status(
    State(container): State<Arc<Container>>,
) -> Result<Json<Vec<LaunchView>>, ApiError> {
    let views = container.status_use_case().execute().await?;
    Ok(Json(views))
}

async fn stop(State(container): State<Arc<Container>>) -> String {
    let stopped = container.stop_use_case().execute().await;
    format!("Stopped {} launch(es).", stopped)
}
