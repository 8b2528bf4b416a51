use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::{collections::HashMap, sync::Arc, time::Instant};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::client::ValorantClient;
use crate::error::ProbeError;
use crate::probe::{self, OPENMETRICS_CONTENT_TYPE};
use crate::telemetry::Telemetry;
use crate::transport::{cancellation, Transport};

const LANDING_PAGE: &str = r#"<html>
<head><title>Valorant Exporter</title></head>
<body>
<h1>Valorant Exporter</h1>
<p><a href="/probe?target=name/tag">Probe a player</a></p>
<p><a href="/metrics">Metrics</a></p>
</body>
</html>"#;

pub struct AppState<T> {
    client: ValorantClient<T>,
    telemetry: Arc<Telemetry>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            telemetry: self.telemetry.clone(),
        }
    }
}

pub fn build_router<T: Transport>(client: ValorantClient<T>, telemetry: Arc<Telemetry>) -> Router {
    let state = AppState { client, telemetry };

    Router::new()
        .route("/", get(landing_handler))
        .route("/probe", get(probe_handler::<T>))
        .route("/metrics", get(metrics_handler::<T>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Every probe failure is answered with `400` and the error text.
fn error_response(e: &ProbeError) -> Response {
    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
}

fn encoding_failed(e: std::fmt::Error) -> Response {
    warn!(error = %e, "failed to encode registry");
    (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response()
}

async fn landing_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn probe_handler<T: Transport>(
    State(state): State<AppState<T>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let target = params.get("target").map(String::as_str);

    // Dropping this future (client went away) drops the guard and aborts the fetch.
    let (_guard, cancel) = cancellation();

    let outcome = probe::run(&state.client, target, cancel).await;
    let elapsed = started.elapsed();

    match outcome {
        Ok(registry) => {
            state.telemetry.record_probe("success", elapsed);
            info!(player = target.unwrap_or_default(), ?elapsed, "probe succeeded");
            match probe::render(&registry) {
                Ok(body) => ([(CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)], body).into_response(),
                Err(e) => encoding_failed(e),
            }
        }
        Err(e) => {
            state.telemetry.record_probe(e.kind(), elapsed);
            warn!(player = target.unwrap_or_default(), error = %e, "probe failed");
            error_response(&e)
        }
    }
}

async fn metrics_handler<T: Transport>(State(state): State<AppState<T>>) -> Response {
    match state.telemetry.encode() {
        Ok(body) => ([(CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)], body).into_response(),
        Err(e) => encoding_failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, ValidationError};

    #[test]
    fn every_error_kind_maps_to_bad_request() {
        let errors = [
            ProbeError::MissingTarget,
            ProbeError::Fetch(FetchError::Cancelled),
            ProbeError::Validation(ValidationError::ZeroElo),
        ];
        for e in &errors {
            assert_eq!(error_response(e).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn landing_page_links_endpoints() {
        let Html(page) = landing_handler().await;
        assert!(page.contains("/probe"));
        assert!(page.contains("/metrics"));
    }
}
