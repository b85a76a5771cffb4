pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;

use crate::routes::{configure_routes, AppState};
use crate::shared::config::load_config;
use crate::shared::upstream::HttpUpstream;

/// Which side of the gateway a request path is served by.
fn route_kind(path: &str) -> &'static str {
    match path {
        "/health" => "health",
        "/api/user/login" => "auth",
        p if p.starts_with("/api/") => "ops",
        _ => "static",
    }
}

/// One tracing event per request; non-2xx answers are logged as warnings.
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let kind = route_kind(&path);
    if response.status().is_success() {
        tracing::info!(%method, %path, status, elapsed_ms, kind, "request");
    } else {
        tracing::warn!(%method, %path, status, elapsed_ms, kind, "request");
    }
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = load_config()?;
    tracing::info!(
        "upstreams: auth={}, ops={}",
        config.upstream.auth_base_url,
        config.upstream.ops_base_url
    );

    let state = AppState {
        upstream: Arc::new(HttpUpstream::new(config.upstream.clone())?),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = configure_routes(state, &config.server.dist_dir)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_kind() {
        assert_eq!(route_kind("/health"), "health");
        assert_eq!(route_kind("/api/user/login"), "auth");
        assert_eq!(route_kind("/api/purchaseOrder"), "ops");
        assert_eq!(route_kind("/api/city"), "ops");
        assert_eq!(route_kind("/"), "static");
        assert_eq!(route_kind("/index.html"), "static");
        assert_eq!(route_kind("/apiary"), "static");
    }
}
