//! Axum server that renders the app and serves its WASM bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `ssr` feature. The blog API itself lives elsewhere;
//! this server renders Leptos routes, serves `/pkg` assets and answers
//! `/healthz`.

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),

    #[error("invalid PORT value: {0:?}")]
    Port(String),

    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve the listen address: `PORT` binds `0.0.0.0:<PORT>`, otherwise the
/// Leptos `site-addr` is used.
///
/// # Errors
///
/// Returns [`ServerError::Port`] if `port` is not a valid `u16`.
pub fn bind_addr(port: Option<&str>, site_addr: SocketAddr) -> Result<SocketAddr, ServerError> {
    match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => raw
            .parse::<u16>()
            .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
            .map_err(|_| ServerError::Port(raw.to_owned())),
        None => Ok(site_addr),
    }
}

/// Leptos SSR routes plus static assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// Load configuration, bind and serve until the process is stopped.
///
/// # Errors
///
/// Returns a [`ServerError`] if configuration is invalid or the listener fails.
pub async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = bind_addr(std::env::var("PORT").ok().as_deref(), leptos_options.site_addr)?;

    let app = app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "blogpessoal listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
