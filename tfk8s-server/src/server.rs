// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::{sync::Arc, time::Duration, net::{SocketAddr, TcpListener}};
use anyhow::Context as _;
use axum::{
    routing::get,
    Router,
    Extension,
};
use axum::response::{Json, IntoResponse};
use axum_server::{Handle, tls_rustls::RustlsConfig};
use serde::Serialize;
use tokio::signal;

use tfk8s_common::constant::{APP_NAME, HANDSHAKE_PREFIX, PROTOCOL_VERSION};
use tfk8s_common::telemetry::{create_trace_layer, error};
use tfk8s_provider::provider::K8sProvider;

use crate::error::ServerError;
use crate::router::v1;

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

pub fn create_router(provider: Arc<K8sProvider>) -> Router {
    Router::new()
        .nest("/v1", v1::router())
        .layer(Extension(provider))
        .layer(create_trace_layer())
        // Root endpoint after the tracing layer to ensure
        // that the root endpoint is not traced
        .route("/", get(|| async {
            let response = RootResponse {
                name: APP_NAME,
                version: env!("CARGO_PKG_VERSION"),
            };
            Json(response).into_response()
        }))
}

/// Bind the listener up front so the address can be announced before serving
pub fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    let addr = addr
        .parse::<SocketAddr>()
        .map_err(|e| ServerError::InvalidAddress(addr.to_string(), e))?;
    let listener = TcpListener::bind(addr)?;
    listener.set_nonblocking(true)?;
    Ok(listener)
}

/// Line written to stdout once the server listens, read by the host to connect
pub fn handshake_line(addr: &SocketAddr, tls: bool) -> String {
    let scheme = if tls { "https" } else { "http" };
    format!("{}|{}|{}|{}", HANDSHAKE_PREFIX, PROTOCOL_VERSION, addr, scheme)
}

pub async fn create_tls_config(cert_file: &str, key_file: &str) -> anyhow::Result<RustlsConfig> {
    RustlsConfig::from_pem_file(cert_file, key_file)
        .await
        .with_context(|| format!("Failed to load TLS certificate `{}` and key `{}`", cert_file, key_file))
}

pub async fn serve(listener: TcpListener, router: Router, tls_config: Option<RustlsConfig>, handle: Handle) -> std::io::Result<()> {
    match tls_config {
        Some(tls_config) => {
            axum_server::from_tcp_rustls(listener, tls_config)
                .handle(handle)
                .serve(router.into_make_service())
                .await
        }
        None => {
            axum_server::from_tcp(listener)
                .handle(handle)
                .serve(router.into_make_service())
                .await
        }
    }
}

pub async fn shutdown_signal(handle: Handle) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(event = "SignalError", error = %e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(event = "SignalError", error = %e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => (),
        _ = terminate => (),
    }

    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tfk8s_common::state::State;

    #[rstest]
    #[case(false, "TFK8S_PROVIDER|1|127.0.0.1:4567|http")]
    #[case(true, "TFK8S_PROVIDER|1|127.0.0.1:4567|https")]
    fn handshake(#[case] tls: bool, #[case] expected: &str) {
        let addr: SocketAddr = "127.0.0.1:4567".parse().unwrap();
        assert_eq!(handshake_line(&addr, tls), expected);
    }

    #[test]
    fn bind_rejects_bad_address() {
        let error = bind("localhost:port").unwrap_err();
        assert!(matches!(error, ServerError::InvalidAddress(addr, _) if addr == "localhost:port"));
    }

    #[test]
    fn bind_picks_free_port() {
        let listener = bind("127.0.0.1:0").unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn serves_until_shutdown() {
        let provider = Arc::new(K8sProvider::new(Arc::new(State::default())));
        let listener = bind("127.0.0.1:0").unwrap();
        let handle = Handle::new();

        let server = tokio::spawn(serve(listener, create_router(provider), None, handle.clone()));
        handle.graceful_shutdown(None);

        assert!(server.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn missing_certificate_is_an_error() {
        let error = create_tls_config("/nonexistent/tls.crt", "/nonexistent/tls.key").await.unwrap_err();
        assert!(error.to_string().contains("/nonexistent/tls.crt"));
    }
}
