/// Listener setup, HTTPS redirect and graceful shutdown
use crate::{
    config::ServerSettings,
    error::{Result, ServerError},
};
use axum::{
    http::{header, uri::Authority, HeaderMap, Uri},
    response::{IntoResponse, Redirect, Response},
    Router,
};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use std::{net::SocketAddr, time::Duration};

/// Serve `router` until a shutdown signal arrives
///
/// Plain HTTP serves the router on `port`. With HTTPS enabled the router is
/// served over TLS on `https_port` and `port` only redirects to it.
pub async fn run(router: Router, settings: &ServerSettings) -> Result<()> {
    let handle = Handle::new();
    tokio::spawn(shutdown_on_signal(handle.clone(), settings.shutdown_grace()));

    let http_addr = socket_addr(&settings.host, settings.port)?;

    if settings.enable_https {
        let https_addr = socket_addr(&settings.host, settings.https_port)?;
        let tls = RustlsConfig::from_pem_file(&settings.tls_cert_path, &settings.tls_key_path).await?;

        tracing::info!(%https_addr, "Starting HTTPS server");
        tracing::info!(%http_addr, "Redirecting HTTP to HTTPS");

        let https = axum_server::bind_rustls(https_addr, tls)
            .handle(handle.clone())
            .serve(router.into_make_service());
        let redirect = axum_server::bind(http_addr)
            .handle(handle)
            .serve(redirect_router(settings.https_port).into_make_service());

        tokio::try_join!(https, redirect)?;
    } else {
        tracing::info!(%http_addr, "Starting HTTP server");

        axum_server::bind(http_addr)
            .handle(handle)
            .serve(router.into_make_service())
            .await?;
    }

    tracing::info!("Server stopped");
    Ok(())
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip = host
        .parse::<std::net::IpAddr>()
        .map_err(|e| ServerError::Config(format!("invalid server.host {host:?}: {e}")))?;
    Ok(SocketAddr::from((ip, port)))
}

/// Wait for Ctrl-C or SIGTERM, then stop accepting and drain for `grace`
async fn shutdown_on_signal(handle: Handle, grace: Duration) {
    shutdown_signal().await;
    tracing::info!(grace_secs = grace.as_secs(), "Shutdown signal received, draining connections");
    handle.graceful_shutdown(Some(grace));
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Router answering every request with a redirect to the HTTPS listener
pub fn redirect_router(https_port: u16) -> Router {
    Router::new().fallback(move |headers: HeaderMap, uri: Uri| async move {
        redirect_to_https(&headers, &uri, https_port)
    })
}

fn redirect_to_https(headers: &HeaderMap, uri: &Uri, https_port: u16) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Authority>().ok());

    match host {
        Some(authority) => {
            let path = uri.path_and_query().map_or("/", |pq| pq.as_str());
            Redirect::permanent(&https_url(authority.host(), path, https_port)).into_response()
        }
        None => ServerError::BadRequest("missing or invalid Host header".to_string()).into_response(),
    }
}

/// `https://` URL for `host` and `path`, omitting the default port
pub fn https_url(host: &str, path: &str, https_port: u16) -> String {
    if https_port == 443 {
        format!("https://{host}{path}")
    } else {
        format!("https://{host}:{https_port}{path}")
    }
}
