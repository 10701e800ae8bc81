//! HTTP-Dienst: Einreichungs-Endpunkt, Orte-Liste, Admin-Bereich hinter dem
//! Access-Gate.

mod error;
pub mod gate;
mod routes;
mod state;

pub use error::{ApiError, MSG_INTERNAL};
pub use gate::{GateDecision, ACCESS_TOKEN_COOKIE};
pub use state::ServerState;

use anyhow::Context;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::shared::ServerOptions;

/// Baut den Router mit allen Routen und Layern.
pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(routes::home))
        .route("/login", get(routes::login))
        .route("/health", get(routes::health))
        .route("/api/submit", post(routes::submit))
        .route("/api/locations", get(routes::list_locations))
        .route("/admin", get(routes::admin_overview))
        .route("/admin/*rest", get(routes::admin_overview))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::access_gate,
        ))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .with_state(state)
}

/// Antwort für einen Panic in einem Handler.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unbekannt");
    log::error!("Panic im Handler: {detail}");
    ApiError::Internal.into_response()
}

/// Startet den Server und läuft bis Ctrl+C / SIGTERM.
pub async fn serve(state: ServerState, options: &ServerOptions) -> anyhow::Result<()> {
    let address = format!("{}:{}", options.bind_address, options.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Adresse {address} konnte nicht gebunden werden"))?;
    log::info!("Server läuft auf {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server-Fehler")?;

    log::info!("Server beendet");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => log::info!("Ctrl+C empfangen, fahre herunter"),
            Err(err) => {
                log::error!("Ctrl+C-Handler nicht verfügbar: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("SIGTERM empfangen, fahre herunter");
            }
            Err(err) => {
                log::error!("Signal-Handler nicht verfügbar: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
