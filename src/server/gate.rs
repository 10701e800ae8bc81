//! Access-Gate vor dem Admin-Bereich.
//!
//! Reines Prädikat: es werden weder Sessions angelegt noch Rollen geändert.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::state::ServerState;
use crate::shared::AccessOptions;
use crate::store::RecordStore;

/// Cookie mit dem Access-Token der Session.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// Ergebnis der Zugriffsprüfung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    RedirectToLogin,
    RedirectHome,
}

/// Gibt zurück, ob der Pfad das Präfix selbst oder ein Unterpfad davon ist.
pub fn is_protected(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Liest das Access-Token aus `Authorization: Bearer` oder dem Session-Cookie.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == ACCESS_TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// Entscheidet über den Zugriff auf einen Pfad.
///
/// Store-Fehler zählen als "keine Session" bzw. "kein Admin".
pub async fn evaluate(
    store: &dyn RecordStore,
    access: &AccessOptions,
    path: &str,
    headers: &HeaderMap,
) -> GateDecision {
    if !is_protected(path, &access.admin_prefix) {
        return GateDecision::Pass;
    }

    let Some(token) = access_token(headers) else {
        return GateDecision::RedirectToLogin;
    };

    let session = match store.resolve_session(&token).await {
        Ok(Some(session)) => session,
        Ok(None) => return GateDecision::RedirectToLogin,
        Err(err) => {
            log::warn!("Session-Prüfung fehlgeschlagen: {err}");
            return GateDecision::RedirectToLogin;
        }
    };

    match store.find_profile(&session.user_id).await {
        Ok(Some(profile)) if profile.has_role(&access.admin_role) => GateDecision::Pass,
        Ok(_) => GateDecision::RedirectHome,
        Err(err) => {
            log::warn!("Profil-Abfrage fehlgeschlagen: {err}");
            GateDecision::RedirectHome
        }
    }
}

/// Middleware: leitet nicht berechtigte Anfragen an den Admin-Bereich um (307).
pub async fn access_gate(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = evaluate(
        state.store.as_ref(),
        &state.access,
        request.uri().path(),
        request.headers(),
    )
    .await;

    match decision {
        GateDecision::Pass => next.run(request).await,
        GateDecision::RedirectToLogin => {
            log::debug!("Gate: {} → Login", request.uri().path());
            Redirect::temporary(&state.access.login_path).into_response()
        }
        GateDecision::RedirectHome => {
            log::debug!("Gate: {} → Startseite", request.uri().path());
            Redirect::temporary(&state.access.home_path).into_response()
        }
    }
}
