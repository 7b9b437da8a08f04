// Resolves the Caller for an inbound HTTP request.
//
// The fronting identity proxy authenticates the user and forwards the user id in a trusted
// header. A missing, empty or non-ASCII header value means the request is anonymous.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::shared::core::identity::Caller;
use crate::shell::state::AppState;

pub fn caller_from_headers(headers: &HeaderMap, identity_header: &str) -> Caller {
    headers
        .get(identity_header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|user_id| !user_id.is_empty())
        .map(Caller::user)
        .unwrap_or_default()
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(caller_from_headers(
            &parts.headers,
            &state.config.identity_header,
        ))
    }
}
