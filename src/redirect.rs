use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    response::{IntoResponse, Response},
    Router,
};
use http::{header, HeaderValue, StatusCode};

use crate::{observe::ResolveRecord, AppState};

/// The directive a resolved request turns into: an empty-bodied response
/// carrying the resolved status code and `Location` header.
pub struct ResolvedRedirect {
    pub to: String,
    pub code: StatusCode,
}

impl IntoResponse for ResolvedRedirect {
    fn into_response(self) -> Response {
        match HeaderValue::try_from(self.to) {
            Ok(location) => {
                let mut response = self.code.into_response();
                response.headers_mut().insert(header::LOCATION, location);
                response
            }
            Err(error) => {
                tracing::error!(%error, "redirect destination is not a valid Location value");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub async fn redirect_handler(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> ResolvedRedirect {
    let path = uri.path();
    let entry = state.table.resolve(path);

    state
        .observer
        .observe(&ResolveRecord::now(path, &entry.to, entry.code.as_u16()));

    tracing::debug!(from = %path, to = %entry.to, code = %entry.code, "redirecting");

    ResolvedRedirect {
        to: entry.to.clone(),
        code: entry.code,
    }
}

/// Every path and every method fall through to the redirect handler.
pub fn redirect_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(redirect_handler)
        .with_state(state)
}
