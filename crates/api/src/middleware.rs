use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

/// Header every protected request must carry.
pub const AUTH_HEADER: &str = "authorize";

#[derive(Clone)]
pub struct AuthState {
    token: Arc<str>,
}

impl AuthState {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Reject requests whose `authorize` header does not match the configured token.
///
/// The handler never runs for a rejected request; the response is a bare 401.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = extract_token(req.headers())?;

    if presented != &*state.token {
        tracing::debug!(path = %req.uri().path(), "rejected request with wrong token");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Result<&str, StatusCode> {
    headers
        .get(AUTH_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?
        .to_str()
        .map_err(|_| StatusCode::UNAUTHORIZED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::ServiceExt;

    fn gated() -> Router {
        Router::new()
            .route("/car", post(|| async { StatusCode::OK }))
            .layer(axum::middleware::from_fn_with_state(
                AuthState::new("0000"),
                auth_middleware,
            ))
    }

    async fn status_with(header: Option<&str>) -> StatusCode {
        let mut req = Request::post("/car");
        if let Some(value) = header {
            req = req.header(AUTH_HEADER, value);
        }
        gated()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn matching_token_passes_through() {
        assert_eq!(status_with(Some("0000")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_or_missing_token_is_unauthorized() {
        assert_eq!(status_with(Some("auth1234")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_with(Some("")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_with(None).await, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn extract_token_reads_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), Err(StatusCode::UNAUTHORIZED));

        headers.insert(AUTH_HEADER, "0000".parse().unwrap());
        assert_eq!(extract_token(&headers), Ok("0000"));
    }
}
