use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::model::app::AppState;

static ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
static ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Origin allow-list CORS with credentials.
///
/// Requests without an `Origin` header (curl, server-to-server) pass through
/// untouched. Listed origins get the CORS response headers and a 204 answer
/// to preflights; unlisted origins get no CORS headers, which makes the
/// browser reject the response.
pub async fn cors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let allowed = origin
        .as_deref()
        .is_some_and(|origin| state.config.allowed_origins.iter().any(|o| o == origin));

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        if allowed {
            if let Some(origin) = origin {
                apply_cors_headers(&mut response, &origin);
            }
        }
        return response;
    }

    let mut response = next.run(request).await;

    if allowed {
        if let Some(origin) = origin {
            apply_cors_headers(&mut response, &origin);
        }
    }

    response
}

fn apply_cors_headers(response: &mut Response, origin: &str) {
    let Ok(origin) = HeaderValue::from_str(origin) else {
        return;
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}
