use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::Identity;

/// Header carrying the opaque user id established by the external identity
/// provider at the edge. Absent or empty means unauthenticated.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Middleware that extracts the request identity and injects it into request
/// extensions so handlers receive it as an explicit value.
pub async fn extract_identity(mut request: Request, next: Next) -> Response {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    request.extensions_mut().insert(Identity(user_id));

    next.run(request).await
}
