use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::handlers::ApiError;

/// Identity of the authenticated caller, as forwarded by the identity
/// provider fronting this service.
///
/// The provider terminates the session and passes the verified subject in
/// `x-user-id`, with optional profile claims alongside. This layer only
/// requires that an id is present; requests without one are rejected with
/// 401 before any handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        let id = header("x-user-id")
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthUser {
            id,
            email: header("x-user-email"),
            display_name: header("x-user-name"),
            avatar_url: header("x-user-avatar"),
        })
    }
}
