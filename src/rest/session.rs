use std::convert::Infallible;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use crate::domain::user::UserId;
use crate::rest::page_paths::SESSION_COOKIE;
use crate::state::app_state::SharedState;

/// The user of the current request: taken from the session cookie,
/// or else the default user of the configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: Option<UserId>
}

#[async_trait]
impl FromRequestParts<SharedState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        let user_id = cookie_user_id(&parts.headers)
            .or_else(|| state.default_user.clone());
        Ok(Session { user_id })
    }
}

fn cookie_user_id(headers: &HeaderMap) -> Option<UserId> {
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .map(UserId::new)
}
