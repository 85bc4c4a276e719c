use std::sync::Arc;
use crate::client::activity_client::ActivityClient;
use crate::domain::user::UserId;

/// State shared between the axum handlers. Immutable, so no lock is needed.
pub struct AppState {
    pub client: ActivityClient,
    pub default_user: Option<UserId> // Used if the request carries no session cookie
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(client: ActivityClient, default_user: Option<UserId>) -> SharedState {
        Arc::new(Self { client, default_user })
    }
}
