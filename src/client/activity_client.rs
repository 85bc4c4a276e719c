use log::debug;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;
use crate::client::api_paths::{ACTIVITIES, CREATE_ACTIVITIES, DELETE_ACTIVITIES, TRACKS_ACTIVITIES, UPDATE_ACTIVITIES, USERS};
use crate::domain::activity::{Activity, ActivityDraft, ActivityUpdate};
use crate::domain::activity_link::ActivityLinkVec;
use crate::domain::user::{User, UserId};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Backend URL {0} cannot take a path")]
    BaseUrl(String)
}

type ClientResult<T> = Result<T, ClientError>;

/// Typed access to the activity backend. Every call is a single request,
/// non-success statuses are turned into errors.
#[derive(Clone, Debug)]
pub struct ActivityClient {
    http: reqwest::Client,
    base_url: Url
}

impl ActivityClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }
        Ok(Self { http: reqwest::Client::new(), base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_user(&self, id: &UserId) -> ClientResult<User> {
        self.get_json(self.url(&[USERS, id.as_str()])?).await
    }

    pub async fn get_activity_links(&self, user_id: &UserId) -> ClientResult<ActivityLinkVec> {
        self.get_json(self.url(&[TRACKS_ACTIVITIES, user_id.as_str()])?).await
    }

    pub async fn get_activity(&self, id: u64) -> ClientResult<Activity> {
        self.get_json(self.url(&[ACTIVITIES, &id.to_string()])?).await
    }

    /// Creates an activity and returns the record sent back by the backend.
    pub async fn create_activity(&self, draft: &ActivityDraft) -> ClientResult<Value> {
        let url = self.url(&[CREATE_ACTIVITIES])?;
        debug!("POST {url}");
        let created = self.http
            .post(url)
            .header(CACHE_CONTROL, "no-cache")
            .json(draft)
            .send().await?
            .error_for_status()?
            .json::<Value>().await?;
        Ok(created)
    }

    /// Updates an activity. The response body is not evaluated.
    pub async fn update_activity(&self, update: &ActivityUpdate) -> ClientResult<()> {
        let url = self.url(&[UPDATE_ACTIVITIES])?;
        debug!("PUT {url}");
        self.http
            .put(url)
            .header(CACHE_CONTROL, "no-cache")
            .json(update)
            .send().await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_activity(&self, id: u64) -> ClientResult<()> {
        let url = self.url(&[DELETE_ACTIVITIES, &id.to_string()])?;
        debug!("DELETE {url}");
        self.http
            .delete(url)
            .send().await?
            .error_for_status()?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!("GET {url}");
        let value = self.http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send().await?
            .error_for_status()?
            .json::<T>().await?;
        Ok(value)
    }

    /// Appends percent-encoded segments to the base URL, keeping any base path.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
