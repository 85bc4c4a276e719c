use futures::future::try_join_all;
use log::debug;
use crate::client::activity_client::{ActivityClient, ClientError};
use crate::domain::activity::ActivityVec;
use crate::domain::user::UserId;

/// Loads all activities of a user in three stages: the user record, the user's activity links,
/// and then the details of every linked activity. The detail requests are sent concurrently.
/// Any failed request fails the whole load, there are no partial results.
/// The returned activities are in the order of the activity links.
pub async fn load_activities(client: &ActivityClient, user_id: &UserId) -> Result<ActivityVec, ClientError> {
    let user = client.get_user(user_id).await?;
    let links = client.get_activity_links(&user.id).await?;
    debug!("User {} has {} linked activities", user.id, links.len());

    let requests = links.iter().map(|link| client.get_activity(link.activity_id));
    let activities = try_join_all(requests).await?;
    debug!("Loaded activities {:?}", activities);
    Ok(activities)
}
