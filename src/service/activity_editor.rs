use log::{debug, warn};
use crate::client::activity_client::ActivityClient;
use crate::domain::activity::{ActivityDraft, ActivityUpdate};
use crate::domain::activity_form::{ActivityForm, InputError};

/// Whether the page must be reloaded after a mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reload {
    Now,
    Skip
}

/// Creates an activity from the add form. An incomplete form is rejected before
/// any backend call. Otherwise the page is reloaded once the backend has answered,
/// whether the creation succeeded or not.
pub async fn create_activity(client: &ActivityClient, form: ActivityForm) -> Result<Reload, InputError> {
    let draft = ActivityDraft::try_from(form)?;
    match client.create_activity(&draft).await {
        Ok(created) => debug!("Created activity {created}"),
        Err(error) => warn!("Failed to create activity: {error}")
    }
    Ok(Reload::Now)
}

/// Replaces the fields of an activity. Reloads only if the backend accepted the update.
pub async fn edit_activity(client: &ActivityClient, id: u64, form: ActivityForm) -> Result<Reload, InputError> {
    let draft = ActivityDraft::try_from(form)?;
    let update = ActivityUpdate { draft, id };
    match client.update_activity(&update).await {
        Ok(()) => {
            debug!("Updated activity {id}");
            Ok(Reload::Now)
        }
        Err(error) => {
            warn!("Failed to update row {id}: {error}");
            Ok(Reload::Skip)
        }
    }
}

/// Deletes an activity. Reloads only if the backend confirmed the deletion.
pub async fn delete_activity(client: &ActivityClient, id: u64) -> Reload {
    match client.delete_activity(id).await {
        Ok(()) => {
            debug!("Deleted activity {id}");
            Reload::Now
        }
        Err(error) => {
            warn!("Failed to delete row {id}: {error}");
            Reload::Skip
        }
    }
}
