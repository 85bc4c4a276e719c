use serde::Deserialize;

/// Associates a user with one of its activities. Fields other than the
/// activity identifier are ignored.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct ActivityLink {
    #[serde(rename = "ActivityID")]
    pub activity_id: u64
}

pub type ActivityLinkVec = Vec<ActivityLink>;
