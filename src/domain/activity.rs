use serde::{Deserialize, Serialize};
use crate::util::lenient::string_or_number;

/// An activity record as stored by the backend. Duration and calories are kept as display
/// text because the backend returns whatever was entered, numeric or not.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Activity {
    #[serde(rename = "ActivityID")]
    pub id: u64,
    #[serde(rename = "ActivityName")]
    pub name: String,
    #[serde(rename = "DurationTime", deserialize_with = "string_or_number")]
    pub duration: String, // Minutes
    #[serde(rename = "TotalCaloriesBurnt", deserialize_with = "string_or_number")]
    pub calories: String
}

pub type ActivityVec = Vec<Activity>;

/// The user-entered fields of an activity, sent verbatim to the backend on create.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ActivityDraft {
    #[serde(rename = "ActivityName")]
    pub name: String,
    #[serde(rename = "DurationTime")]
    pub duration: String,
    #[serde(rename = "TotalCaloriesBurnt")]
    pub calories: String
}

/// Body of an update request: the draft fields plus the identifier of the row.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ActivityUpdate {
    #[serde(flatten)]
    pub draft: ActivityDraft,
    #[serde(rename = "ActivityID")]
    pub id: u64
}
