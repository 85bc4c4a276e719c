// Path segments of the backend REST API

pub const USERS: &str = "users";
pub const TRACKS_ACTIVITIES: &str = "tracksactivities";
pub const ACTIVITIES: &str = "activities";
pub const CREATE_ACTIVITIES: &str = "createactivities";
pub const UPDATE_ACTIVITIES: &str = "updateactivities";
pub const DELETE_ACTIVITIES: &str = "deleteactivities";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
