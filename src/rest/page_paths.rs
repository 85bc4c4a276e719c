use const_format::concatcp;

pub const PAGE: &str = "/";
pub const ACTIVITIES: &str = "/activities";
pub const EDIT_ACTIVITY: &str = concatcp!(ACTIVITIES, "/:id/edit");
pub const DELETE_ACTIVITY: &str = concatcp!(ACTIVITIES, "/:id/delete");

/// Name of the cookie holding the identifier of the logged-in user
pub const SESSION_COOKIE: &str = "GlobalUserID";
