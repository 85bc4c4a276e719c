use askama::Template;
use crate::domain::activity::Activity;
use crate::rest::page_paths::{ACTIVITIES, PAGE};

#[derive(Template)]
#[template(path = "activity_page.html")]
struct ActivityPageTemplate<'a> {
    activities: &'a [Activity],
    activities_path: &'a str
}

#[derive(Template)]
#[template(path = "warning.html")]
struct WarningTemplate<'a> {
    message: &'a str,
    page_path: &'a str
}

/// Renders the activity page. Without activities (loading failed) the table body stays empty.
pub fn render_page(activities: Option<&[Activity]>) -> Result<String, askama::Error> {
    let activities = activities.unwrap_or_default();
    ActivityPageTemplate { activities, activities_path: ACTIVITIES }.render()
}

/// Renders the warning shown for an incomplete add or edit form.
pub fn render_warning(message: &str) -> Result<String, askama::Error> {
    WarningTemplate { message, page_path: PAGE }.render()
}
