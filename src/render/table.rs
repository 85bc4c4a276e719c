use askama::Template;
use crate::domain::activity::Activity;
use crate::rest::page_paths::ACTIVITIES;

/// Table body rows, one per activity, in the given order.
/// Every row has a delete and an edit control carrying the activity identifier.
#[derive(Template)]
#[template(path = "activity_rows.html")]
struct ActivityRowsTemplate<'a> {
    activities: &'a [Activity],
    activities_path: &'a str
}

pub fn render_rows(activities: &[Activity]) -> Result<String, askama::Error> {
    ActivityRowsTemplate { activities, activities_path: ACTIVITIES }.render()
}
