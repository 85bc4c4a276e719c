use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_macros::debug_handler;
use log::{debug, info, warn};
use crate::domain::activity::ActivityVec;
use crate::domain::activity_form::{ActivityForm, InputError, INPUT_WARNING};
use crate::render::page::{render_page, render_warning};
use crate::rest::page_paths::PAGE;
use crate::rest::session::Session;
use crate::service::activity_editor::{create_activity, delete_activity, edit_activity, Reload};
use crate::service::activity_loader::load_activities;
use crate::state::app_state::SharedState;

#[debug_handler]
pub async fn page_handler(State(state): State<SharedState>, uri: Uri, session: Session) -> Response {
    debug!("Enter {uri}");
    let activities = try_load(&state, session).await;
    html(render_page(activities.as_deref()))
}

/// Failures are logged only, the page then shows an empty table.
async fn try_load(state: &SharedState, session: Session) -> Option<ActivityVec> {
    let Some(user_id) = session.user_id else {
        warn!("No user in session, cannot load activities");
        return None;
    };
    match load_activities(&state.client, &user_id).await {
        Ok(activities) => Some(activities),
        Err(error) => {
            warn!("Failed to load activities of user {user_id}: {error}");
            None
        }
    }
}

#[debug_handler]
pub async fn create_handler(State(state): State<SharedState>, uri: Uri, Form(form): Form<ActivityForm>) -> Response {
    debug!("Enter {uri}");
    reply(create_activity(&state.client, form).await)
}

#[debug_handler]
pub async fn edit_handler(State(state): State<SharedState>, uri: Uri, Path(id): Path<u64>, Form(form): Form<ActivityForm>) -> Response {
    debug!("Enter {uri}");
    reply(edit_activity(&state.client, id, form).await)
}

#[debug_handler]
pub async fn delete_handler(State(state): State<SharedState>, uri: Uri, Path(id): Path<u64>) -> Response {
    debug!("Enter {uri}");
    reply(Ok(delete_activity(&state.client, id).await))
}

/// A reload redirects the browser back to the page. A 204 leaves it on the current page.
fn reply(result: Result<Reload, InputError>) -> Response {
    match result {
        Ok(Reload::Now) => Redirect::to(PAGE).into_response(),
        Ok(Reload::Skip) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            info!("Rejected form: {error}");
            (StatusCode::BAD_REQUEST, html(render_warning(INPUT_WARNING))).into_response()
        }
    }
}

fn html(rendered: Result<String, askama::Error>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            warn!("Failed to render template: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
