use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use log::{debug, info};
use tokio::net::TcpListener;
use tokio::sync::broadcast::Receiver;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use crate::rest::page_handlers::{create_handler, delete_handler, edit_handler, page_handler};
use crate::rest::page_paths::{ACTIVITIES, DELETE_ACTIVITY, EDIT_ACTIVITY, PAGE};
use crate::rest::timing_layer::TimingLayer;
use crate::state::app_state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route(PAGE, get(page_handler))
        .route(ACTIVITIES, post(create_handler))
        .route(EDIT_ACTIVITY, post(edit_handler))
        .route(DELETE_ACTIVITY, post(delete_handler))
        .layer(ServiceBuilder::new().layer(cors))
        .layer(ServiceBuilder::new().layer(TimingLayer))
        .with_state(state)
}

pub fn spawn_http_server(listener: TcpListener, state: SharedState, mut rx_term: Receiver<()>) -> JoinHandle<()> {
    info!("Spawn HTTP server");
    let router = create_router(state);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                // Also leave if the sender was dropped
                let _ = rx_term.recv().await;
                debug!("Termination signal received, leave HTTP server");
            })
            .await
            .unwrap() // Panic accepted
    })
}
