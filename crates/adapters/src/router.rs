//! Activity routes and handlers.
//!
//! Handlers get the [`ActivityStore`] through axum state; nothing here
//! touches process-global data, so tests build a router per case.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use mergington_protocol::{Catalog, EmailQuery, MessageResponse};
use mergington_store::ActivityStore;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::http_server::ServerConfig;

/// Where `GET /` sends browsers.
pub const INDEX_PATH: &str = "/static/index.html";

/// Routes for the three activity endpoints only.
pub fn api_routes(store: ActivityStore) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(signup))
        .route("/activities/:activity_name/unregister", post(unregister))
        .with_state(store)
}

/// Full application router: activity endpoints, the static front end and
/// the middleware selected in `config`.
pub fn build_router(store: ActivityStore, config: &ServerConfig) -> Router {
    let mut router = api_routes(store).route("/", get(root));

    if let Some(dir) = &config.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router = router.layer(TraceLayer::new_for_http());

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn list_activities(State(store): State<ActivityStore>) -> Json<Catalog> {
    Json(store.list_all().await)
}

async fn signup(
    State(store): State<ActivityStore>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    match store.add_participant(&activity_name, &email).await {
        Ok(_) => {
            info!(activity = %activity_name, email = %email, "Signed up");
            Ok(Json(MessageResponse::signed_up(&email, &activity_name)))
        }
        Err(err) => {
            warn!(activity = %activity_name, email = %email, error = %err, "Signup rejected");
            Err(err.into())
        }
    }
}

async fn unregister(
    State(store): State<ActivityStore>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    match store.remove_participant(&activity_name, &email).await {
        Ok(_) => {
            info!(activity = %activity_name, email = %email, "Unregistered");
            Ok(Json(MessageResponse::unregistered(&email, &activity_name)))
        }
        Err(err) => {
            warn!(activity = %activity_name, email = %email, error = %err, "Unregister rejected");
            Err(err.into())
        }
    }
}
