pub mod routes;

use std::path::Path;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityDirectory;
use routes::{activities, root};

/// Builds the full application router around `directory`.
pub fn build_router(directory: ActivityDirectory, static_dir: impl AsRef<Path>) -> Router {
    let app = Router::new()
        .route("/", get(root::root_handler))
        .route("/health", get(root::health_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .with_state(directory);
    with_response_layers(app)
}

/// Wraps `router` in the layers every response goes through. Panics become
/// 500s inside the header layer, so they are marked `no-store` too.
pub fn with_response_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        // Rosters change on every signup; never let a browser cache them.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}
