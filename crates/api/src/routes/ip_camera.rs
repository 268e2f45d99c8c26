//! Route definitions for the `/ip-camera` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ip_camera;
use crate::state::AppState;

/// Routes mounted at `/ip-camera`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ip_camera::list).post(ip_camera::create))
        .route(
            "/{id}",
            get(ip_camera::get_by_id)
                .put(ip_camera::update)
                .delete(ip_camera::delete),
        )
}
