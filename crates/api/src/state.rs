use std::sync::Arc;

use sentra_core::image_store::ImageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sentra_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image store for uploaded person pictures.
    pub images: Arc<ImageStore>,
}
