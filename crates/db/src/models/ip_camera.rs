//! IP camera entity model and DTOs.

use sentra_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ip_camera` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IpCamera {
    pub id: DbId,
    pub name: String,
    pub ip_address: String,
}

/// DTO for inserting a new camera.
#[derive(Debug, Clone)]
pub struct CreateIpCamera {
    pub name: String,
    pub ip_address: String,
}

/// Partial-update column set; the repository writes exactly the `Some` fields.
#[derive(Debug, Clone, Default)]
pub struct IpCameraChanges {
    pub name: Option<String>,
    pub ip_address: Option<String>,
}

impl IpCameraChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ip_address.is_none()
    }
}
