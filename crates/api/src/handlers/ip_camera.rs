//! Handlers for the `/ip-camera` resource.
//!
//! Cameras have no file association; this is plain row CRUD with a
//! duplicate-address fast path backed by the unique constraint.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use sentra_core::error::CoreError;
use sentra_core::types::DbId;
use sentra_db::models::ip_camera::{CreateIpCamera, IpCamera, IpCameraChanges};
use sentra_db::repositories::IpCameraRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::form::FormFields;
use crate::response::MessageResponse;
use crate::state::AppState;

/// `GET /ip-camera` response body.
#[derive(Debug, Serialize)]
pub struct IpCameraList {
    pub ip_camera: Vec<IpCamera>,
}

/// `GET /ip-camera/{id}` response body.
#[derive(Debug, Serialize)]
pub struct IpCameraEnvelope {
    pub ip_camera: IpCamera,
}

/// GET /ip-camera
pub async fn list(State(state): State<AppState>) -> AppResult<Json<IpCameraList>> {
    let cameras = IpCameraRepo::list(&state.pool).await?;
    Ok(Json(IpCameraList { ip_camera: cameras }))
}

/// GET /ip-camera/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<IpCameraEnvelope>> {
    let camera = IpCameraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IpCamera",
            id,
        }))?;
    Ok(Json(IpCameraEnvelope { ip_camera: camera }))
}

/// POST /ip-camera
///
/// Multipart form: `name`, `ip_address`. Checked in order: both fields
/// non-empty, no stray fields, address not already registered.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let form = FormFields::read(multipart).await?;

    let (Some(name), Some(ip_address)) = (form.nonempty("name"), form.nonempty("ip_address"))
    else {
        return Err(CoreError::Validation("name and ip_address are required".into()).into());
    };

    let unknown = form.unknown_keys(&["name", "ip_address"]);
    if !unknown.is_empty() {
        return Err(CoreError::InvalidParameter(unknown.join(", ")).into());
    }

    if IpCameraRepo::find_by_address(&state.pool, &ip_address)
        .await?
        .is_some()
    {
        return Err(CoreError::DuplicateAddress(ip_address).into());
    }

    IpCameraRepo::create(&state.pool, &CreateIpCamera { name, ip_address }).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("camera created")),
    ))
}

/// PUT /ip-camera/{id}
///
/// Multipart form with any of `name`, `ip_address`. An update resolving to
/// zero fields is rejected rather than issuing an empty SET clause.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    IpCameraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IpCamera",
            id,
        }))?;

    let form = FormFields::read(multipart).await?;
    let unknown = form.unknown_keys(&["name", "ip_address"]);
    if !unknown.is_empty() {
        return Err(CoreError::InvalidParameter(unknown.join(", ")).into());
    }

    let changes = IpCameraChanges {
        name: form.nonempty("name"),
        ip_address: form.nonempty("ip_address"),
    };
    if changes.is_empty() {
        return Err(CoreError::NoChange.into());
    }

    IpCameraRepo::update_fields(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IpCamera",
            id,
        }))?;

    Ok(Json(MessageResponse::new("camera updated")))
}

/// DELETE /ip-camera/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = IpCameraRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "IpCamera",
            id,
        }
        .into());
    }
    Ok(Json(MessageResponse::new("camera deleted")))
}
