//! Handlers for the `/persons` resource.
//!
//! A person row and its image file move together: create writes both,
//! update renames or replaces the file to follow the row, delete removes
//! the row and then the file. There is no rollback between the two — a
//! failure after the file write but before the row write (or the reverse)
//! leaves them out of step until the next successful write.

use std::path::Path as FsPath;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use sentra_core::error::CoreError;
use sentra_core::person_update::{plan_person_update, PictureOp, SubmittedFields};
use sentra_core::types::DbId;
use sentra_db::models::person::{CreatePerson, Person, PersonChanges};
use sentra_db::repositories::PersonRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::form::FormFields;
use crate::response::MessageResponse;
use crate::state::AppState;

/// `GET /persons` response body.
#[derive(Debug, Serialize)]
pub struct PersonList {
    pub total: i64,
    pub persons: Vec<Person>,
}

/// `GET /persons/{id}` response body.
#[derive(Debug, Serialize)]
pub struct PersonEnvelope {
    pub person: Person,
}

/// GET /persons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<PersonList>> {
    let persons = PersonRepo::list(&state.pool).await?;
    let total = PersonRepo::count(&state.pool).await?;
    Ok(Json(PersonList { total, persons }))
}

/// GET /persons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonEnvelope>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(PersonEnvelope { person }))
}

/// POST /persons
///
/// Multipart form: `name`, `full_name`, `file`. The duplicate-name check
/// deliberately runs before the presence checks; the check order is part
/// of the endpoint's contract.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let form = FormFields::read(multipart).await?;

    let name = form.text("name").unwrap_or("");
    if PersonRepo::find_by_name(&state.pool, name).await?.is_some() {
        return Err(CoreError::DuplicateName(name.to_string()).into());
    }

    if name.is_empty() {
        return Err(CoreError::Validation("name is required".into()).into());
    }
    let full_name = form
        .nonempty("full_name")
        .ok_or_else(|| CoreError::Validation("full_name is required".into()))?;
    let file = form
        .file
        .as_ref()
        .filter(|f| !f.filename.is_empty())
        .ok_or_else(|| CoreError::Validation("an image file is required".into()))?;

    // Save rejects disallowed extensions before touching the disk.
    let picture = state.images.save(name, &file.filename, &file.bytes).await?;

    let input = CreatePerson {
        name: name.to_string(),
        full_name,
        created_at: Utc::now(),
        picture: picture.to_string_lossy().into_owned(),
    };
    PersonRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("person created")),
    ))
}

/// PUT /persons/{id}
///
/// Multipart form with any of `name`, `full_name`, `file`. Unrecognized
/// fields are rejected outright; the accepted fields feed the update
/// planner, which decides the image-file operation (see
/// [`sentra_core::person_update`]).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MessageResponse>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;

    let form = FormFields::read(multipart).await?;
    let unknown = form.unknown_keys(&["name", "full_name", "file"]);
    if !unknown.is_empty() {
        return Err(CoreError::InvalidParameter(unknown.join(", ")).into());
    }

    let picture_on_disk = match person.picture.as_deref() {
        Some(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
        None => false,
    };

    let submitted = SubmittedFields {
        name: form.nonempty("name"),
        full_name: form.nonempty("full_name"),
        file: form.file,
    };
    let plan = plan_person_update(
        &person.name,
        person.picture.as_deref(),
        picture_on_disk,
        submitted,
    )?;

    let new_picture = match plan.picture {
        PictureOp::Keep => None,
        PictureOp::Rename { from, under_name } => Some(
            state
                .images
                .rename(FsPath::new(&from), &under_name)
                .await?,
        ),
        PictureOp::Save { under_name, image } => Some(
            state
                .images
                .save(&under_name, &image.filename, &image.bytes)
                .await?,
        ),
        PictureOp::RemoveThenSave {
            remove,
            under_name,
            image,
        } => {
            if let Some(old) = remove {
                state.images.remove(FsPath::new(&old)).await?;
            }
            Some(
                state
                    .images
                    .save(&under_name, &image.filename, &image.bytes)
                    .await?,
            )
        }
    };

    let changes = PersonChanges {
        name: plan.name,
        full_name: plan.full_name,
        picture: new_picture.map(|p| p.to_string_lossy().into_owned()),
    };
    PersonRepo::update_fields(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;

    Ok(Json(MessageResponse::new("person updated")))
}

/// DELETE /persons/{id}
///
/// Removes the row, then best-effort removes the image file; a missing or
/// unremovable file never fails the delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;

    let deleted = PersonRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Person",
            id,
        }
        .into());
    }

    if let Some(picture) = &person.picture {
        if let Err(err) = state.images.remove(FsPath::new(picture)).await {
            tracing::warn!(error = %err, person_id = id, "failed to remove image after delete");
        }
    }

    Ok(Json(MessageResponse::new("person deleted")))
}
