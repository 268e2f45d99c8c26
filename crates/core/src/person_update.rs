//! Partial-update planning for person records.
//!
//! A person PUT may change `name`, `full_name`, and/or the image file, and
//! the stored image must follow: a name change renames the file, a new
//! upload replaces it, and a simultaneous name change plus upload removes
//! the old file and writes the new one under the new name. The planner is
//! a pure function from the current row snapshot and the submitted fields
//! to an [`UpdatePlan`]; the resource manager executes the plan against the
//! image store and the database.

use crate::error::CoreError;
use crate::image_store::{is_allowed_extension, UploadedImage};

/// Fields submitted in a person PUT, after boundary filtering.
///
/// `name` and `full_name` are `Some` only when a non-empty value was
/// submitted. `file` carries the raw upload if any part named `file` was
/// present; the planner decides whether it counts.
#[derive(Debug, Default)]
pub struct SubmittedFields {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub file: Option<UploadedImage>,
}

/// The image-file operation a person update requires.
#[derive(Debug)]
pub enum PictureOp {
    /// Leave the stored file untouched.
    Keep,
    /// Move the existing file to the new name's filename.
    Rename { from: String, under_name: String },
    /// Write the upload under the given (unchanged) name, replacing in place.
    Save {
        under_name: String,
        image: UploadedImage,
    },
    /// Delete the old file, then write the upload under the new name.
    RemoveThenSave {
        remove: Option<String>,
        under_name: String,
        image: UploadedImage,
    },
}

/// The computed update: which columns change, and what happens on disk.
///
/// The final `picture` column value depends on executing [`PictureOp`], so
/// it is not part of the plan itself.
#[derive(Debug)]
pub struct UpdatePlan {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub picture: PictureOp,
}

/// Compute the update set for a person PUT.
///
/// Field precedence:
/// 1. `name` present: the name column changes. If the stored image file
///    exists on disk and no new upload is in this request, the file is
///    renamed to match.
/// 2. `full_name` present: the column changes.
/// 3. upload present (non-empty filename of an allowed kind): without a
///    name change the upload replaces the file under the existing name;
///    with one, the old file is removed and the upload is written under
///    the new name. The rename in step 1 is suppressed in that case, since
///    the file it would move is about to be replaced anyway.
///
/// Fails with [`CoreError::NoChange`] when nothing counts as present.
pub fn plan_person_update(
    current_name: &str,
    current_picture: Option<&str>,
    picture_on_disk: bool,
    submitted: SubmittedFields,
) -> Result<UpdatePlan, CoreError> {
    let file = submitted
        .file
        .filter(|f| !f.filename.is_empty() && is_allowed_extension(&f.filename));

    if submitted.name.is_none() && submitted.full_name.is_none() && file.is_none() {
        return Err(CoreError::NoChange);
    }

    let picture = match (&submitted.name, file) {
        (Some(new_name), Some(image)) => PictureOp::RemoveThenSave {
            remove: current_picture.map(str::to_string),
            under_name: new_name.clone(),
            image,
        },
        (None, Some(image)) => PictureOp::Save {
            under_name: current_name.to_string(),
            image,
        },
        (Some(new_name), None) => match current_picture {
            Some(old) if picture_on_disk => PictureOp::Rename {
                from: old.to_string(),
                under_name: new_name.clone(),
            },
            _ => PictureOp::Keep,
        },
        (None, None) => PictureOp::Keep,
    };

    Ok(UpdatePlan {
        name: submitted.name,
        full_name: submitted.full_name,
        picture,
    })
}
