//! Request handlers, one submodule per resource.
//!
//! Each submodule owns validation and persistence orchestration for its
//! entity type: handlers extract the form, apply the validation rules,
//! delegate persistence to the repositories in `sentra_db` (and, for
//! persons, the image store), and map failures via [`crate::error::AppError`].

pub mod ip_camera;
pub mod persons;
