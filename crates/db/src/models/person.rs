//! Person entity model and DTOs.

use sentra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `person` table.
///
/// `picture` is the filesystem path of the stored image. It is nullable at
/// the schema level but in practice only transiently null during creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub full_name: String,
    pub created_at: Timestamp,
    pub picture: Option<String>,
}

/// DTO for inserting a new person. `created_at` is bound by the caller so
/// the timestamp is set exactly once, at creation.
#[derive(Debug, Clone)]
pub struct CreatePerson {
    pub name: String,
    pub full_name: String,
    pub created_at: Timestamp,
    pub picture: String,
}

/// The column set a partial update writes. `None` means "leave unchanged";
/// the repository builds an UPDATE covering exactly the `Some` fields.
#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub picture: Option<String>,
}

impl PersonChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.full_name.is_none() && self.picture.is_none()
    }
}
