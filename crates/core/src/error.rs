use crate::types::DbId;

/// Domain error kinds shared by the resource managers.
///
/// The HTTP layer maps these onto status codes: `NotFound` becomes 404,
/// `Internal` becomes a generic 500, everything else is a 400 with a
/// human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("a person named '{0}' already exists")]
    DuplicateName(String),

    #[error("a camera with address '{0}' already exists")]
    DuplicateAddress(String),

    #[error("invalid parameter(s): {0}")]
    InvalidParameter(String),

    #[error("no recognized field(s) submitted")]
    NoChange,

    #[error("internal error: {0}")]
    Internal(String),
}
