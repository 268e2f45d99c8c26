//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ip_camera_repo;
pub mod person_repo;

pub use ip_camera_repo::IpCameraRepo;
pub use person_repo::PersonRepo;
