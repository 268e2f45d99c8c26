//! Domain logic for the Sentra registry.
//!
//! IO-free policy lives here (error kinds, filename sanitization, the
//! person partial-update planner) together with the image store, which owns
//! the on-disk image lifecycle. HTTP and SQL concerns live in `sentra-api`
//! and `sentra-db` respectively.

pub mod error;
pub mod image_store;
pub mod person_update;
pub mod types;
