//! Route definitions.
//!
//! Route tree:
//!
//! ```text
//! /health                 health check
//! /persons                list, create
//! /persons/{id}           get, update, delete
//! /ip-camera              list, create
//! /ip-camera/{id}         get, update, delete
//! /static/images/*        uploaded image files (ServeDir)
//! ```

pub mod health;
pub mod ip_camera;
pub mod persons;
