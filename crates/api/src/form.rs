//! Multipart form extraction.
//!
//! Resource writes arrive as `multipart/form-data`. [`FormFields`] drains
//! the whole body once into an explicit schema — named text fields plus an
//! optional upload under the `file` part — so handlers validate against a
//! concrete value instead of pulling fields out of the request ad hoc.

use axum::extract::Multipart;
use sentra_core::image_store::UploadedImage;

use crate::error::AppError;

/// All fields of a submitted form.
#[derive(Debug, Default)]
pub struct FormFields {
    texts: Vec<(String, String)>,
    /// The part named `file`, if any. An empty filename means the client
    /// submitted the part without selecting a file.
    pub file: Option<UploadedImage>,
}

impl FormFields {
    /// Drain a multipart body. Unreadable parts surface as `BadRequest`.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == "file" {
                let filename = field.file_name().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();
                form.file = Some(UploadedImage { filename, bytes });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.texts.push((name, value));
            }
        }
        Ok(form)
    }

    /// The raw value of a text field, if submitted.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A text field's value, treating an empty submission as absent.
    pub fn nonempty(&self, key: &str) -> Option<String> {
        self.text(key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Field names present in the form but not in `allowed`.
    ///
    /// The upload part counts as the field name `file`, so resources
    /// without a file association reject it like any other stray field.
    pub fn unknown_keys(&self, allowed: &[&str]) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .texts
            .iter()
            .map(|(k, _)| k)
            .filter(|k| !allowed.contains(&k.as_str()))
            .cloned()
            .collect();
        if self.file.is_some() && !allowed.contains(&"file") {
            unknown.push("file".to_string());
        }
        unknown
    }
}
