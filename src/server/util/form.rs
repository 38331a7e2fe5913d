use std::collections::HashMap;

use axum::extract::Multipart;

use crate::server::{error::AppError, model::upload::UploadedFile};

/// A multipart form read fully into memory.
///
/// Text parts and file parts are kept apart so that a text value sent under a file field
/// name is never mistaken for an upload.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Reads every part of the request.
    ///
    /// File parts sent without a file name (an empty file input) are skipped. When a name
    /// repeats, the last part wins.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field.bytes().await?;
                    if !file_name.is_empty() {
                        form.files
                            .insert(name, UploadedFile::new(file_name, bytes.to_vec()));
                    }
                }
                None => {
                    let text = field.text().await?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Returns a text field, treating an empty value as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).filter(|v| !v.is_empty()).cloned()
    }

    /// Takes the uploaded file sent under `name`, if any.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

#[cfg(test)]
impl MultipartForm {
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_file(mut self, name: &str, file: UploadedFile) -> Self {
        self.files.insert(name.to_string(), file);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_absent() {
        let form = MultipartForm::default()
            .with_text("title", "")
            .with_text("location", "Denver");

        assert_eq!(form.text("title"), None);
        assert_eq!(form.text("location").as_deref(), Some("Denver"));
        assert_eq!(form.text("date"), None);
    }

    #[test]
    fn file_is_taken_once() {
        let mut form =
            MultipartForm::default().with_file("image", UploadedFile::new("a.jpg", vec![1]));

        assert!(form.take_file("image").is_some());
        assert!(form.take_file("image").is_none());
    }
}
