//! Pseudo image upload.
//!
//! [`PlaceholderUploader`] deliberately does not read or upload the selected
//! file's bytes; every selection maps to the one fixed
//! [`PLACEHOLDER_IMAGE_URL`]. A real upload integration replaces it behind
//! the [`ImageUploader`] trait without touching the form controller.

use async_trait::async_trait;

use crate::controller::FormController;

/// Fixed URL substituted for any selected file.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=School";

/// Notification shown after an image is attached to the form.
pub const IMAGE_ATTACHED_MESSAGE: &str = "Image uploaded successfully";

/// Notification shown when an upload fails.
pub const IMAGE_FAILED_MESSAGE: &str = "Image upload failed";

/// A file-picker event. Only the presence of a selection matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    /// Name of the chosen file, if one was chosen.
    pub file_name: Option<String>,
}

impl FileSelection {
    /// A selection carrying a file.
    pub fn of(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
        }
    }

    /// The picker was dismissed without choosing a file.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Errors surfaced by an uploader implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("Image upload failed: {reason}")]
    Failed { reason: String },
}

/// Turns a file selection into a hosted image URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Resolve a selection to an image URL.
    ///
    /// `Ok(None)` means no file was selected and nothing should change.
    async fn upload(&self, selection: &FileSelection) -> Result<Option<String>, UploadError>;
}

/// Stand-in uploader that maps every selected file to
/// [`PLACEHOLDER_IMAGE_URL`] without reading its bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderUploader;

#[async_trait]
impl ImageUploader for PlaceholderUploader {
    async fn upload(&self, selection: &FileSelection) -> Result<Option<String>, UploadError> {
        match &selection.file_name {
            Some(name) => {
                tracing::debug!(file_name = %name, "Substituting placeholder image URL");
                Ok(Some(PLACEHOLDER_IMAGE_URL.to_string()))
            }
            None => Ok(None),
        }
    }
}

/// Run an upload for a picker event and attach the result to the form.
///
/// On success the image field is overwritten and a success notification
/// fires. On failure the form is left untouched and an error notification
/// fires. A no-file selection does nothing.
pub async fn attach_image<U>(controller: &FormController, uploader: &U, selection: &FileSelection)
where
    U: ImageUploader + ?Sized,
{
    match uploader.upload(selection).await {
        Ok(Some(url)) => {
            controller.set_image(url);
            controller.notifier().notify_success(IMAGE_ATTACHED_MESSAGE);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "Image upload failed");
            controller.notifier().notify_error(IMAGE_FAILED_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn any_file_maps_to_the_placeholder_url() {
        let uploader = PlaceholderUploader;
        for file in ["logo.png", "campus.jpg", "not-even-an-image.pdf"] {
            let url = uploader
                .upload(&FileSelection::of(file))
                .await
                .expect("placeholder upload cannot fail");
            assert_eq!(url.as_deref(), Some(PLACEHOLDER_IMAGE_URL));
        }
    }

    #[tokio::test]
    async fn no_selection_yields_nothing() {
        let uploader = PlaceholderUploader;
        let url = uploader
            .upload(&FileSelection::none())
            .await
            .expect("placeholder upload cannot fail");
        assert_eq!(url, None);
    }
}
