//! Image preview derivation.

/// Derived view state for the image preview pane.
///
/// There is no state machine here beyond "empty" vs "non-empty", and no
/// check that the URL actually resolves to an image. A broken link simply
/// renders as a broken image in the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePreview {
    /// No image URL is set; the pane is not rendered.
    Hidden,
    /// Render this URL as the preview source.
    Visible(String),
}

impl ImagePreview {
    /// Derive the preview state from the current image field value.
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            Self::Hidden
        } else {
            Self::Visible(value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_hides_the_preview() {
        assert_eq!(ImagePreview::from_value(""), ImagePreview::Hidden);
    }

    #[test]
    fn non_empty_value_shows_the_preview() {
        assert_eq!(
            ImagePreview::from_value("https://example.com/a.png"),
            ImagePreview::Visible("https://example.com/a.png".into())
        );
    }
}
