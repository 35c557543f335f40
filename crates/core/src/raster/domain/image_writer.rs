use std::path::Path;

use crate::shared::data_url::DataUrl;

/// Persists a displayable result image.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, image: &DataUrl) -> Result<(), Box<dyn std::error::Error>>;
}
