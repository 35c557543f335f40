use std::path::Path;

use crate::raster::domain::image_writer::ImageWriter;
use crate::shared::data_url::DataUrl;

/// Writes the decoded bytes of a result data URL to disk, unchanged.
pub struct ResultFileWriter;

impl ResultFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResultFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ResultFileWriter {
    fn write(&self, path: &Path, image: &DataUrl) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = image.decode()?;
        std::fs::write(path, bytes)?;
        log::debug!("Wrote {} ({})", path.display(), image.mime_type());
        Ok(())
    }
}
