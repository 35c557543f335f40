use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::shared::image_file::ImageFile;

/// A temporary on-disk copy of a selected upload, used to show a preview.
///
/// The backing file is deleted when the handle is dropped, so each preview
/// is released exactly once: when its slot is replaced or cleared, or when
/// the owning session goes away.
#[derive(Debug)]
pub struct PreviewHandle {
    file: NamedTempFile,
}

impl PreviewHandle {
    pub fn create(image: &ImageFile) -> std::io::Result<Self> {
        let suffix = Path::new(image.name())
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        let mut file = tempfile::Builder::new()
            .prefix("face-hider-preview-")
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(image.bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
