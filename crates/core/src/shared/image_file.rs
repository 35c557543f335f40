use std::fs;
use std::path::Path;

/// An uploaded file: declared MIME type, original name and raw bytes.
///
/// The declared type is whatever the source claimed and may be empty or
/// wrong; validation looks at both the type and the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, declaring its MIME type from the extension.
    ///
    /// Unknown extensions get an empty declared type, the way a browser
    /// reports files it cannot classify.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = image::ImageFormat::from_path(path)
            .map(|f| f.to_mime_type().to_string())
            .unwrap_or_default();
        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Human-readable byte count: `512 B`, `1.5 KB`, `2.25 MB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    if bytes < 1024 * 1024 {
        return format!("{:.1} KB", bytes as f64 / 1024.0);
    }
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_path_reads_name_type_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.PNG");
        fs::write(&path, b"not really a png").unwrap();

        let file = ImageFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "portrait.PNG");
        assert_eq!(file.mime_type(), "image/png");
        assert_eq!(file.size(), 16);
    }

    #[test]
    fn test_from_path_unknown_extension_has_empty_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();

        let file = ImageFile::from_path(&path).unwrap();
        assert_eq!(file.mime_type(), "");
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        assert!(ImageFile::from_path(Path::new("/nonexistent/face.jpg")).is_err());
    }

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1536, "1.5 KB")]
    #[case(10 * 1024 * 1024, "10.00 MB")]
    fn test_format_bytes(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_bytes(bytes), expected);
    }
}
