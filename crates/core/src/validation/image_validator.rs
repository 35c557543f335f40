use thiserror::Error;

use crate::shared::constants::{ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES, MAX_FILE_SIZE_BYTES};
use crate::shared::image_file::ImageFile;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid file format. Allowed: jpg, jpeg, png, webp.")]
    InvalidFormat,
    #[error("File is too large. Maximum size is 10MB.")]
    TooLarge,
}

/// Either accepted (`Ok`) or a human-readable rejection reason.
pub type ValidationOutcome = Result<(), ValidationError>;

/// Checks an upload's declared type/extension and size.
///
/// The format check runs first, so an oversized file of the wrong type
/// reports a format error.
pub fn validate_image_file(file: &ImageFile) -> ValidationOutcome {
    if !has_allowed_type(file) {
        return Err(ValidationError::InvalidFormat);
    }
    if file.size() > MAX_FILE_SIZE_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

fn has_allowed_type(file: &ImageFile) -> bool {
    let mime_type = file.mime_type().trim().to_lowercase();
    if !mime_type.is_empty() && ACCEPTED_MIME_TYPES.contains(&mime_type.as_str()) {
        return true;
    }

    let name = file.name().trim().to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn file(name: &str, mime_type: &str, size: usize) -> ImageFile {
        ImageFile::new(name, mime_type, vec![0; size])
    }

    #[rstest]
    #[case("face.jpg", "image/jpeg")]
    #[case("face.png", "image/png")]
    #[case("face.webp", "image/webp")]
    #[case("face", "image/jpg")]
    #[case("FACE.JPEG", "")]
    #[case("scan.PNG", "application/octet-stream")]
    #[case("face.bin", " IMAGE/WEBP ")]
    fn test_accepts_allowed_type_or_extension(#[case] name: &str, #[case] mime: &str) {
        assert_eq!(validate_image_file(&file(name, mime, 100)), Ok(()));
    }

    #[rstest]
    #[case("face.gif", "image/gif")]
    #[case("face.bmp", "")]
    #[case("notes.txt", "text/plain")]
    #[case("face.jpg.exe", "application/x-msdownload")]
    #[case("", "")]
    fn test_rejects_other_formats(#[case] name: &str, #[case] mime: &str) {
        assert_eq!(
            validate_image_file(&file(name, mime, 100)),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_accepts_exactly_at_ceiling() {
        let f = file("face.png", "image/png", MAX_FILE_SIZE_BYTES as usize);
        assert_eq!(validate_image_file(&f), Ok(()));
    }

    #[test]
    fn test_rejects_over_ceiling_even_with_allowed_type() {
        let f = file("face.png", "image/png", MAX_FILE_SIZE_BYTES as usize + 1);
        assert_eq!(validate_image_file(&f), Err(ValidationError::TooLarge));
    }

    #[test]
    fn test_format_checked_before_size() {
        let f = file("face.gif", "image/gif", MAX_FILE_SIZE_BYTES as usize + 1);
        assert_eq!(validate_image_file(&f), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "Invalid file format. Allowed: jpg, jpeg, png, webp."
        );
        assert_eq!(
            ValidationError::TooLarge.to_string(),
            "File is too large. Maximum size is 10MB."
        );
    }
}
