use std::fmt;
use std::path::Path;

use crate::session::preview::PreviewHandle;
use crate::shared::image_file::ImageFile;
use crate::validation::image_validator::ValidationError;

/// Which of the two uploads a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Face,
    Target,
}

impl SlotRole {
    pub const ALL: &[SlotRole] = &[SlotRole::Face, SlotRole::Target];

    pub fn title(self) -> &'static str {
        match self {
            SlotRole::Face => "Face to Hide",
            SlotRole::Target => "Target Image",
        }
    }

    /// Multipart field name for this upload.
    pub fn field_name(self) -> &'static str {
        match self {
            SlotRole::Face => "face_image",
            SlotRole::Target => "target_image",
        }
    }
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotRole::Face => write!(f, "face"),
            SlotRole::Target => write!(f, "target"),
        }
    }
}

/// State of one upload slot. A rejected file never becomes the slot's file.
///
/// A rejection after a valid selection keeps that selection and records the
/// reason next to it.
#[derive(Debug, Default)]
pub enum UploadSlot {
    #[default]
    Empty,
    Selected {
        file: ImageFile,
        preview: PreviewHandle,
        error: Option<ValidationError>,
    },
    Invalid {
        reason: ValidationError,
    },
}

impl UploadSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, UploadSlot::Empty)
    }

    pub fn file(&self) -> Option<&ImageFile> {
        match self {
            UploadSlot::Selected { file, .. } => Some(file),
            _ => None,
        }
    }

    pub fn preview_path(&self) -> Option<&Path> {
        match self {
            UploadSlot::Selected { preview, .. } => Some(preview.path()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            UploadSlot::Invalid { reason } => Some(reason),
            UploadSlot::Selected { error, .. } => error.as_ref(),
            UploadSlot::Empty => None,
        }
    }

    /// Records a rejected file. An existing selection stays active.
    pub fn reject(&mut self, reason: ValidationError) {
        match self {
            UploadSlot::Selected { error, .. } => *error = Some(reason),
            _ => *self = UploadSlot::Invalid { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let slot = UploadSlot::default();
        assert!(slot.is_empty());
        assert!(slot.file().is_none());
        assert!(slot.preview_path().is_none());
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_selected_exposes_file_and_preview() {
        let file = ImageFile::new("face.png", "image/png", vec![7]);
        let preview = PreviewHandle::create(&file).unwrap();
        let slot = UploadSlot::Selected {
            file: file.clone(),
            preview,
            error: None,
        };
        assert_eq!(slot.file(), Some(&file));
        assert!(slot.preview_path().unwrap().exists());
        assert!(slot.error().is_none());
    }

    #[test]
    fn test_invalid_exposes_only_reason() {
        let slot = UploadSlot::Invalid {
            reason: ValidationError::TooLarge,
        };
        assert!(slot.file().is_none());
        assert_eq!(slot.error(), Some(&ValidationError::TooLarge));
    }

    #[test]
    fn test_reject_on_empty_slot_is_invalid() {
        let mut slot = UploadSlot::Empty;
        slot.reject(ValidationError::InvalidFormat);
        assert!(slot.file().is_none());
        assert_eq!(slot.error(), Some(&ValidationError::InvalidFormat));
    }

    #[test]
    fn test_reject_keeps_selected_file_and_preview() {
        let file = ImageFile::new("face.png", "image/png", vec![7]);
        let preview = PreviewHandle::create(&file).unwrap();
        let mut slot = UploadSlot::Selected {
            file: file.clone(),
            preview,
            error: None,
        };
        slot.reject(ValidationError::TooLarge);

        assert_eq!(slot.file(), Some(&file));
        assert!(slot.preview_path().unwrap().exists());
        assert_eq!(slot.error(), Some(&ValidationError::TooLarge));
    }

    #[test]
    fn test_role_names() {
        assert_eq!(SlotRole::Face.to_string(), "face");
        assert_eq!(SlotRole::Target.field_name(), "target_image");
    }
}
