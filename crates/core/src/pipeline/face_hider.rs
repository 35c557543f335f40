use crate::shared::data_url::DataUrl;
use crate::shared::face_hide_error::FaceHideError;
use crate::shared::hide_mode::HideMode;
use crate::shared::image_file::ImageFile;

/// Produces a face-hidden version of `target`, using `face` as the reference.
pub trait FaceHider: Send {
    fn hide(
        &self,
        face: &ImageFile,
        target: &ImageFile,
        mode: HideMode,
    ) -> Result<DataUrl, FaceHideError>;
}
