use crate::remote::domain::api_response::ApiResponse;
use crate::shared::hide_mode::HideMode;
use crate::shared::image_file::ImageFile;

/// Sends one face-hide request and returns the raw response.
///
/// Only transport failures are errors here; HTTP error statuses come back
/// as ordinary responses for the parser to reject.
pub trait FaceHideClient: Send {
    fn send(
        &self,
        face: &ImageFile,
        target: &ImageFile,
        mode: HideMode,
    ) -> Result<ApiResponse, Box<dyn std::error::Error>>;
}
