use crate::pipeline::face_hider::FaceHider;
use crate::remote::domain::face_hide_client::FaceHideClient;
use crate::remote::domain::result_parser::parse_api_response;
use crate::shared::data_url::DataUrl;
use crate::shared::face_hide_error::FaceHideError;
use crate::shared::hide_mode::HideMode;
use crate::shared::image_file::ImageFile;

/// [`FaceHider`] backed by the remote API: send, then parse the response.
pub struct RemoteFaceHider {
    client: Box<dyn FaceHideClient>,
}

impl RemoteFaceHider {
    pub fn new(client: Box<dyn FaceHideClient>) -> Self {
        Self { client }
    }
}

impl FaceHider for RemoteFaceHider {
    fn hide(
        &self,
        face: &ImageFile,
        target: &ImageFile,
        mode: HideMode,
    ) -> Result<DataUrl, FaceHideError> {
        let response = self
            .client
            .send(face, target, mode)
            .map_err(|e| FaceHideError::Transport(e.to_string()))?;
        parse_api_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::domain::api_response::ApiResponse;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubClient {
        response: Result<ApiResponse, String>,
        calls: Arc<Mutex<Vec<(String, String, HideMode)>>>,
    }

    impl StubClient {
        fn new(response: Result<ApiResponse, String>) -> Self {
            Self {
                response,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl FaceHideClient for StubClient {
        fn send(
            &self,
            face: &ImageFile,
            target: &ImageFile,
            mode: HideMode,
        ) -> Result<ApiResponse, Box<dyn std::error::Error>> {
            self.calls.lock().unwrap().push((
                face.name().to_string(),
                target.name().to_string(),
                mode,
            ));
            self.response.clone().map_err(|e| e.into())
        }
    }

    // --- Helpers ---

    fn files() -> (ImageFile, ImageFile) {
        (
            ImageFile::new("face.png", "image/png", vec![1]),
            ImageFile::new("target.jpg", "image/jpeg", vec![2]),
        )
    }

    // --- Tests ---

    #[test]
    fn test_sends_both_files_and_mode() {
        let client = StubClient::new(Ok(ApiResponse::new(200, Some("image/png"), vec![0])));
        let calls = client.calls.clone();
        let (face, target) = files();

        RemoteFaceHider::new(Box::new(client))
            .hide(&face, &target, HideMode::Pixelate)
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("face.png".to_string(), "target.jpg".to_string(), HideMode::Pixelate)]
        );
    }

    #[test]
    fn test_parses_json_response() {
        let body = r#"{"image_base64":"iVBORw0KGgo=","mime_type":"image/png"}"#;
        let client = StubClient::new(Ok(ApiResponse::new(200, Some("application/json"), body)));
        let (face, target) = files();

        let url = RemoteFaceHider::new(Box::new(client))
            .hide(&face, &target, HideMode::Box)
            .unwrap();
        assert_eq!(url.as_str(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_transport_failure() {
        let client = StubClient::new(Err("connection refused".to_string()));
        let (face, target) = files();

        let err = RemoteFaceHider::new(Box::new(client))
            .hide(&face, &target, HideMode::Box)
            .unwrap_err();
        assert_eq!(err, FaceHideError::Transport("connection refused".to_string()));
    }

    #[test]
    fn test_http_error_status() {
        let client = StubClient::new(Ok(ApiResponse::new(500, None, "server error")));
        let (face, target) = files();

        let err = RemoteFaceHider::new(Box::new(client))
            .hide(&face, &target, HideMode::Box)
            .unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("server error"));
    }
}
