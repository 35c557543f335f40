use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::remote::domain::api_response::ApiResponse;
use crate::remote::domain::face_hide_client::FaceHideClient;
use crate::shared::hide_mode::HideMode;
use crate::shared::image_file::ImageFile;

/// Blocking multipart client for the face-hide endpoint.
///
/// Uses the transport's default timeouts; a request cannot be cancelled
/// once sent.
pub struct HttpFaceHideClient {
    client: Client,
    url: String,
}

impl HttpFaceHideClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn file_part(file: &ImageFile) -> Result<Part, reqwest::Error> {
    let part = Part::bytes(file.bytes().to_vec()).file_name(file.name().to_string());
    if file.mime_type().is_empty() {
        Ok(part)
    } else {
        part.mime_str(file.mime_type())
    }
}

/// Multipart body with `face_image`, `target_image` and `mode` parts.
pub fn build_form(
    face: &ImageFile,
    target: &ImageFile,
    mode: HideMode,
) -> Result<Form, reqwest::Error> {
    Ok(Form::new()
        .part("face_image", file_part(face)?)
        .part("target_image", file_part(target)?)
        .text("mode", mode.as_str()))
}

impl FaceHideClient for HttpFaceHideClient {
    fn send(
        &self,
        face: &ImageFile,
        target: &ImageFile,
        mode: HideMode,
    ) -> Result<ApiResponse, Box<dyn std::error::Error>> {
        let form = build_form(face, target, mode)?;
        log::info!("POST {} (mode={mode})", self.url);

        let response = self.client.post(&self.url).multipart(form).send()?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();
        log::info!(
            "API responded {status} ({}, {} bytes)",
            content_type.as_deref().unwrap_or("no content type"),
            body.len()
        );

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}
