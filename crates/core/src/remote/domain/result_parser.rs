use serde_json::Value;

use crate::remote::domain::api_response::ApiResponse;
use crate::shared::data_url::DataUrl;
use crate::shared::face_hide_error::FaceHideError;

const DEFAULT_MIME_TYPE: &str = "image/png";

/// Turns an API response into a displayable image.
///
/// A non-success status fails before the body is looked at. Otherwise a
/// JSON body must carry `image_base64` (and optionally `mime_type`), an
/// `image/*` body is used as-is, and anything else gets one more chance as
/// JSON text before failing as an unexpected format.
pub fn parse_api_response(response: &ApiResponse) -> Result<DataUrl, FaceHideError> {
    if !response.is_success() {
        return Err(FaceHideError::api(response.status, &response.body_text()));
    }

    if response.content_type_lower().contains("application/json") {
        let payload: Value = serde_json::from_slice(&response.body)
            .map_err(|_| FaceHideError::UnexpectedFormat)?;
        return parse_json_payload(&payload);
    }

    let media_type = response.media_type();
    if media_type.starts_with("image/") {
        return Ok(DataUrl::from_bytes(&media_type, &response.body));
    }

    serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|payload| parse_json_payload(&payload).ok())
        .ok_or(FaceHideError::UnexpectedFormat)
}

/// Extracts the image from `{ "image_base64": ..., "mime_type": ... }`.
pub fn parse_json_payload(payload: &Value) -> Result<DataUrl, FaceHideError> {
    let base64 = payload
        .get("image_base64")
        .and_then(Value::as_str)
        .ok_or(FaceHideError::MissingImageData)?;
    let mime_type = payload.get("mime_type").and_then(Value::as_str);
    ensure_data_url(base64, mime_type)
}

/// Passes a complete image data URL through; otherwise prefixes the payload
/// with a data URL header. Non-image MIME types fall back to `image/png`.
fn ensure_data_url(base64: &str, mime_type: Option<&str>) -> Result<DataUrl, FaceHideError> {
    let cleaned = base64.trim();
    if cleaned.is_empty() {
        return Err(FaceHideError::EmptyPayload);
    }
    if let Ok(url) = DataUrl::parse(cleaned) {
        return Ok(url);
    }

    let mime = mime_type
        .filter(|m| m.starts_with("image/"))
        .unwrap_or(DEFAULT_MIME_TYPE);
    Ok(DataUrl::from_base64(mime, cleaned))
}
