use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("not a base64 image data URL")]
    Malformed,
    #[error("invalid base64 payload: {0}")]
    Base64(String),
}

/// A self-contained `data:<mime>;base64,<payload>` image string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encodes raw bytes under the given MIME type.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime_type};base64,{}", STANDARD.encode(bytes)))
    }

    /// Wraps an already base64-encoded payload without re-encoding it.
    pub fn from_base64(mime_type: &str, payload: &str) -> Self {
        Self(format!("data:{mime_type};base64,{payload}"))
    }

    /// Accepts a string only if it already has a `data:image/<subtype>;base64,` header.
    pub fn parse(value: &str) -> Result<Self, DataUrlError> {
        if header_len(value).is_some() {
            Ok(Self(value.to_string()))
        } else {
            Err(DataUrlError::Malformed)
        }
    }

    pub fn is_image_data_url(value: &str) -> bool {
        header_len(value).is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        let rest = &self.0["data:".len()..];
        rest.split(';').next().unwrap_or_default()
    }

    /// Decodes the payload back into bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        let start = header_len(&self.0).ok_or(DataUrlError::Malformed)?;
        STANDARD
            .decode(self.0[start..].trim())
            .map_err(|e| DataUrlError::Base64(e.to_string()))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length of a valid `data:image/<subtype>;base64,` prefix, if present.
fn header_len(value: &str) -> Option<usize> {
    const PREFIX: &str = "data:image/";
    const MARKER: &str = ";base64,";

    let rest = value.strip_prefix(PREFIX)?;
    let subtype_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(rest.len());
    if subtype_len == 0 || !rest[subtype_len..].starts_with(MARKER) {
        return None;
    }
    Some(PREFIX.len() + subtype_len + MARKER.len())
}
