/// A transport-neutral snapshot of an HTTP response: status, declared
/// content type and the full body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Lower-cased content type, empty when absent.
    pub fn content_type_lower(&self) -> String {
        self.content_type
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }

    /// Content type without parameters, e.g. `image/png` from `image/png; q=1`.
    pub fn media_type(&self) -> String {
        self.content_type_lower()
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
