use std::time::Duration;

use crate::shared::hide_mode::HideMode;

pub const API_URL: &str = "https://api-serve-facehide.onrender.com/api/face-hide";

pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Value for a file picker `accept` filter.
pub const INPUT_ACCEPT: &str = "image/jpeg,image/png,image/webp,.jpg,.jpeg,.png,.webp";

pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub const ACCEPTED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

pub const DEFAULT_MODE: HideMode = HideMode::Box;

/// Artificial latency of the mock path.
pub const MOCK_DELAY: Duration = Duration::from_millis(1200);

/// Longest side of the working raster; larger inputs are scaled down, never up.
pub const MAX_PROCESSING_DIMENSION: u32 = 1800;

pub const WATERMARK_TEXT: &str = "MOCK RESULT";

pub const DOWNLOAD_PREFIX: &str = "face-hider-result-";

/// Longest excerpt of an error body quoted back to the user.
pub const ERROR_EXCERPT_CHARS: usize = 160;
