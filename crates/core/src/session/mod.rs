pub mod download;
pub mod face_hider_session;
pub mod preview;
pub mod upload_slot;
