pub mod face_hider;
pub mod mock_face_hider;
pub mod mock_hide_use_case;
pub mod remote_face_hider;
