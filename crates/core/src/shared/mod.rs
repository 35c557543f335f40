pub mod constants;
pub mod data_url;
pub mod face_hide_error;
pub mod frame;
pub mod hide_mode;
pub mod image_file;
pub mod region;
