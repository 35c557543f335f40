pub mod api_response;
pub mod face_hide_client;
pub mod result_parser;
