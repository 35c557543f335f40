pub mod http_face_hide_client;
