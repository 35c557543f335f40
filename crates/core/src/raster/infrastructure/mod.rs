pub mod image_codec;
pub mod result_file_writer;
