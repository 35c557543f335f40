pub mod image_validator;
