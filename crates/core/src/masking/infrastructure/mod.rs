pub mod blur_masker;
pub mod box_masker;
mod gaussian;
pub mod masker_factory;
pub mod overlay;
pub mod pixelate_masker;
