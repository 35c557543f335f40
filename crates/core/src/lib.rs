pub mod masking;
pub mod pipeline;
pub mod raster;
pub mod remote;
pub mod session;
pub mod shared;
pub mod validation;
