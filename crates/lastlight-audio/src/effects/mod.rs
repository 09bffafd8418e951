//! Spatial and texture effects applied after synthesis.

pub mod fade;
pub mod reverb;
pub mod stereo;
