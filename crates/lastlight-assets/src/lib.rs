//! Last Light Odyssey Asset Catalog
//!
//! One composer function per shipped audio asset, plus the catalog that
//! maps asset names to output paths, formats, and sample rates. The game
//! set (music and tactical SFX) renders at 22050 Hz to WAV; the scene set
//! renders at 44100 Hz and ships as MP3.
//!
//! Every composer is deterministic: it receives a PCG32 stream derived
//! from the base seed and the asset's catalog name.

pub mod alarms;
pub mod catalog;
pub mod combat;
pub mod movement;
pub mod music;
pub mod scenes;
mod support;
pub mod ui;

pub use catalog::{AssetSpec, Category, OutputKind, BASE_SEED, CATALOG};
