#![forbid(unsafe_code)]

//! Headless pedigree layout.
//!
//! [`compute_layout`] turns a [`pigeon_core::PedigreeTree`] and a [`LayoutConfiguration`] into
//! absolute box rectangles, connector segments and box text. Drawing is left to the caller;
//! [`svg::render_pedigree_debug_svg`] is a small reference renderer over the same model.

pub mod config;
mod content;
mod geometry;
pub mod model;
pub mod pedigree;
pub mod svg;

pub use config::{
    BoxContent, BoxField, CustomGeometry, GenerationLines, LayoutConfiguration, PedigreeStyle,
    SubjectMode,
};
pub use model::{PedigreeLayout, SlotLayout};
pub use pedigree::compute_layout;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid layout configuration: {message}")]
    InvalidConfig { message: String },
    #[error("invalid drawing area: {message}")]
    InvalidArea { message: String },
    #[error("layout configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout configuration YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
