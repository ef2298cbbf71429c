//! Placeholder icon generation for browser extensions.
//!
//! [`icon_gen::generate_all`] draws a solid square with a centered circle for
//! every configured size and writes each one as `icon-{size}.png`.

pub mod config;
pub mod error;
pub mod icon_gen;
pub mod manifest;
pub mod raster;
pub mod verify;

pub use config::IconConfig;
pub use error::IconError;
pub use icon_gen::{generate_all, GenerationReport, Progress};
