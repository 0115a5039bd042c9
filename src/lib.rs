//! qrlogo - QR code generator with a centered logo overlay
//!
//! This crate encodes a URL as a QR symbol at error-correction level H and
//! composites a user-supplied logo into its center, behind a white backing
//! circle, so the code stays scannable. It ships a single-page web UI and a
//! one-shot CLI mode.

pub mod cli;
pub mod core;
pub mod render;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{EccLevel, EncodeRequest, ServerInfo},
};

pub use crate::render::{
    circle_radius, encode, generate_composite, logo_target_size, overlay_logo, CIRCLE_PADDING,
    LOGO_RATIO, OUTPUT_FILENAME,
};

pub use crate::web::{routes::create_routes, server::WebServer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
