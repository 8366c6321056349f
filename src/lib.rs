//! Placeholder app icon generator for an Xcode `AppIcon.appiconset`.

pub mod config;
pub mod error;
pub mod fonts;
pub mod icon;
pub mod logger;
pub mod models;
pub mod render;

pub use config::Config;
pub use error::IconError;
pub use icon::{generate_icon, generate_icon_with, run_batch, run_batch_with};
pub use models::{ICON_SPECS, IconSpec, icon_specs};
