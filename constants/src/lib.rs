//! Shared compile-time configuration for the showroom workspace.
//!
//! Everything the showcase displays is declared here as literals: the
//! product catalog and the camera/scroll/overlay tuning values.

/// Showcased products with their captions and visual parameters.
pub mod catalog;

/// Camera, scroll and overlay tuning constants.
pub mod render_settings;
