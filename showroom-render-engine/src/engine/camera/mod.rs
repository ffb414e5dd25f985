//! Showcase camera rig driven by the scroll state.

/// Camera rig resource and the per-frame scroll-to-camera mapping.
pub mod showcase_camera;
