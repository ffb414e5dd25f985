//! 2D overlay surfaces: reprojected captions and the loading indicator.

/// Caption nodes anchored to 3D points, repositioned every frame.
pub mod caption;

/// Loading overlay with the fade/width animation.
pub mod loading_bar;
