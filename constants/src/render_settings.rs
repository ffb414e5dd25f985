/// Distance of the showcase camera from the plane the items live on.
pub const CAMERA_DISTANCE: f32 = 120.0;

/// Vertical field of view of the showcase camera, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 70.0;

/// World-space height of one showcase page; consecutive catalog entries
/// sit one page apart.
pub const ITEM_SPACING: f32 = 250.0;

/// World anchor of the page shown at scroll offset zero.
pub const PAGE_ORIGIN_Y: f32 = 250.0;

/// Offset of the model mesh below its page anchor.
pub const MODEL_DROP_Y: f32 = -45.0;

/// Radians of spin added to each showcase model per rendered frame.
pub const ROTATION_STEP: f32 = 0.01;

/// Total scrollable pages, one per catalog entry.
pub const PAGE_COUNT: u32 = 5;

/// Pixels of scroll contributed by one mouse-wheel line.
pub const LINE_SCROLL_FACTOR: f32 = 40.0;

/// Pixels of scroll contributed by an arrow-key press.
pub const KEY_SCROLL_STEP: f32 = 120.0;

/// Frame-rate-independent smoothing applied to the camera rig.
pub const CAMERA_LERP_SPEED: f32 = 12.0;

/// Opacity change per second while the loading overlay fades.
pub const LOADING_FADE_RATE: f32 = 2.5;
