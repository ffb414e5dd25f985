use bevy::prelude::*;

use constants::render_settings::ROTATION_STEP;

/// Marker for entities that spin in place.
#[derive(Component)]
pub struct Spinning;

/// Spin rate applied to every [`Spinning`] entity, radians per frame.
#[derive(Resource)]
pub struct RotationSettings {
    pub speed: f32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            speed: ROTATION_STEP,
        }
    }
}

// Rotation is frame-based, not scroll-based: every model keeps turning at
// a fixed step regardless of input.
pub fn spin_showcase_models(
    settings: Res<RotationSettings>,
    mut spinners: Query<&mut Transform, With<Spinning>>,
) {
    for mut transform in &mut spinners {
        transform.rotate_y(settings.speed);
    }
}
