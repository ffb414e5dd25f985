use bevy::prelude::*;

use constants::render_settings::{
    CAMERA_DISTANCE, CAMERA_FOV_DEGREES, CAMERA_LERP_SPEED, ITEM_SPACING, PAGE_ORIGIN_Y,
};

use crate::engine::scroll::ScrollState;

/// Camera rig state: the eased vertical position tracking the scroll
/// target. Items never move; the rig carries the camera past them.
#[derive(Resource, Debug)]
pub struct CameraRig {
    pub current_y: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            current_y: PAGE_ORIGIN_Y,
        }
    }
}

/// Map scroll progress (viewport-height units) to the rig's world target.
///
/// One viewport of scroll advances the camera one page: progress 0 rests
/// on the first page anchor, progress 2 on the third.
pub fn scroll_to_world_y(page_progress: f32) -> f32 {
    PAGE_ORIGIN_Y - page_progress * ITEM_SPACING
}

pub fn spawn_showcase_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, PAGE_ORIGIN_Y, CAMERA_DISTANCE),
    ));
}

/// Ease the camera toward the scroll-derived target once per frame.
pub fn camera_rig_system(
    mut rig: ResMut<CameraRig>,
    scroll: Res<ScrollState>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let target_y = scroll_to_world_y(scroll.page_progress());
    let lerp = (CAMERA_LERP_SPEED * time.delta_secs()).min(1.0);
    rig.current_y += (target_y - rig.current_y) * lerp;
    camera_transform.translation.y = rig.current_y;
}

#[cfg(test)]
mod tests {
    use super::scroll_to_world_y;

    #[test]
    fn rest_position_is_the_first_page_anchor() {
        assert_eq!(scroll_to_world_y(0.0), 250.0);
    }

    #[test]
    fn two_viewports_of_scroll_target_the_third_page() {
        assert_eq!(scroll_to_world_y(2.0), -250.0);
    }

    #[test]
    fn the_last_page_is_exactly_reachable() {
        assert_eq!(scroll_to_world_y(4.0), -750.0);
    }
}
