use bevy::prelude::*;

use crate::engine::scene::graph::CaptionNode;

/// Anchors a caption overlay to a world-space point.
#[derive(Component)]
pub struct CaptionAnchor {
    pub world: Vec3,
}

/// Spawn the overlay entity for one caption node: a viewport-sized block
/// with the title lines and price stacked in its centre.
pub fn spawn_caption(commands: &mut Commands, caption: &CaptionNode) {
    commands
        .spawn((
            Name::new(format!("Caption{}", caption.index)),
            CaptionAnchor {
                world: caption.anchor,
            },
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            for line in caption.title {
                parent.spawn((
                    Text::new(*line),
                    TextFont {
                        font_size: 64.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
            parent.spawn((
                Text::new(caption.price),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Reproject every caption anchor through the active camera and move its
/// node so the viewport-sized block is centred on the projected point.
pub fn sync_caption_positions(
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut captions: Query<(&CaptionAnchor, &mut Node)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(viewport) = camera.logical_viewport_size() else {
        return;
    };

    for (anchor, mut node) in &mut captions {
        // Anchors that fail to project keep their last position.
        let Ok(projected) = camera.world_to_viewport(camera_transform, anchor.world) else {
            continue;
        };
        node.left = Val::Px(projected.x - viewport.x * 0.5);
        node.top = Val::Px(projected.y - viewport.y * 0.5);
    }
}
