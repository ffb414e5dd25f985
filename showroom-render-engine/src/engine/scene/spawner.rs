use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use constants::catalog::SHOWCASE;

use crate::engine::loading::model_library::ModelLibrary;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::overlay::caption::spawn_caption;
use crate::engine::scene::graph::{LightNode, SceneNode, compose_showcase};
use crate::engine::systems::rotation::Spinning;

/// Marker for showcase model anchors.
#[derive(Component)]
pub struct ShowcaseModel {
    pub index: usize,
}

/// Walk the composed scene tree and spawn every entity. Model scenes are
/// spawned immediately and appear once their assets resolve.
pub fn spawn_showcase(
    mut commands: Commands,
    mut library: ResMut<ModelLibrary>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    for node in compose_showcase(SHOWCASE) {
        match node {
            SceneNode::Light(light) => spawn_light(&mut commands, light),
            SceneNode::Model(model) => {
                let handle = library.load_with(model.asset_path, || {
                    asset_server.load(GltfAssetLabel::Scene(0).from_asset(model.asset_path))
                });
                commands.spawn((
                    Name::new(format!("ShowcaseModel{}", model.index)),
                    SceneRoot(handle),
                    Transform::from_translation(model.translation)
                        .with_scale(Vec3::splat(model.scale)),
                    ShowcaseModel { index: model.index },
                    Spinning,
                ));
            }
            SceneNode::Caption(caption) => spawn_caption(&mut commands, &caption),
        }
    }

    loading_progress.scene_spawned = true;
    println!("✓ Showcase scene spawned ({} catalog entries)", SHOWCASE.len());
}

fn spawn_light(commands: &mut Commands, light: LightNode) {
    match light {
        LightNode::Ambient { brightness } => {
            commands.insert_resource(AmbientLight {
                brightness,
                ..default()
            });
        }
        LightNode::Directional {
            direction,
            illuminance,
            shadows,
        } => {
            commands.spawn((
                DirectionalLight {
                    illuminance,
                    shadows_enabled: shadows,
                    ..default()
                },
                Transform::from_rotation(Quat::from_rotation_arc(
                    Vec3::NEG_Z,
                    direction.normalize(),
                )),
            ));
        }
        LightNode::Point {
            position,
            intensity,
        } => {
            commands.spawn((
                PointLight {
                    intensity,
                    range: 2_000.0,
                    ..default()
                },
                Transform::from_translation(position),
            ));
        }
    }
}
