use bevy::prelude::*;

use constants::catalog::ShowcaseEntry;
use constants::render_settings::MODEL_DROP_Y;

/// Typed scene-graph node: what to render, decoupled from how the engine
/// walks it.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Light(LightNode),
    Model(ModelNode),
    Caption(CaptionNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightNode {
    /// Flat fill illuminating every object.
    Ambient { brightness: f32 },
    Directional {
        direction: Vec3,
        illuminance: f32,
        shadows: bool,
    },
    /// Large off-stage highlight.
    Point { position: Vec3, intensity: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    pub index: usize,
    pub asset_path: &'static str,
    pub translation: Vec3,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionNode {
    pub index: usize,
    /// World point the overlay tracks; also the item's page anchor.
    pub anchor: Vec3,
    pub title: &'static [&'static str],
    pub price: &'static str,
}

/// Compose the full showcase tree from the catalog: the fixed light rig
/// plus one model and one caption per entry, each at the entry's explicit
/// position.
pub fn compose_showcase(catalog: &[ShowcaseEntry]) -> Vec<SceneNode> {
    let mut nodes = vec![
        SceneNode::Light(LightNode::Ambient { brightness: 100.0 }),
        SceneNode::Light(LightNode::Directional {
            direction: Vec3::new(-10.0, -10.0, -5.0),
            illuminance: 5_000.0,
            shadows: false,
        }),
        SceneNode::Light(LightNode::Directional {
            direction: Vec3::NEG_Y,
            illuminance: 8_000.0,
            shadows: true,
        }),
        SceneNode::Light(LightNode::Point {
            position: Vec3::new(1_000.0, 0.0, 0.0),
            intensity: 1_000_000.0,
        }),
    ];

    for (index, entry) in catalog.iter().enumerate() {
        let anchor = Vec3::new(0.0, entry.position, 0.0);
        nodes.push(SceneNode::Model(ModelNode {
            index,
            asset_path: entry.model_path,
            translation: anchor + Vec3::new(0.0, MODEL_DROP_Y, 0.0),
            scale: entry.scale,
        }));
        nodes.push(SceneNode::Caption(CaptionNode {
            index,
            anchor,
            title: entry.title,
            price: entry.price,
        }));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::{SceneNode, compose_showcase};
    use bevy::prelude::*;
    use constants::catalog::ShowcaseEntry;

    fn entry(model_path: &'static str, position: f32) -> ShowcaseEntry {
        ShowcaseEntry {
            name: "test",
            title: &["Test"],
            price: "$1",
            model_path,
            background: [0.0, 0.0, 0.0],
            position,
            scale: 1.0,
        }
    }

    fn model_y(nodes: &[SceneNode], path: &str) -> Option<f32> {
        nodes.iter().find_map(|node| match node {
            SceneNode::Model(model) if model.asset_path == path => Some(model.translation.y),
            _ => None,
        })
    }

    #[test]
    fn one_model_and_caption_per_entry_plus_the_light_rig() {
        let catalog = [entry("models/a/scene.gltf", 250.0), entry("models/b/scene.gltf", 0.0)];
        let nodes = compose_showcase(&catalog);

        let lights = nodes.iter().filter(|n| matches!(n, SceneNode::Light(_))).count();
        let models = nodes.iter().filter(|n| matches!(n, SceneNode::Model(_))).count();
        let captions = nodes.iter().filter(|n| matches!(n, SceneNode::Caption(_))).count();

        assert_eq!(lights, 4);
        assert_eq!(models, catalog.len());
        assert_eq!(captions, catalog.len());
    }

    #[test]
    fn models_hang_below_their_page_anchor() {
        let nodes = compose_showcase(&[entry("models/a/scene.gltf", 250.0)]);
        assert_eq!(model_y(&nodes, "models/a/scene.gltf"), Some(205.0));

        let caption_anchor = nodes.iter().find_map(|node| match node {
            SceneNode::Caption(caption) => Some(caption.anchor),
            _ => None,
        });
        assert_eq!(caption_anchor, Some(Vec3::new(0.0, 250.0, 0.0)));
    }

    #[test]
    fn positions_come_from_the_entry_not_the_list_order() {
        let a = entry("models/a/scene.gltf", 250.0);
        let b = entry("models/b/scene.gltf", -250.0);

        let forward = compose_showcase(&[
            entry("models/a/scene.gltf", 250.0),
            entry("models/b/scene.gltf", -250.0),
        ]);
        let reversed = compose_showcase(&[
            entry("models/b/scene.gltf", -250.0),
            entry("models/a/scene.gltf", 250.0),
        ]);

        assert_eq!(
            model_y(&forward, a.model_path),
            model_y(&reversed, a.model_path)
        );
        assert_eq!(
            model_y(&forward, b.model_path),
            model_y(&reversed, b.model_path)
        );
    }
}
