//! Declarative showcase scene description and entity spawning.

/// Typed scene-graph nodes and the catalog-to-tree composition.
pub mod graph;

/// Walks the composed tree and spawns lights, models and captions.
pub mod spawner;
