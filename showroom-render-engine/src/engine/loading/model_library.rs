use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;

use crate::engine::loading::progress::{LoadingProgress, ModelLoadState, aggregate};

/// Cache of model scene handles keyed by asset path.
///
/// Entries keep their request order so progress reports stay stable.
#[derive(Resource, Default)]
pub struct ModelLibrary {
    entries: Vec<(String, Handle<Scene>)>,
}

impl ModelLibrary {
    /// Handle for `path`, invoking `loader` only on the first request.
    /// Later requests for the same path reuse the tracked handle.
    pub fn load_with(
        &mut self,
        path: &str,
        loader: impl FnOnce() -> Handle<Scene>,
    ) -> Handle<Scene> {
        if let Some((_, handle)) = self.entries.iter().find(|(tracked, _)| tracked == path) {
            return handle.clone();
        }

        let handle = loader();
        self.entries.push((path.to_string(), handle.clone()));
        handle
    }

    pub fn tracked(&self) -> impl Iterator<Item = (&str, &Handle<Scene>)> {
        self.entries.iter().map(|(path, handle)| (path.as_str(), handle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Poll the asset server for every tracked model and refresh the record.
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    library: Res<ModelLibrary>,
    asset_server: Res<AssetServer>,
) {
    if !loading_progress.scene_spawned {
        return;
    }

    let mut states = Vec::with_capacity(library.len());
    for (index, (path, handle)) in library.tracked().enumerate() {
        let state = match asset_server.get_recursive_dependency_load_state(handle) {
            Some(RecursiveDependencyLoadState::Loaded) => ModelLoadState::Loaded,
            Some(RecursiveDependencyLoadState::Failed(_)) => ModelLoadState::Failed,
            _ => ModelLoadState::Pending,
        };

        // A fetch that fails is left failed; the model never appears but
        // the record still completes.
        if state == ModelLoadState::Failed {
            let already_reported = loading_progress
                .model_states
                .get(index)
                .is_some_and(|(_, previous)| *previous == ModelLoadState::Failed);
            if !already_reported {
                error!("Showcase model failed to load: {path}");
            }
        }

        states.push((path.to_string(), state));
    }

    let record = aggregate(&states);
    if !loading_progress.record.active && record.active {
        println!("→ Loading {} showcase models", states.len());
    }
    if loading_progress.record.active && !record.active {
        println!("✓ All showcase models resolved");
    }

    loading_progress.model_states = states;
    loading_progress.record = record;
}

#[cfg(test)]
mod tests {
    use super::ModelLibrary;
    use bevy::prelude::*;

    #[test]
    fn repeated_requests_reuse_the_tracked_handle() {
        let mut library = ModelLibrary::default();
        let mut loader_calls = 0;

        let first = library.load_with("models/a/scene.gltf", || {
            loader_calls += 1;
            Handle::default()
        });
        let second = library.load_with("models/a/scene.gltf", || {
            loader_calls += 1;
            Handle::default()
        });

        assert_eq!(loader_calls, 1);
        assert_eq!(first, second);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn distinct_paths_are_tracked_separately() {
        let mut library = ModelLibrary::default();

        library.load_with("models/a/scene.gltf", Handle::default);
        library.load_with("models/b/scene.gltf", Handle::default);

        let tracked: Vec<&str> = library.tracked().map(|(path, _)| path).collect();
        assert_eq!(tracked, vec!["models/a/scene.gltf", "models/b/scene.gltf"]);
    }
}
