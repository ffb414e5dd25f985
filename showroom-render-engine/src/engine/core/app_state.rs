use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

// Final transition once the scene exists and every tracked model resolved.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_spawned && !loading_progress.record.active {
        println!("→ Showcase ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
