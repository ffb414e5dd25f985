// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

// Crate engine modules
use crate::engine::{
    camera::showcase_camera::{CameraRig, camera_rig_system, spawn_showcase_camera},
    core::app_state::{AppState, transition_to_running},
    core::window_config::create_window_config,
    loading::model_library::{ModelLibrary, check_model_loading},
    loading::progress::LoadingProgress,
    overlay::caption::sync_caption_positions,
    overlay::loading_bar::{animate_loading_overlay, spawn_loading_overlay},
    scene::spawner::spawn_showcase,
    scroll::{ScrollState, scroll_input},
    systems::background::{BackgroundState, update_background},
    systems::rotation::{RotationSettings, spin_showcase_models},
};

// Crate web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

use constants::catalog::SHOWCASE;

/// Create the showcase application with loading and runtime phases.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin);

    // The page starts on the first catalog entry's colour.
    let initial_background = SHOWCASE
        .first()
        .map(|entry| entry.background_colour())
        .unwrap_or(Color::BLACK);

    // Initialise resources early
    app.init_state::<AppState>()
        .init_resource::<ScrollState>()
        .init_resource::<CameraRig>()
        .init_resource::<ModelLibrary>()
        .init_resource::<LoadingProgress>()
        .init_resource::<RotationSettings>()
        .init_resource::<BackgroundState>()
        .insert_resource(DirectionalLightShadowMap { size: 1024 })
        .insert_resource(ClearColor(initial_background));

    // State-based system scheduling
    app.add_systems(Startup, (setup, spawn_showcase, spawn_loading_overlay).chain())
        .add_systems(
            Update,
            (check_model_loading, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Scroll keeps accruing while models load; the camera follows it in
    // every state so the first running frame is already in place.
    app.add_systems(Update, (scroll_input, camera_rig_system).chain())
        .add_systems(
            Update,
            (
                spin_showcase_models,
                update_background,
                sync_caption_positions,
            )
                .chain()
                .after(camera_rig_system)
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(Update, animate_loading_overlay.after(check_model_loading));

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            crate::engine::systems::fps_tracking::fps_text_update_system,
        );
    }

    app
}

// Startup system for the camera and native debug overlays.
fn setup(mut commands: Commands) {
    spawn_showcase_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::engine::systems::fps_tracking::spawn_fps_overlay(&mut commands);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
