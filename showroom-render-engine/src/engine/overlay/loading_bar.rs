use bevy::prelude::*;

use constants::render_settings::LOADING_FADE_RATE;

use crate::engine::loading::progress::LoadingProgress;

/// Root node of the loading overlay, carrying the animated opacity.
#[derive(Component)]
pub struct LoadingOverlay {
    pub opacity: f32,
}

#[derive(Component)]
pub struct LoadingBarContainer;

/// The bar whose width tracks the aggregate progress.
#[derive(Component)]
pub struct LoadingBar;

/// Move `current` toward `target` at `rate` opacity units per second.
///
/// Retargeting mid-fade simply reverses direction; the last transition
/// wins, so a re-activation while fading out climbs straight back up.
pub fn step_opacity(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let max_step = rate * dt;
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(delta)
    }
}

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((
            Name::new("LoadingOverlay"),
            LoadingOverlay { opacity: 1.0 },
            BackgroundColor(Color::srgba(0.07, 0.07, 0.09, 1.0)),
            GlobalZIndex(10),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Name::new("LoadingBarContainer"),
                    LoadingBarContainer,
                    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.15)),
                    Node {
                        width: Val::Percent(40.0),
                        height: Val::Px(4.0),
                        ..default()
                    },
                ))
                .with_children(|container| {
                    container.spawn((
                        Name::new("LoadingBar"),
                        LoadingBar,
                        BackgroundColor(Color::WHITE),
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                });
        });
}

/// Animate the overlay: fade toward the record's activity target and keep
/// the bar width on the aggregate percentage.
pub fn animate_loading_overlay(
    time: Res<Time>,
    loading_progress: Res<LoadingProgress>,
    mut overlays: Query<
        (&mut LoadingOverlay, &mut BackgroundColor, &mut Visibility),
        (Without<LoadingBarContainer>, Without<LoadingBar>),
    >,
    mut containers: Query<
        &mut BackgroundColor,
        (With<LoadingBarContainer>, Without<LoadingOverlay>, Without<LoadingBar>),
    >,
    mut bars: Query<
        (&mut Node, &mut BackgroundColor),
        (With<LoadingBar>, Without<LoadingOverlay>, Without<LoadingBarContainer>),
    >,
) {
    let Ok((mut overlay, mut backdrop, mut visibility)) = overlays.single_mut() else {
        return;
    };

    let record = loading_progress.record;
    let target = if record.active { 1.0 } else { 0.0 };
    overlay.opacity = step_opacity(overlay.opacity, target, LOADING_FADE_RATE, time.delta_secs());

    *visibility = if overlay.opacity <= f32::EPSILON {
        Visibility::Hidden
    } else {
        Visibility::Visible
    };

    backdrop.0.set_alpha(overlay.opacity);
    if let Ok(mut container_colour) = containers.single_mut() {
        container_colour.0.set_alpha(0.15 * overlay.opacity);
    }
    if let Ok((mut bar_node, mut bar_colour)) = bars.single_mut() {
        bar_node.width = Val::Percent(record.progress_percent);
        bar_colour.0.set_alpha(overlay.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::step_opacity;

    #[test]
    fn steps_are_bounded_by_the_rate() {
        assert_eq!(step_opacity(0.0, 1.0, 2.0, 0.25), 0.5);
        assert_eq!(step_opacity(1.0, 0.0, 2.0, 0.25), 0.5);
    }

    #[test]
    fn converges_exactly_onto_the_target() {
        assert_eq!(step_opacity(0.9, 1.0, 2.0, 0.25), 1.0);
        assert_eq!(step_opacity(0.1, 0.0, 2.0, 0.25), 0.0);
    }

    #[test]
    fn reactivation_mid_fade_reverses_direction() {
        // Fading out...
        let mid = step_opacity(1.0, 0.0, 2.0, 0.25);
        assert_eq!(mid, 0.5);
        // ...a new activation retargets and the fade climbs back.
        let back = step_opacity(mid, 1.0, 2.0, 0.25);
        assert!(back > mid);
    }
}
