use bevy::prelude::*;

use constants::catalog::{SHOWCASE, ShowcaseEntry};
use constants::render_settings::ITEM_SPACING;

use crate::engine::camera::showcase_camera::CameraRig;
use crate::rpc::web_rpc::{WebRpcInterface, set_page_background};

/// Tracks which caption pages were in view last frame and which item owns
/// the page background.
#[derive(Resource, Default)]
pub struct BackgroundState {
    in_view: Vec<bool>,
    pub current: Option<usize>,
}

/// Caption pages overlapping the world-space viewport window at `camera_y`.
///
/// A page is one `span` tall and centred on its item, as is the viewport
/// window, so any overlap reduces to a distance test.
pub fn items_in_view(camera_y: f32, span: f32, positions: &[f32]) -> Vec<bool> {
    positions
        .iter()
        .map(|y| (camera_y - y).abs() < span)
        .collect()
}

/// Fold enter events against the previous frame's visibility. Several
/// items can enter in the same frame; the last one in catalog order wins.
pub fn resolve_enter(previous: &[bool], now: &[bool]) -> Option<usize> {
    now.iter()
        .enumerate()
        .filter(|(i, in_view)| **in_view && !previous.get(*i).copied().unwrap_or(false))
        .map(|(i, _)| i)
        .last()
}

/// Swap the page background when a caption page enters view.
pub fn update_background(
    mut state: ResMut<BackgroundState>,
    mut clear_colour: ResMut<ClearColor>,
    mut rpc: ResMut<WebRpcInterface>,
    rig: Res<CameraRig>,
) {
    let positions: Vec<f32> = SHOWCASE.iter().map(|entry| entry.position).collect();
    let now = items_in_view(rig.current_y, ITEM_SPACING, &positions);

    if let Some(index) = resolve_enter(&state.in_view, &now) {
        apply_background(&SHOWCASE[index], index, &mut state, &mut clear_colour, &mut rpc);
    }
    state.in_view = now;
}

fn apply_background(
    entry: &ShowcaseEntry,
    index: usize,
    state: &mut BackgroundState,
    clear_colour: &mut ClearColor,
    rpc: &mut WebRpcInterface,
) {
    state.current = Some(index);
    clear_colour.0 = entry.background_colour();
    set_page_background(&entry.background_css());
    rpc.send_notification(
        "background/changed",
        serde_json::json!({
            "item": entry.name,
            "colour": entry.background_css(),
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::{items_in_view, resolve_enter};

    const POSITIONS: [f32; 5] = [250.0, 0.0, -250.0, -500.0, -750.0];
    const SPAN: f32 = 250.0;

    /// Drive the enter fold over a camera path, returning the owner of the
    /// background at the end.
    fn fold_path(path: &[f32]) -> Option<usize> {
        let mut previous = vec![false; POSITIONS.len()];
        let mut current = None;
        for &camera_y in path {
            let now = items_in_view(camera_y, SPAN, &POSITIONS);
            if let Some(index) = resolve_enter(&previous, &now) {
                current = Some(index);
            }
            previous = now;
        }
        current
    }

    #[test]
    fn exactly_one_item_is_in_view_at_page_anchors() {
        for (index, &anchor) in POSITIONS.iter().enumerate() {
            let in_view = items_in_view(anchor, SPAN, &POSITIONS);
            let visible: Vec<usize> = in_view
                .iter()
                .enumerate()
                .filter(|(_, v)| **v)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(visible, vec![index]);
        }
    }

    #[test]
    fn overlapping_enters_resolve_last_write_wins() {
        // Between two anchors both pages are in view; the later catalog
        // entry entered last and owns the background.
        let previous = vec![false; POSITIONS.len()];
        let now = items_in_view(-125.0, SPAN, &POSITIONS);
        assert_eq!(resolve_enter(&previous, &now), Some(2));
    }

    #[test]
    fn scrolling_out_and_back_restores_the_first_background() {
        assert_eq!(fold_path(&[250.0, 0.0, -250.0, 0.0, 250.0]), Some(0));
    }

    #[test]
    fn clamped_overscroll_keeps_the_last_background() {
        // The scroll clamp pins the camera at the final anchor; repeated
        // frames there fire no further enters.
        assert_eq!(
            fold_path(&[250.0, 0.0, -250.0, -500.0, -750.0, -750.0, -750.0]),
            Some(4)
        );
    }
}
