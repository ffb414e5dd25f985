//! Scroll state shared by the camera rig and the page mapping.
//!
//! Mirrors a browser scroll container `page_count` viewports tall: input
//! accumulates into a pixel offset that is clamped to the reachable range
//! on every write.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::{KEY_SCROLL_STEP, LINE_SCROLL_FACTOR, PAGE_COUNT};

/// Shared scroll record. The only writer is [`scroll_input`]; everything
/// else reads.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub offset_px: f32,
    pub page_count: u32,
    pub viewport_height: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset_px: 0.0,
            page_count: PAGE_COUNT,
            viewport_height: 0.0,
        }
    }
}

impl ScrollState {
    /// Largest reachable offset: content is `page_count` viewports tall,
    /// so the container can displace it by `page_count - 1` viewports.
    pub fn max_offset(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32 * self.viewport_height
    }

    /// Scroll progress in viewport-height units.
    pub fn page_progress(&self) -> f32 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        self.offset_px / self.viewport_height
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset().max(0.0))
    }

    pub fn scroll_by(&mut self, delta_px: f32) {
        self.offset_px = self.clamp_offset(self.offset_px + delta_px);
    }
}

/// Accumulate wheel and keyboard input into the scroll offset.
pub fn scroll_input(
    mut scroll: ResMut<ScrollState>,
    mut wheel_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // Track the viewport and re-clamp when a resize shrinks the extent.
    if let Ok(window) = windows.single() {
        scroll.viewport_height = window.height();
        let clamped = scroll.clamp_offset(scroll.offset_px);
        scroll.offset_px = clamped;
    }

    // Wheel down reports negative y; the page scrolls forward.
    let mut delta_px = 0.0;
    for ev in wheel_events.read() {
        delta_px -= match ev.unit {
            MouseScrollUnit::Line => ev.y * LINE_SCROLL_FACTOR,
            MouseScrollUnit::Pixel => ev.y,
        };
    }

    if keyboard.just_pressed(KeyCode::ArrowDown) {
        delta_px += KEY_SCROLL_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        delta_px -= KEY_SCROLL_STEP;
    }
    if keyboard.just_pressed(KeyCode::PageDown) {
        delta_px += scroll.viewport_height;
    }
    if keyboard.just_pressed(KeyCode::PageUp) {
        delta_px -= scroll.viewport_height;
    }

    if keyboard.just_pressed(KeyCode::Home) {
        scroll.offset_px = 0.0;
        delta_px = 0.0;
    }
    if keyboard.just_pressed(KeyCode::End) {
        scroll.offset_px = scroll.max_offset();
        delta_px = 0.0;
    }

    if delta_px != 0.0 {
        scroll.scroll_by(delta_px);
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollState;

    fn state(viewport_height: f32) -> ScrollState {
        ScrollState {
            viewport_height,
            ..ScrollState::default()
        }
    }

    #[test]
    fn offsets_clamp_to_the_reachable_range() {
        let mut scroll = state(600.0);
        assert_eq!(scroll.max_offset(), 2400.0);

        scroll.scroll_by(10_000.0);
        assert_eq!(scroll.offset_px, 2400.0);

        scroll.scroll_by(-10_000.0);
        assert_eq!(scroll.offset_px, 0.0);
    }

    #[test]
    fn page_progress_counts_viewport_heights() {
        let mut scroll = state(600.0);
        scroll.scroll_by(1200.0);
        assert_eq!(scroll.page_progress(), 2.0);
    }

    #[test]
    fn zero_viewport_reports_zero_progress() {
        let scroll = state(0.0);
        assert_eq!(scroll.page_progress(), 0.0);
        assert_eq!(scroll.clamp_offset(500.0), 0.0);
    }
}
