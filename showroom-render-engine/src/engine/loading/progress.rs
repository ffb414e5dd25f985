use bevy::prelude::*;

/// Aggregate activity and progress over every tracked model fetch. At most
/// one exists; it lives inside [`LoadingProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadRecord {
    pub active: bool,
    pub progress_percent: f32,
}

/// Lifecycle of a single tracked model fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelLoadState {
    Pending,
    Loaded,
    Failed,
}

impl ModelLoadState {
    pub fn is_resolved(self) -> bool {
        !matches!(self, ModelLoadState::Pending)
    }
}

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub record: LoadRecord,
    pub model_states: Vec<(String, ModelLoadState)>,
    pub scene_spawned: bool,
}

/// Fold per-model states into the aggregate record.
///
/// The record stays active while any fetch is pending and goes inactive
/// exactly when none are; failed fetches count as resolved so the record
/// always completes.
pub fn aggregate(states: &[(String, ModelLoadState)]) -> LoadRecord {
    if states.is_empty() {
        return LoadRecord::default();
    }

    let resolved = states.iter().filter(|(_, s)| s.is_resolved()).count();
    LoadRecord {
        active: resolved < states.len(),
        progress_percent: resolved as f32 * 100.0 / states.len() as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelLoadState, aggregate};

    fn states(raw: &[ModelLoadState]) -> Vec<(String, ModelLoadState)> {
        raw.iter()
            .enumerate()
            .map(|(i, s)| (format!("models/{i}/scene.gltf"), *s))
            .collect()
    }

    #[test]
    fn no_tracked_fetches_means_inactive() {
        let record = aggregate(&[]);
        assert!(!record.active);
        assert_eq!(record.progress_percent, 0.0);
    }

    #[test]
    fn progress_is_monotonic_as_fetches_resolve() {
        use ModelLoadState::{Loaded, Pending};

        let mut tracked = [Pending, Pending, Pending, Pending];
        let mut last_percent = aggregate(&states(&tracked)).progress_percent;
        assert!(aggregate(&states(&tracked)).active);

        for i in 0..tracked.len() {
            tracked[i] = Loaded;
            let record = aggregate(&states(&tracked));
            assert!(record.progress_percent >= last_percent);
            last_percent = record.progress_percent;
        }
    }

    #[test]
    fn record_completes_exactly_when_nothing_is_pending() {
        use ModelLoadState::{Loaded, Pending};

        let in_flight = aggregate(&states(&[Loaded, Pending]));
        assert!(in_flight.active);
        assert_eq!(in_flight.progress_percent, 50.0);

        let done = aggregate(&states(&[Loaded, Loaded]));
        assert!(!done.active);
        assert_eq!(done.progress_percent, 100.0);
    }

    #[test]
    fn failed_fetches_still_complete_the_record() {
        use ModelLoadState::{Failed, Loaded};

        let record = aggregate(&states(&[Loaded, Failed]));
        assert!(!record.active);
        assert_eq!(record.progress_percent, 100.0);
    }
}
