//! Asset loading and progress tracking for showcase models.
//!
//! Manages the pipeline from the first model request through per-model
//! load-state polling to the aggregate record the overlay consumes.

/// Model handle cache and load-state polling.
///
/// Repeated requests for the same asset path reuse the tracked handle.
pub mod model_library;

/// Aggregate loading record and per-model state transitions.
pub mod progress;
