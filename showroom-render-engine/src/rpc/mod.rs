//! Notification channel to the embedding page.
//!
//! Implements the outgoing half of a JSON-RPC 2.0 messaging layer for
//! iframe-based deployment: the engine broadcasts loading progress and
//! background changes via `postMessage`, and mirrors the active page
//! colour onto the document body. Native builds compile the queue but
//! flush to nowhere.
//!
//! ## Message Flow
//!
//! ```text
//! Embedding page (parent window)  <──postMessage──  Engine (iframe)
//!        │                                             │
//!        │ <──────── Notification (no ID) ─────────────┤
//! ```

/// Notification structures, queue resource and the wasm flush systems.
pub mod web_rpc;
