use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::loading::progress::{LoadRecord, LoadingProgress, ModelLoadState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// Resource queueing notifications for the embedding page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
}

impl WebRpcInterface {
    /// Queue a notification without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn drain(&mut self) -> Vec<RpcNotification> {
        std::mem::take(&mut self.outgoing_notifications)
    }
}

/// Plugin establishing the notification channel for iframe-based
/// deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>().add_systems(
            Update,
            (queue_loading_notifications, send_outgoing_messages).chain(),
        );
    }
}

/// Mirror the loading record to the page whenever it changes.
fn queue_loading_notifications(
    mut rpc: ResMut<WebRpcInterface>,
    loading_progress: Res<LoadingProgress>,
    mut last_record: Local<Option<LoadRecord>>,
) {
    let record = loading_progress.record;
    if *last_record == Some(record) {
        return;
    }
    *last_record = Some(record);

    let models: Vec<serde_json::Value> = loading_progress
        .model_states
        .iter()
        .map(|(path, state)| {
            serde_json::json!({
                "path": path,
                "state": match state {
                    ModelLoadState::Pending => "pending",
                    ModelLoadState::Loaded => "loaded",
                    ModelLoadState::Failed => "failed",
                },
            })
        })
        .collect();

    rpc.send_notification(
        "loading/progress",
        serde_json::json!({
            "active": record.active,
            "percent": record.progress_percent,
            "models": models,
        }),
    );
}

// Flush queued notifications via postMessage; a no-op off wasm.
fn send_outgoing_messages(mut rpc: ResMut<WebRpcInterface>) {
    let outgoing = rpc.drain();

    #[cfg(target_arch = "wasm32")]
    for notification in &outgoing {
        if let Ok(json) = serde_json::to_string(notification) {
            post_to_parent(&json);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    drop(outgoing);
}

#[cfg(target_arch = "wasm32")]
fn post_to_parent(json: &str) {
    let Some(win) = window() else {
        return;
    };
    // Inside an iframe the parent is the embedding shell; standalone it is
    // the window itself.
    let target = win.parent().ok().flatten().unwrap_or(win);
    let _ = target.post_message(&JsValue::from_str(json), "*");
}

/// Set the embedding document's body background; a no-op off wasm.
pub fn set_page_background(css_colour: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let style = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.style());
        if let Some(style) = style {
            let _ = style.set_property("background", css_colour);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = css_colour;
}
