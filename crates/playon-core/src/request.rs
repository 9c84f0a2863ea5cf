use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use crate::models::{PlayableItem, RequestDescriptor, RequestHeaders, ServerRecord};

/// Plugin URL prefix the remote's YouTube add-on answers to.
pub const YOUTUBE_PLUGIN_URL: &str = "plugin://plugin.video.youtube/play/?video_id=";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the `Player.Open` request for `item` against `server`.
pub fn build_request(item: &PlayableItem, server: &ServerRecord) -> RequestDescriptor {
    RequestDescriptor {
        url: server.endpoint(),
        method: "POST",
        headers: RequestHeaders {
            content_type: JSON_CONTENT_TYPE,
            authorization: basic_auth(server),
        },
        body: player_open_body(&file_url(item)),
    }
}

/// The `file` the remote is asked to open.
pub fn file_url(item: &PlayableItem) -> String {
    match item {
        PlayableItem::Youtube { video_id } => format!("{YOUTUBE_PLUGIN_URL}{video_id}"),
        PlayableItem::Direct { url } => url.clone(),
    }
}

fn player_open_body(file: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "method": "Player.Open",
        "params": { "item": { "file": file } },
        "id": 1,
    })
}

/// `Basic base64(username:password)`, only when a non-empty username is set.
fn basic_auth(server: &ServerRecord) -> Option<String> {
    let username = server.username.as_deref().filter(|u| !u.is_empty())?;
    let password = server.password.as_deref().unwrap_or_default();
    let token = STANDARD.encode(format!("{username}:{password}"));
    Some(format!("Basic {token}"))
}
