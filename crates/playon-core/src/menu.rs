//! Menu entries for configured servers and the clicks that come back from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PlayonError;
use crate::models::ServerRecord;

/// First id handed out to a server entry.
pub const FIRST_MENU_ID: u32 = 1000;

/// Maps menu-entry ids back to the server they were created for.
///
/// Rebuilt wholesale whenever the server list changes; never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ServerMenu {
    entries: Vec<(String, ServerRecord)>,
    by_id: HashMap<String, usize>,
}

impl ServerMenu {
    /// Assign ids `"1000"`, `"1001"`, ... to `servers` in list order.
    pub fn rebuild(servers: &[ServerRecord]) -> Self {
        let entries: Vec<(String, ServerRecord)> = servers
            .iter()
            .zip(FIRST_MENU_ID..)
            .map(|(server, id)| (id.to_string(), server.clone()))
            .collect();
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, (id, _))| (id.clone(), i))
            .collect();
        Self { entries, by_id }
    }

    pub fn get(&self, menu_item_id: &str) -> Option<&ServerRecord> {
        self.by_id
            .get(menu_item_id)
            .map(|&i| &self.entries[i].1)
    }

    pub fn resolve(&self, menu_item_id: &str) -> Result<&ServerRecord, PlayonError> {
        self.get(menu_item_id)
            .ok_or_else(|| PlayonError::UnknownMenuItem(menu_item_id.to_string()))
    }

    /// `(id, server)` pairs in menu order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ServerRecord)> {
        self.entries.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// With no servers, the menu only offers to add one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Kind of element under the cursor when the menu was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

/// A click on one of the server entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickData {
    pub menu_item_id: String,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub src_url: Option<String>,
}

impl ClickData {
    /// The URL to dispatch. Images are never sent as media: for them, as for
    /// plain links, the link target is used.
    pub fn target_url(&self) -> Result<Url, PlayonError> {
        let (raw, which) = match self.media_type {
            None | Some(MediaType::Image) => (self.link_url.as_deref(), "link"),
            Some(MediaType::Video | MediaType::Audio) => (self.src_url.as_deref(), "source"),
        };
        let raw = raw.ok_or(PlayonError::MissingUrl(which))?;
        Url::parse(raw).map_err(|source| PlayonError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servers() -> Vec<ServerRecord> {
        vec![
            ServerRecord::new("Living room", "10.0.0.5", 8080),
            ServerRecord::new("Bedroom", "10.0.0.6", 8080),
        ]
    }

    fn click(media_type: Option<MediaType>) -> ClickData {
        ClickData {
            menu_item_id: "1000".into(),
            media_type,
            link_url: Some("https://youtu.be/dQw4w9WgXcQ".into()),
            src_url: Some("https://cdn.example.com/poster.jpg".into()),
        }
    }

    #[test]
    fn test_ids_start_at_1000() {
        let menu = ServerMenu::rebuild(&servers());
        let ids: Vec<_> = menu.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, ["1000", "1001"]);
        assert_eq!(menu.get("1001").unwrap().label, "Bedroom");
        assert!(menu.get("999").is_none());
    }

    #[test]
    fn test_rebuild_replaces_mapping() {
        let before = ServerMenu::rebuild(&servers());
        assert_eq!(before.get("1000").unwrap().label, "Living room");

        let menu = ServerMenu::rebuild(&servers()[1..]);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.get("1000").unwrap().label, "Bedroom");
        assert!(matches!(
            menu.resolve("1001"),
            Err(PlayonError::UnknownMenuItem(_))
        ));
    }

    #[test]
    fn test_empty_menu() {
        assert!(ServerMenu::rebuild(&[]).is_empty());
    }

    #[test]
    fn test_link_click_uses_link_url() {
        let url = click(None).target_url().unwrap();
        assert_eq!(url.as_str(), "https://youtu.be/dQw4w9WgXcQ");
    }

    #[test]
    fn test_image_click_uses_link_url() {
        let url = click(Some(MediaType::Image)).target_url().unwrap();
        assert_eq!(url.host_str(), Some("youtu.be"));
    }

    #[test]
    fn test_media_click_uses_src_url() {
        let url = click(Some(MediaType::Video)).target_url().unwrap();
        assert_eq!(url.path(), "/poster.jpg");
    }

    #[test]
    fn test_missing_and_invalid_urls() {
        let mut data = click(Some(MediaType::Audio));
        data.src_url = None;
        assert!(matches!(
            data.target_url(),
            Err(PlayonError::MissingUrl("source"))
        ));

        let mut data = click(None);
        data.link_url = Some("not a url".into());
        assert!(matches!(
            data.target_url(),
            Err(PlayonError::InvalidUrl { .. })
        ));
    }
}
