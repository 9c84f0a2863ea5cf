//! Decides whether a clicked URL can be played on a remote endpoint.
//!
//! YouTube links are recognized first so they never fall through to
//! extension sniffing; everything else must either have no path at all or
//! end in a known media extension.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::models::{PlayableItem, RejectedUrl, VideoId};

/// Short and embed style links: `youtu.be/<id>`, `v/<id>`, `u/<c>/<id>`,
/// `embed/<id>`, `watch?v=<id>`.
static RE_SHORT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=)([^#&?]*).*").unwrap()
});

/// `youtube.com/watch` with `v=` anywhere in the query string.
static RE_WATCH_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*(youtube.com/watch.*[?&]v=)([^#&?]*).*").unwrap());

/// File extensions the remote player is trusted to open. Matched case-sensitively.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "mov", "mp3", "avi", "flv", "wmv", "asf", "flac", "mka", "m4a", "aac", "ogg",
    "pls", "jpg", "png", "gif", "jpeg", "tiff", "webm", "oga", "ogv",
];

/// Classify `url` given its already-extracted `pathname`.
///
/// First match wins: short-link pattern, canonical watch pattern, empty
/// pathname, extension allow-list.
pub fn classify(url: &str, pathname: &str) -> Result<PlayableItem, RejectedUrl> {
    if let Some(video_id) = youtube_id(url) {
        debug!(%url, video_id = %video_id, "Classified as YouTube");
        return Ok(PlayableItem::Youtube { video_id });
    }

    if pathname.is_empty() {
        debug!(%url, "No path component, sending as-is");
        return Ok(PlayableItem::Direct {
            url: url.to_string(),
        });
    }

    let ext = extension(pathname);
    if MEDIA_EXTENSIONS.contains(&ext) {
        debug!(%url, ext, "Classified as direct media");
        return Ok(PlayableItem::Direct {
            url: url.to_string(),
        });
    }

    debug!(%url, ext, "Rejected");
    Err(RejectedUrl {
        original_url: url.to_string(),
    })
}

/// Classify a parsed URL, deriving the pathname with [`url_pathname`].
pub fn classify_url(url: &Url) -> Result<PlayableItem, RejectedUrl> {
    classify(url.as_str(), url_pathname(url))
}

/// The path used for extension checks.
///
/// A bare root (`http://host`, which parses to `/`) counts as empty, as do
/// scheme-specific URLs with no hierarchical path.
pub fn url_pathname(url: &Url) -> &str {
    match url.path() {
        "/" => "",
        path => path,
    }
}

/// Try both YouTube patterns in order. A capture that isn't exactly eleven
/// characters is not an id.
fn youtube_id(url: &str) -> Option<VideoId> {
    [&*RE_SHORT_LINK, &*RE_WATCH_QUERY]
        .into_iter()
        .find_map(|re| {
            let caps = re.captures(url)?;
            VideoId::new(caps.get(2)?.as_str())
        })
}

/// Everything after the last `.`, or the whole path when there is none.
fn extension(pathname: &str) -> &str {
    pathname.rsplit('.').next().unwrap_or(pathname)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(url: &str) -> Result<PlayableItem, RejectedUrl> {
        classify_url(&Url::parse(url).unwrap())
    }

    fn youtube(id: &str) -> PlayableItem {
        PlayableItem::Youtube {
            video_id: VideoId::new(id).unwrap(),
        }
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            classify_str("https://youtu.be/dQw4w9WgXcQ"),
            Ok(youtube("dQw4w9WgXcQ"))
        );
    }

    #[test]
    fn test_watch_link_with_trailing_params() {
        assert_eq!(
            classify_str("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Ok(youtube("dQw4w9WgXcQ"))
        );
    }

    #[test]
    fn test_embed_and_v_links() {
        assert_eq!(
            classify_str("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"),
            Ok(youtube("dQw4w9WgXcQ"))
        );
        assert_eq!(
            classify_str("https://www.youtube.com/v/dQw4w9WgXcQ"),
            Ok(youtube("dQw4w9WgXcQ"))
        );
        assert_eq!(
            classify_str("https://www.youtube.com/u/1/dQw4w9WgXcQ"),
            Ok(youtube("dQw4w9WgXcQ"))
        );
    }

    #[test]
    fn test_v_param_not_first() {
        // Only the canonical pattern catches this one.
        assert_eq!(
            classify_str("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            Ok(youtube("dQw4w9WgXcQ"))
        );
    }

    #[test]
    fn test_wrong_length_id_is_not_youtube() {
        let url = "https://www.youtube.com/watch?v=short";
        assert_eq!(
            classify_str(url),
            Err(RejectedUrl {
                original_url: url.into()
            })
        );

        // Twelve characters: falls through to the extension check.
        assert!(matches!(
            classify_str("https://youtu.be/dQw4w9WgXcQQ"),
            Err(_)
        ));
    }

    #[test]
    fn test_malformed_match_falls_through_to_extension() {
        let url = "https://cdn.example.com/embed/trailer-2024-final.mp4";
        assert_eq!(
            classify_str(url),
            Ok(PlayableItem::Direct { url: url.into() })
        );
    }

    #[test]
    fn test_empty_pathname_is_direct() {
        assert_eq!(
            classify("http://host", ""),
            Ok(PlayableItem::Direct {
                url: "http://host".into()
            })
        );
        assert_eq!(
            classify_str("http://192.168.1.20:8000"),
            Ok(PlayableItem::Direct {
                url: "http://192.168.1.20:8000/".into()
            })
        );
    }

    #[test]
    fn test_every_allowed_extension() {
        for ext in MEDIA_EXTENSIONS {
            let url = format!("https://media.example.org/files/clip.{ext}");
            assert_eq!(
                classify_str(&url),
                Ok(PlayableItem::Direct { url: url.clone() }),
                "extension {ext} should be accepted"
            );
        }
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        assert!(classify_str("https://media.example.org/clip.MP4").is_err());
    }

    #[test]
    fn test_unlisted_extension_rejected() {
        let url = "https://example.com/notes/readme.txt";
        assert_eq!(
            classify_str(url),
            Err(RejectedUrl {
                original_url: url.into()
            })
        );
    }

    #[test]
    fn test_plain_web_page_rejected() {
        assert!(classify_str("https://example.com/about").is_err());
    }

    #[test]
    fn test_extension_only_after_last_dot() {
        assert!(classify_str("https://example.com/v1.mp4/index.html").is_err());
        assert!(classify_str("https://example.com/archive.tar.ogg").is_ok());
    }

    #[test]
    fn test_url_pathname() {
        assert_eq!(url_pathname(&Url::parse("http://host").unwrap()), "");
        assert_eq!(
            url_pathname(&Url::parse("http://host/a/b.mkv").unwrap()),
            "/a/b.mkv"
        );
        assert_eq!(
            url_pathname(&Url::parse("magnet:?xt=urn:btih:abc").unwrap()),
            ""
        );
    }
}
