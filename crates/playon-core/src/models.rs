use serde::{Deserialize, Serialize};

/// A configured remote player endpoint.
///
/// Identity is the record's position in the configured list; the core only
/// ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub label: String,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ServerRecord {
    pub fn new(label: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            label: label.into(),
            host: host.into(),
            port,
            username: None,
            password: None,
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// `http://<host>:<port>/jsonrpc`
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/jsonrpc", self.host, self.port)
    }
}

/// A YouTube video id. Always exactly [`VideoId::LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    /// Returns `None` unless `id` is exactly eleven characters long.
    pub fn new(id: &str) -> Option<Self> {
        (id.chars().count() == Self::LEN).then(|| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dispatch-ready form of a clicked URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayableItem {
    /// Must be rewritten into the remote's YouTube plugin URL.
    Youtube { video_id: VideoId },
    /// Handed to the remote unchanged.
    Direct { url: String },
}

/// A URL the classifier refused to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedUrl {
    pub original_url: String,
}

/// Headers attached to every outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub content_type: &'static str,
    pub authorization: Option<String>,
}

impl RequestHeaders {
    /// Header name/value pairs in wire order. `Authorization` is omitted when unset.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        std::iter::once(("Content-Type", self.content_type)).chain(
            self.authorization
                .as_deref()
                .map(|value| ("Authorization", value)),
        )
    }
}

/// A fully formed outbound request. Built fresh for every dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: &'static str,
    pub headers: RequestHeaders,
    pub body: serde_json::Value,
}

impl RequestDescriptor {
    /// The `params.item.file` field of the JSON-RPC body.
    pub fn file(&self) -> Option<&str> {
        self.body
            .pointer("/params/item/file")
            .and_then(serde_json::Value::as_str)
    }
}

/// Terminal result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The remote answered `"result": "OK"`.
    Ok,
    /// The remote answered 200 with a JSON-RPC `error` object.
    /// `message` is `None` when only a code was reported.
    RemoteError { code: i64, message: Option<String> },
    /// The remote answered with a non-200 status.
    TransportError { status: u16, status_text: String },
    /// No response could be obtained.
    NetworkUnreachable,
    /// A 200 response carrying neither a recognizable result nor an error.
    Unrecognized { detail: String },
}

impl DispatchOutcome {
    pub const CODE_ONLY_MESSAGE: &'static str = "error code only";

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Remote error message, falling back to a generic text for code-only errors.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::RemoteError { message, .. } => {
                Some(message.as_deref().unwrap_or(Self::CODE_ONLY_MESSAGE))
            }
            _ => None,
        }
    }
}
