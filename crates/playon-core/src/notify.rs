//! User-facing notices and the seam that displays them.

use crate::models::{DispatchOutcome, RejectedUrl};

/// Prefix every notifier puts in front of a notice title.
pub const TITLE_PREFIX: &str = "Send to Kodi - ";

const CHECK_CONFIG: &str = "Could not contact Kodi. Check your configuration.";

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displays messages to the user. One call per notice, nothing returned.
pub trait Notifier: Send + Sync {
    fn display_message(&self, title: &str, message: &str, severity: Severity);

    fn notify(&self, notice: &Notice) {
        self.display_message(&notice.title, &notice.message, notice.severity);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn display_message(&self, title: &str, message: &str, severity: Severity) {
        (**self).display_message(title, message, severity);
    }
}

/// A single message ready for a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// Shown right before a request goes out.
    pub fn sending() -> Self {
        Self::new("Sending", "Sending to Kodi...", Severity::Info)
    }

    pub fn unsupported(rejected: &RejectedUrl) -> Self {
        Self::new(
            "Error",
            format!(
                "The following url is not supported: {}",
                rejected.original_url
            ),
            Severity::Error,
        )
    }

    pub fn from_outcome(outcome: &DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Ok => Self::new("Success", "Sent to Kodi", Severity::Ok),
            DispatchOutcome::RemoteError {
                code,
                message: Some(message),
            } => Self::new(
                format!("Kodi Error {code}"),
                format!("Kodi reported: {message}"),
                Severity::Error,
            ),
            DispatchOutcome::RemoteError {
                code,
                message: None,
            } => Self::new(
                "Kodi Error",
                format!("Kodi reported error code {code}"),
                Severity::Error,
            ),
            DispatchOutcome::TransportError {
                status,
                status_text,
            } => Self::new(
                format!("Status error {status}"),
                format!("{CHECK_CONFIG} HTTP Status: {status} {status_text}"),
                Severity::Error,
            ),
            DispatchOutcome::NetworkUnreachable => {
                Self::new("Network error", CHECK_CONFIG, Severity::Error)
            }
            DispatchOutcome::Unrecognized { .. } => Self::new(
                "Unrecognized response",
                "Kodi sent a response that could not be understood.",
                Severity::Error,
            ),
        }
    }
}

/// Drops everything but errors when notifications are turned off.
pub struct Filtered<N> {
    inner: N,
    show_all: bool,
}

impl<N: Notifier> Filtered<N> {
    pub fn new(inner: N, show_all: bool) -> Self {
        Self { inner, show_all }
    }
}

impl<N: Notifier> Notifier for Filtered<N> {
    fn display_message(&self, title: &str, message: &str, severity: Severity) {
        if self.show_all || severity == Severity::Error {
            self.inner.display_message(title, message, severity);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Collect(Mutex<Vec<Severity>>);

    impl Notifier for Collect {
        fn display_message(&self, _title: &str, _message: &str, severity: Severity) {
            self.0.lock().unwrap().push(severity);
        }
    }

    #[test]
    fn test_remote_error_texts() {
        let notice = Notice::from_outcome(&DispatchOutcome::RemoteError {
            code: 1,
            message: Some("boom".into()),
        });
        assert_eq!(notice.title, "Kodi Error 1");
        assert_eq!(notice.message, "Kodi reported: boom");
        assert_eq!(notice.severity, Severity::Error);

        let notice = Notice::from_outcome(&DispatchOutcome::RemoteError {
            code: 7,
            message: None,
        });
        assert_eq!(notice.message, "Kodi reported error code 7");
    }

    #[test]
    fn test_transport_error_text() {
        let notice = Notice::from_outcome(&DispatchOutcome::TransportError {
            status: 401,
            status_text: "Unauthorized".into(),
        });
        assert_eq!(notice.title, "Status error 401");
        assert_eq!(
            notice.message,
            "Could not contact Kodi. Check your configuration. HTTP Status: 401 Unauthorized"
        );
    }

    #[test]
    fn test_network_and_transport_differ() {
        let network = Notice::from_outcome(&DispatchOutcome::NetworkUnreachable);
        assert_eq!(network.title, "Network error");
        assert!(!network.message.contains("HTTP Status"));
    }

    #[test]
    fn test_filtered_keeps_errors() {
        let filtered = Filtered::new(Collect::default(), false);
        filtered.notify(&Notice::sending());
        filtered.notify(&Notice::from_outcome(&DispatchOutcome::Ok));
        filtered.notify(&Notice::from_outcome(&DispatchOutcome::NetworkUnreachable));
        assert_eq!(*filtered.inner.0.lock().unwrap(), vec![Severity::Error]);

        let all = Filtered::new(Collect::default(), true);
        all.notify(&Notice::sending());
        all.notify(&Notice::from_outcome(&DispatchOutcome::Ok));
        assert_eq!(
            *all.inner.0.lock().unwrap(),
            vec![Severity::Info, Severity::Ok]
        );
    }
}
