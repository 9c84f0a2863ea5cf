//! One click in, one terminal notice out.

use tracing::{info, warn};
use url::Url;

use crate::classify::{classify, url_pathname};
use crate::error::PlayonError;
use crate::menu::{ClickData, ServerMenu};
use crate::models::{DispatchOutcome, RejectedUrl, ServerRecord};
use crate::notify::{Notice, Notifier};
use crate::request::build_request;
use crate::response::interpret;
use crate::transport::Transport;

/// How a single dispatch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReport {
    /// Not playable; no request was issued.
    Rejected(RejectedUrl),
    /// A request was issued and interpreted.
    Completed(DispatchOutcome),
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(DispatchOutcome::Ok))
    }
}

/// Runs classify, build, send, interpret, notify for each click.
///
/// Holds no per-dispatch state, so any number of dispatches may run at once
/// through a shared reference.
pub struct Dispatcher<T, N> {
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> Dispatcher<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// Resolve the clicked menu entry and dispatch the click's target to it.
    pub async fn handle_click(
        &self,
        click: &ClickData,
        menu: &ServerMenu,
    ) -> Result<DispatchReport, PlayonError> {
        let server = menu.resolve(&click.menu_item_id)?;
        let target = click.target_url()?;
        Ok(self.dispatch_url(&target, server).await)
    }

    pub async fn dispatch_url(&self, url: &Url, server: &ServerRecord) -> DispatchReport {
        self.dispatch(url.as_str(), url_pathname(url), server).await
    }

    pub async fn dispatch(&self, url: &str, pathname: &str, server: &ServerRecord) -> DispatchReport {
        let item = match classify(url, pathname) {
            Ok(item) => item,
            Err(rejected) => {
                info!(%url, "Unsupported URL, nothing sent");
                self.notifier.notify(&Notice::unsupported(&rejected));
                return DispatchReport::Rejected(rejected);
            }
        };

        let request = build_request(&item, server);
        info!(server = %server.label, endpoint = %request.url, file = ?request.file(), "Dispatching");
        self.notifier.notify(&Notice::sending());

        let result = self.transport.send(&request).await;
        let outcome = interpret(&result);
        if outcome.is_ok() {
            info!(server = %server.label, "Remote accepted the item");
        } else {
            warn!(server = %server.label, ?outcome, "Dispatch failed");
        }

        self.notifier.notify(&Notice::from_outcome(&outcome));
        DispatchReport::Completed(outcome)
    }
}
