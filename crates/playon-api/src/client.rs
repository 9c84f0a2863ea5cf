use playon_core::models::RequestDescriptor;
use playon_core::response::TransportResult;
use playon_core::transport::Transport;
use reqwest::{Client, Method};
use tracing::{debug, warn};

use crate::error::KodiError;

const USER_AGENT: &str = concat!("playon/", env!("CARGO_PKG_VERSION"));

/// Sends built requests to Kodi over HTTP.
///
/// No timeout is configured beyond reqwest's defaults, and nothing is retried.
#[derive(Debug, Clone)]
pub struct KodiClient {
    http: Client,
}

impl KodiClient {
    pub fn new() -> Result<Self, KodiError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    fn build(&self, request: &RequestDescriptor) -> Result<reqwest::RequestBuilder, KodiError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| KodiError::InvalidMethod(request.method.to_string()))?;
        let body = serde_json::to_vec(&request.body)?;

        let builder = request
            .headers
            .iter()
            .fold(self.http.request(method, &request.url), |b, (name, value)| {
                b.header(name, value)
            });
        Ok(builder.body(body))
    }
}

impl Transport for KodiClient {
    async fn send(&self, request: &RequestDescriptor) -> TransportResult {
        let builder = match self.build(request) {
            Ok(builder) => builder,
            Err(e) => {
                warn!(error = %e, "Could not build request");
                return TransportResult::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!(url = %request.url, error = %e, "Request failed without a response");
                return TransportResult::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = resp.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = resp.text().await.unwrap_or_else(|e| {
            warn!(status = status.as_u16(), error = %e, "Could not read response body");
            String::new()
        });
        debug!(status = status.as_u16(), len = body.len(), "Response received");

        TransportResult::Response {
            status: status.as_u16(),
            status_text,
            body,
        }
    }
}
