use serde_json::Value;
use tracing::{debug, warn};

use crate::models::DispatchOutcome;

/// What came back from the transport for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResult {
    /// No response at all: connection refused, DNS failure, and the like.
    Unreachable { reason: String },
    /// An HTTP response, with its raw body text.
    Response {
        status: u16,
        status_text: String,
        body: String,
    },
}

/// Turn a transport result into the outcome the user is told about.
pub fn interpret(result: &TransportResult) -> DispatchOutcome {
    match result {
        TransportResult::Unreachable { reason } => {
            debug!(%reason, "No response from remote");
            DispatchOutcome::NetworkUnreachable
        }
        // Some stacks report a dropped connection as status 0.
        TransportResult::Response { status: 0, .. } => DispatchOutcome::NetworkUnreachable,
        TransportResult::Response {
            status: 200, body, ..
        } => interpret_body(body),
        TransportResult::Response {
            status,
            status_text,
            ..
        } => DispatchOutcome::TransportError {
            status: *status,
            status_text: status_text.clone(),
        },
    }
}

fn interpret_body(body: &str) -> DispatchOutcome {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Response body is not JSON");
            return DispatchOutcome::Unrecognized {
                detail: format!("invalid JSON: {e}"),
            };
        }
    };

    if json.get("result").and_then(Value::as_str) == Some("OK") {
        return DispatchOutcome::Ok;
    }

    if let Some(error) = json.get("error").filter(|e| e.is_object()) {
        return remote_error(error);
    }

    warn!(%body, "Response has neither an OK result nor an error");
    DispatchOutcome::Unrecognized {
        detail: "no result or error in response".into(),
    }
}

/// The nested `data.stack.message` wins over the flat `message`.
fn remote_error(error: &Value) -> DispatchOutcome {
    let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
    let nested = error
        .pointer("/data/stack/message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty());
    let flat = error.get("message").and_then(Value::as_str);

    DispatchOutcome::RemoteError {
        code,
        message: nested.or(flat).map(str::to_string),
    }
}
