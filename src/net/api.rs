//! HTTP probe request and response classification.
//!
//! Client-side (hydrate): one real GET via `gloo-net`. Outside the browser
//! the stub reports failure, since the probe is only meaningful there.
//!
//! ERROR HANDLING
//! ==============
//! Error status, transport failure, and body-read failure all classify as
//! `Failed`; nothing is retried or surfaced to a caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::util::color::FillColor;

/// Classified result of the probe request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Success response whose body is exactly `"1"`.
    Confirmed,
    /// Success response with any other body, `"0"` included.
    Other,
    /// Non-success status or a request that never completed.
    Failed,
}

impl ProbeOutcome {
    /// Fill the square takes once this outcome settles.
    #[must_use]
    pub fn fill(self) -> FillColor {
        match self {
            ProbeOutcome::Confirmed => FillColor::Green,
            ProbeOutcome::Other => FillColor::Blue,
            ProbeOutcome::Failed => FillColor::Red,
        }
    }
}

/// Classify a completed HTTP exchange. The body comparison is literal; no
/// trimming or case folding.
#[must_use]
pub fn classify_response(ok: bool, body: &str) -> ProbeOutcome {
    if !ok {
        return ProbeOutcome::Failed;
    }
    if body == "1" {
        ProbeOutcome::Confirmed
    } else {
        ProbeOutcome::Other
    }
}

/// Send one GET to `url` and classify what came back.
///
/// The URL is not validated up front; a malformed URL surfaces as a
/// transport failure and classifies as `Failed` like any other.
pub async fn fetch_probe(url: &str) -> ProbeOutcome {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("probe request failed: {e}");
                return ProbeOutcome::Failed;
            }
        };
        let ok = resp.ok();
        match resp.text().await {
            Ok(body) => classify_response(ok, &body),
            Err(e) => {
                leptos::logging::warn!("probe body read failed: {e}");
                ProbeOutcome::Failed
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        ProbeOutcome::Failed
    }
}
