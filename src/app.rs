//! Root application component and probe target resolution.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::probe_square::ProbeSquare;
use crate::state::probe::ProbeState;

/// Probed when the page supplies no `?url=` override.
pub const DEFAULT_PROBE_URL: &str = "https://slowpoke.keev.me/slowpoke.php";

/// Resolve the probe target from the page's query string.
///
/// `?url=` wins when present and non-empty; anything else falls back to the
/// default endpoint. The value is passed through untouched — a malformed
/// target simply fails the request and turns the square red.
#[must_use]
pub fn probe_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Ok(search) = window.location().search()
            && let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search)
            && let Some(url) = params.get("url")
            && !url.is_empty()
        {
            return url;
        }
    }
    DEFAULT_PROBE_URL.to_owned()
}

/// Root application component.
///
/// Provides the shared probe state and renders the single square.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let probe = RwSignal::new(ProbeState::default());
    provide_context(probe);

    view! {
        <Title text="Animated probe"/>
        <ProbeSquare url=probe_url()/>
    }
}
