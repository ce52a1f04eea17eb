//! Banner for the most recent failed operation.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Shows the session error message, if any, above the active page.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let error = move || session.with(|s| s.error().map(str::to_owned));

    view! {
        <Show when=move || error().is_some()>
            <p class="error">{move || error().unwrap_or_default()}</p>
        </Show>
    }
}
