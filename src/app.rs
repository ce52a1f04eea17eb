//! Root application component and intent plumbing.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::error_banner::ErrorBanner;
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{login::LoginPage, signup::SignupPage, users::UsersPage};
use crate::state::controller::SessionController;
use crate::state::session::{FormField, Intent, SessionState, ViewMode};
use crate::util::session_store::BrowserSessionStore;

/// Controller wired to the real service and `localStorage`.
pub type AppController = SessionController<HttpAuthApi, BrowserSessionStore>;

/// Hand an intent to the controller on the browser event loop.
pub fn send_intent(session: RwSignal<SessionState>, controller: AppController, intent: Intent) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        controller.dispatch(&session, intent).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, controller, intent);
    }
}

/// Field edits never need I/O, so they skip the controller round-trip.
pub fn edit_field(session: RwSignal<SessionState>, field: FormField, value: String) {
    session.update(|s| {
        s.apply(Intent::EditField(field, value));
    });
}

/// Root application component.
///
/// Provides the session state and controller contexts, restores any
/// persisted session, and swaps pages on view changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::resolve();
    let controller: AppController =
        SessionController::new(HttpAuthApi::new(&config), BrowserSessionStore::new(&config));
    let session = RwSignal::new(SessionState::default());

    provide_context(session);
    provide_context(controller.clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        controller.start(&session).await;
    });
    #[cfg(not(feature = "csr"))]
    let _ = controller;

    // Only re-mount pages when the view actually changes, not per keystroke.
    let view_mode = Memo::new(move |_| session.with(SessionState::view));

    view! {
        <Title text="Auth App"/>
        <div class="container">
            <h1>"Auth App"</h1>
            <ErrorBanner/>
            {move || match view_mode.get() {
                ViewMode::Signup => view! { <SignupPage/> }.into_any(),
                ViewMode::Login => view! { <LoginPage/> }.into_any(),
                ViewMode::Users => view! { <UsersPage/> }.into_any(),
            }}
        </div>
    }
}
