//! Protected user list shown while a session credential is held.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched by the controller on entry to this view; this page
//! only renders it and offers logout.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::app::{AppController, send_intent};
use crate::net::types::UserRecord;
use crate::state::session::{Intent, SessionState};

fn user_label(user: &UserRecord) -> String {
    format!("{} — {}", user.name, user.email)
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppController>();

    let on_logout = move |_| send_intent(session, controller.clone(), Intent::Logout);
    // IDs may repeat or be empty, so rows are keyed by position too.
    let rows = move || session.with(|s| s.users().iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <div class="users-page">
            <h2>"Users List"</h2>
            <button class="logout" on:click=on_logout>"Logout"</button>
            <Show when=move || session.with(SessionState::is_pending)>
                <p class="users-page__loading">"Loading users..."</p>
            </Show>
            <ul>
                <For
                    each=rows
                    key=|(index, user): &(usize, UserRecord)| (*index, user.id.clone())
                    children=move |(_, user): (usize, UserRecord)| view! { <li>{user_label(&user)}</li> }
                />
            </ul>
        </div>
    }
}
