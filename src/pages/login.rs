//! Email + password login form.

use leptos::prelude::*;

use crate::app::{AppController, send_intent};
use crate::components::field_input::FieldInput;
use crate::state::session::{FormField, Intent, SessionState, ViewMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppController>();
    let busy = move || session.with(SessionState::is_pending);

    let submit_controller = controller.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send_intent(session, submit_controller.clone(), Intent::SubmitLogin);
    };
    let on_signup = move |_| send_intent(session, controller.clone(), Intent::Navigate(ViewMode::Signup));

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <FieldInput field=FormField::Email placeholder="Email"/>
            <FieldInput field=FormField::Password placeholder="Password" input_type="password"/>
            <button type="submit" disabled=busy>"Login"</button>
            <p>
                "Don't have an account? "
                <span class="link" on:click=on_signup>"Signup"</span>
            </p>
        </form>
    }
}
