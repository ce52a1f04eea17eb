//! Account registration form.

use leptos::prelude::*;

use crate::app::{AppController, send_intent};
use crate::components::field_input::FieldInput;
use crate::state::session::{FormField, Intent, SessionState, ViewMode};

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppController>();
    let busy = move || session.with(SessionState::is_pending);

    let submit_controller = controller.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send_intent(session, submit_controller.clone(), Intent::SubmitSignup);
    };
    let on_login = move |_| send_intent(session, controller.clone(), Intent::Navigate(ViewMode::Login));

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Signup"</h2>
            <FieldInput field=FormField::Name placeholder="Name"/>
            <FieldInput field=FormField::Email placeholder="Email"/>
            <FieldInput field=FormField::Password placeholder="Password" input_type="password"/>
            <button type="submit" disabled=busy>"Signup"</button>
            <p>
                "Already have an account? "
                <span class="link" on:click=on_login>"Login"</span>
            </p>
        </form>
    }
}
