//! Text input bound to one session form field.

use leptos::prelude::*;

use crate::app::edit_field;
use crate::state::session::{FormField, SessionState};

#[component]
pub fn FieldInput(
    field: FormField,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <input
            class="auth-input"
            type=input_type
            name=field.as_str()
            placeholder=placeholder
            prop:value=move || session.with(|s| s.form().get(field).to_owned())
            on:input=move |ev| edit_field(session, field, event_target_value(&ev))
        />
    }
}
