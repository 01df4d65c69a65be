use leptos::prelude::*;

use crate::shared::icons::icon;

/// Masked input for secret settings
///
/// While the stored secret is still encrypted server-side the control
/// shows a placeholder instead of a value; typing replaces the stored
/// secret. The eye button toggles between masked and plain display.
#[component]
pub fn SecretInput(
    /// Id of the input element
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// True while the stored secret is set but withheld by the server
    #[prop(into)]
    encrypted: Signal<bool>,
    /// Input event handler
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);

    view! {
        <div class="secret-input">
            <input
                id=id
                class="form__input secret-input__field"
                type=move || if revealed.get() { "text" } else { "password" }
                prop:value=move || value.get()
                placeholder=move || if encrypted.get() { "ENCRYPTED".to_string() } else { String::new() }
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <button
                type="button"
                class="button button--ghost secret-input__toggle"
                aria-label=move || if revealed.get() { "Hide" } else { "Reveal" }
                on:click=move |_| revealed.update(|val| *val = !*val)
            >
                {move || icon(if revealed.get() { "eye-off" } else { "eye" })}
            </button>
        </div>
    }
}
