use leptos::prelude::*;

/// Single-line input bound to a reactive value
#[component]
pub fn Input(
    /// Id of the input element
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "url", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <input
            id=id
            class="form__input"
            type=input_t
            prop:value=move || value.get()
            placeholder=input_placeholder
            disabled=disabled
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
