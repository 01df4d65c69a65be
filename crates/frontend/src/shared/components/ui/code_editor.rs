use leptos::prelude::*;

/// Plain-text editor for structured (JSON) settings
///
/// Accepts raw text; the owning form parses it and feeds any parse
/// error back through the `error` prop.
#[component]
pub fn CodeEditor(
    /// Id of the textarea element
    #[prop(into)]
    id: String,
    /// Raw text value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler with the raw text
    #[prop(optional, into)]
    on_change: Option<Callback<String>>,
    /// Parse error for the current text, if any
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let editor_rows = rows.unwrap_or(6);
    let editor_class = {
        let error = error.clone();
        move || {
            if error.get().is_some() {
                "form__textarea code-editor code-editor--invalid"
            } else {
                "form__textarea code-editor"
            }
        }
    };

    view! {
        <textarea
            id=id
            class=editor_class
            spellcheck="false"
            rows=editor_rows
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        ></textarea>
        {move || error.get().map(|text| view! {
            <small class="field-error text-error">{text}</small>
        })}
    }
}
