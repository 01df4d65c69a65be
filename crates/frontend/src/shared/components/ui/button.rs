use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// aria-label for assistive tech and tests
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional, into)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {}", variant_class())
            aria-label=move || aria_label.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
