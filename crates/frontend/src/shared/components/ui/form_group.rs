use leptos::prelude::*;

use crate::shared::icons::icon;

/// Labeled wrapper around a single form control
///
/// Carries the stable field label, optional help text and the per-field
/// revert control. The control itself is passed as children.
#[component]
pub fn FormGroup(
    /// Id of the wrapped control, for the label
    #[prop(into)]
    field_id: String,
    /// Stable human-readable label
    #[prop(into)]
    label: String,
    /// Help text shown under the control
    #[prop(optional, into)]
    help_text: MaybeProp<String>,
    /// Revert control; omitted for read-only fields
    #[prop(optional, into)]
    on_revert: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let label_for = field_id.clone();

    view! {
        <div class="form__group" data-field=field_id>
            <div class="form__label-row">
                <label class="form__label" for=label_for>{label}</label>
                {on_revert.map(|handler| view! {
                    <button
                        type="button"
                        class="button button--ghost form__revert"
                        aria-label="Revert"
                        on:click=move |_| handler.run(())
                    >
                        {icon("undo")}
                        "Revert"
                    </button>
                })}
            </div>
            {children()}
            {move || help_text.get().map(|text| view! {
                <small class="help-text">{text}</small>
            })}
        </div>
    }
}
