use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::icons::icon;

/// Confirmation dialog rendered over the current screen
///
/// Canceling (button, overlay click or Escape) closes the dialog without
/// side effects; only the confirm action runs the supplied callback.
#[component]
pub fn ConfirmModal(
    /// Title of the dialog
    title: String,
    /// Explanation shown above the actions
    message: String,
    /// Confirm button caption
    #[prop(into)]
    confirm_label: String,
    /// aria-label for the confirm button
    #[prop(into)]
    confirm_aria_label: String,
    /// Callback when the action is confirmed
    on_confirm: Callback<()>,
    /// Callback when the dialog is dismissed
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_cancel.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let handle_overlay_click = move |_| {
        on_cancel.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal modal--confirm" role="alertdialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Close"
                        on:click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <p>{message}</p>
                </div>
                <div class="modal-actions">
                    <button
                        class="button button--primary"
                        aria-label=confirm_aria_label
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                    <button
                        class="button button--secondary"
                        aria-label="Cancel revert all"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
