use leptos::prelude::*;

use crate::shared::icons::icon;

/// Loading indicator shown while a screen waits for the API
#[component]
pub fn ContentLoading() -> impl IntoView {
    view! {
        <div class="content-loading" role="status">
            <div class="spinner" aria-hidden="true"></div>
            <span>"Loading..."</span>
        </div>
    }
}

/// Replaces a screen whose initial load failed
#[component]
pub fn ContentError(
    #[prop(optional, into)] message: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="content-error warning-box text-error">
            {icon("alert")}
            <p>
                {move || {
                    message
                        .get()
                        .unwrap_or_else(|| "Something went wrong. Please try again.".to_string())
                }}
            </p>
        </div>
    }
}
