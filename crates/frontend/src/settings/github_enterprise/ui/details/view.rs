use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::settings::category::GITHUB_ENTERPRISE_CATEGORY;
use contracts::settings::{SettingsMap, GITHUB_ENTERPRISE};

use super::model::display_value;
use crate::routes::{Router, GITHUB_ENTERPRISE_EDIT};
use crate::shared::api::{HttpSettingsApi, SettingsApi};
use crate::shared::components::ui::Button;
use crate::shared::content::{ContentError, ContentLoading};
use crate::shared::icons::icon;

#[component]
pub fn GithubEnterpriseDetail() -> impl IntoView {
    let router = use_context::<Router>().expect("Router context not found");

    let loading = RwSignal::new(true);
    let load_failed = RwSignal::new(false);
    let values: RwSignal<Option<SettingsMap>> = RwSignal::new(None);

    spawn_local(async move {
        match HttpSettingsApi.read_category(GITHUB_ENTERPRISE).await {
            Ok(data) => values.set(Some(data)),
            Err(e) => {
                log::error!("Failed to load github-enterprise settings: {e}");
                load_failed.set(true);
            }
        }
        loading.set(false);
    });

    view! {
        <div class="page-frame settings-detail">
            <div class="page-header">
                <h1 class="page-title">"GitHub Enterprise Settings"</h1>
                <Button
                    aria_label="Edit"
                    on_click=Callback::new(move |_| router.navigate(GITHUB_ENTERPRISE_EDIT))
                >
                    {icon("edit")}
                    "Edit"
                </Button>
            </div>
            {move || {
                if loading.get() {
                    view! { <ContentLoading/> }.into_any()
                } else if load_failed.get() {
                    view! { <ContentError/> }.into_any()
                } else {
                    let rows = GITHUB_ENTERPRISE_CATEGORY
                        .fields
                        .iter()
                        .map(|meta| {
                            view! {
                                <div class="detail-row">
                                    <dt class="detail-row__label">{meta.label}</dt>
                                    <dd class="detail-row__value">
                                        {move || {
                                            values.with(|data| {
                                                display_value(
                                                    meta,
                                                    data.as_ref().and_then(|map| map.get(meta.name)),
                                                )
                                            })
                                        }}
                                    </dd>
                                </div>
                            }
                        })
                        .collect_view();
                    view! { <dl class="detail-list">{rows}</dl> }.into_any()
                }
            }}
        </div>
    }
}
