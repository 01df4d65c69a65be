use leptos::prelude::*;

use contracts::settings::category::GITHUB_ENTERPRISE_CATEGORY;
use contracts::settings::{FieldKind, FieldMeta};

use super::view_model::GithubEnterpriseEditVm;
use crate::routes::{Router, GITHUB_ENTERPRISE_DETAILS};
use crate::shared::api::{HttpSettingsApi, SettingsApi};
use crate::shared::components::ui::{Button, CodeEditor, FormGroup, Input, SecretInput};
use crate::shared::content::{ContentError, ContentLoading};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmModal;

const REVERT_ALL_MESSAGE: &str = "This will revert all configuration values on this page to \
     their factory defaults. Are you sure you want to proceed?";

#[component]
pub fn GithubEnterpriseEdit() -> impl IntoView {
    let vm = GithubEnterpriseEditVm::new(HttpSettingsApi);
    let router = use_context::<Router>().expect("Router context not found");

    // Load data on mount
    vm.load();

    let on_saved = Callback::new(move |_| router.navigate(GITHUB_ENTERPRISE_DETAILS));

    view! {
        <div class="page-frame settings-edit">
            <h1 class="page-title">"GitHub Enterprise Settings"</h1>
            {move || {
                if vm.loading.get() {
                    view! { <ContentLoading/> }.into_any()
                } else if vm.load_failed.get() {
                    view! { <ContentError/> }.into_any()
                } else {
                    edit_form(vm, router, on_saved).into_any()
                }
            }}
        </div>
    }
}

fn edit_form<A: SettingsApi + Clone + Copy + 'static + Send + Sync>(
    vm: GithubEnterpriseEditVm<A>,
    router: Router,
    on_saved: Callback<()>,
) -> impl IntoView {
    let controls = GITHUB_ENTERPRISE_CATEGORY
        .editable_fields()
        .map(|meta| field_group(vm, meta))
        .collect_view();

    view! {
        <form
            class="settings-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command(on_saved);
            }
        >
            {controls}

            {move || vm.submit_error.get().map(|detail| view! {
                <div class="warning-box text-error form-submit-error" role="alert">
                    {icon("alert")}
                    <p>{detail}</p>
                </div>
            })}

            <div class="form-actions">
                <Button
                    button_type="submit"
                    aria_label="Save"
                    disabled=Signal::derive(move || vm.submitting.get())
                >
                    {icon("save")}
                    "Save"
                </Button>
                <Button
                    variant="secondary"
                    aria_label="Revert all to default"
                    on_click=Callback::new(move |_| vm.request_revert_all())
                >
                    "Revert all to default"
                </Button>
                <Button
                    variant="secondary"
                    aria_label="Cancel"
                    on_click=Callback::new(move |_| router.navigate(GITHUB_ENTERPRISE_DETAILS))
                >
                    "Cancel"
                </Button>
            </div>
        </form>

        <Show when=move || vm.revert_modal_open.get()>
            <ConfirmModal
                title="Revert settings".to_string()
                message=REVERT_ALL_MESSAGE.to_string()
                confirm_label="Revert all"
                confirm_aria_label="Confirm revert all"
                on_confirm=Callback::new(move |_| vm.confirm_revert_all())
                on_cancel=Callback::new(move |_| vm.cancel_revert_all())
            />
        </Show>
    }
}

/// One labeled control, picked by field kind
fn field_group<A: SettingsApi + Clone + Copy + 'static + Send + Sync>(
    vm: GithubEnterpriseEditVm<A>,
    meta: &'static FieldMeta,
) -> AnyView {
    let value = Signal::derive(move || {
        vm.form.with(|form| {
            form.as_ref()
                .and_then(|f| f.field(meta.name))
                .map(|f| f.input.clone())
                .unwrap_or_default()
        })
    });
    let on_input = Callback::new(move |text: String| vm.set_field(meta.name, text));
    let on_revert = Callback::new(move |_| vm.revert_field(meta.name));

    let control = match meta.kind {
        FieldKind::Secret => {
            let encrypted = Signal::derive(move || {
                vm.form.with(|form| {
                    form.as_ref()
                        .and_then(|f| f.field(meta.name))
                        .map(|f| f.encrypted)
                        .unwrap_or(false)
                })
            });
            view! {
                <SecretInput id=meta.name value=value encrypted=encrypted on_input=on_input/>
            }
            .into_any()
        }
        FieldKind::Map => {
            let error = Signal::derive(move || {
                vm.form.with(|form| {
                    form.as_ref()
                        .and_then(|f| f.field(meta.name))
                        .and_then(|f| f.parse_error.clone())
                })
            });
            view! {
                <CodeEditor id=meta.name value=value on_change=on_input error=error/>
            }
            .into_any()
        }
        FieldKind::Url => view! {
            <Input id=meta.name value=value on_input=on_input input_type="url"/>
        }
        .into_any(),
        FieldKind::Text => view! {
            <Input id=meta.name value=value on_input=on_input/>
        }
        .into_any(),
    };

    view! {
        <FormGroup
            field_id=meta.name
            label=meta.label
            help_text=meta.help_text
            on_revert=on_revert
        >
            {control}
        </FormGroup>
    }
    .into_any()
}
