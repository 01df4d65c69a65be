use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model::{self, EditForm};
use crate::shared::api::SettingsApi;

/// ViewModel for the GitHub Enterprise settings edit form
///
/// Uses simplified MVVM pattern:
/// - Form data stored as EditForm (plain state, tested in model.rs)
/// - Commands for async operations (load, submit, revert all)
/// - Load failures are terminal for the mount; submit failures are
///   surfaced inline and keep the form editable
#[derive(Clone, Copy)]
pub struct GithubEnterpriseEditVm<A: SettingsApi + Clone + Copy + 'static> {
    api: A,
    pub loading: RwSignal<bool>,
    pub load_failed: RwSignal<bool>,
    pub form: RwSignal<Option<EditForm>>,
    pub submitting: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,
    pub revert_modal_open: RwSignal<bool>,
}

impl<A: SettingsApi + Clone + Copy + 'static> GithubEnterpriseEditVm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            loading: RwSignal::new(true),
            load_failed: RwSignal::new(false),
            form: RwSignal::new(None),
            submitting: RwSignal::new(false),
            submit_error: RwSignal::new(None),
            revert_modal_open: RwSignal::new(false),
        }
    }

    /// Load current values on mount
    pub fn load(&self) {
        let api = self.api;
        let loading = self.loading;
        let load_failed = self.load_failed;
        let form = self.form;
        loading.set(true);
        spawn_local(async move {
            match model::load_settings(&api).await {
                Ok(data) => form.set(Some(EditForm::github_enterprise(&data))),
                Err(e) => {
                    log::error!("Failed to load github-enterprise settings: {e}");
                    load_failed.set(true);
                }
            }
            loading.set(false);
        });
    }

    pub fn set_field(&self, name: &'static str, text: String) {
        self.form.update(|form| {
            if let Some(form) = form {
                form.set_input(name, &text);
            }
        });
    }

    pub fn revert_field(&self, name: &'static str) {
        self.form.update(|form| {
            if let Some(form) = form {
                form.revert_field(name);
            }
        });
    }

    /// Save the complete payload; on_saved runs only after the API
    /// accepted it
    pub fn submit_command(&self, on_saved: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(current) = self.form.get_untracked() else {
            return;
        };
        // Field-local parse errors are already visible on the controls
        if current.has_blocking_errors() {
            return;
        }

        // Сбрасываем ошибку перед повторной отправкой
        self.submit_error.set(None);
        self.submitting.set(true);

        let api = self.api;
        let submitting = self.submitting;
        let submit_error = self.submit_error;
        spawn_local(async move {
            match model::submit_settings(&api, &current).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save github-enterprise settings: {e}");
                    submit_error.set(Some(
                        e.detail.clone().unwrap_or_else(|| e.to_string()),
                    ));
                }
            }
            submitting.set(false);
        });
    }

    /// Open the confirmation dialog; no API call yet
    pub fn request_revert_all(&self) {
        self.revert_modal_open.set(true);
    }

    /// Dismiss the confirmation dialog without touching the API
    pub fn cancel_revert_all(&self) {
        self.revert_modal_open.set(false);
    }

    /// Confirmed: revert the category once and reflect the defaults
    pub fn confirm_revert_all(&self) {
        self.revert_modal_open.set(false);

        let api = self.api;
        let form = self.form;
        let submit_error = self.submit_error;
        spawn_local(async move {
            match model::revert_to_defaults(&api).await {
                Ok(defaults) => {
                    submit_error.set(None);
                    form.update(|form| {
                        if let Some(form) = form {
                            form.apply_reverted(&defaults);
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to revert github-enterprise settings: {e}");
                    submit_error.set(Some(
                        e.detail.clone().unwrap_or_else(|| e.to_string()),
                    ));
                }
            }
        });
    }
}
