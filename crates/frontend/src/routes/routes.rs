//! Route table and history integration
//!
//! Paths are pushed onto the browser history; a popstate listener keeps
//! the reactive current path in sync so back/forward work.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::settings::github_enterprise::ui::details::GithubEnterpriseDetail;
use crate::settings::github_enterprise::ui::edit::GithubEnterpriseEdit;
use crate::shared::content::ContentError;

pub const GITHUB_ENTERPRISE_EDIT: &str = "/settings/github/enterprise/edit";
pub const GITHUB_ENTERPRISE_DETAILS: &str = "/settings/github/enterprise/details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    GithubEnterpriseDetails,
    GithubEnterpriseEdit,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let normalized = path.trim_end_matches('/');
        match normalized {
            GITHUB_ENTERPRISE_EDIT => Self::GithubEnterpriseEdit,
            GITHUB_ENTERPRISE_DETAILS => Self::GithubEnterpriseDetails,
            // Landing paths fall through to the category detail screen
            "" | "/settings" | "/settings/github" | "/settings/github/enterprise" => {
                Self::GithubEnterpriseDetails
            }
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::GithubEnterpriseDetails => GITHUB_ENTERPRISE_DETAILS,
            Self::GithubEnterpriseEdit => GITHUB_ENTERPRISE_EDIT,
            Self::NotFound => "/",
        }
    }
}

/// Reactive wrapper over the browser history
#[derive(Clone, Copy)]
pub struct Router {
    pub path: RwSignal<String>,
}

impl Router {
    pub fn new() -> Self {
        let initial = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Self {
            path: RwSignal::new(initial),
        }
    }

    /// Push a new path and re-render the matching screen
    pub fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(path),
                );
            }
        }
        self.path.set(path.to_string());
    }

    pub fn current(&self) -> Route {
        self.path.with(|path| Route::parse(path))
    }

    /// Keep the path signal in sync with browser back/forward
    pub fn init_popstate(&self) {
        let path = self.path;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let current = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string());
            path.set(current);
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let router = use_context::<Router>().expect("Router context not found");

    view! {
        {move || match router.current() {
            Route::GithubEnterpriseEdit => view! { <GithubEnterpriseEdit/> }.into_any(),
            Route::GithubEnterpriseDetails => view! { <GithubEnterpriseDetail/> }.into_any(),
            Route::NotFound => view! {
                <ContentError message="Page not found".to_string()/>
            }
            .into_any(),
        }}
    }
}
