//! GitHub Enterprise settings edit screen
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: form state, payload assembly, API flows
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::{EditForm, FieldEdit};
pub use view::GithubEnterpriseEdit;
pub use view_model::GithubEnterpriseEditVm;
