//! GitHub Enterprise settings detail screen
//!
//! Read-only view of the category; the edit screen navigates here after
//! a successful save or cancel.

mod model;
mod view;

pub use view::GithubEnterpriseDetail;
