pub mod routes;

pub use routes::{AppRoutes, Route, Router, GITHUB_ENTERPRISE_DETAILS, GITHUB_ENTERPRISE_EDIT};
