mod settings;

pub use settings::{ApiError, HttpSettingsApi, SettingsApi};
