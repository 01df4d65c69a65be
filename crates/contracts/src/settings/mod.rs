//! Settings domain contracts
//!
//! Shared between the console frontend and any client of the settings API:
//! - value.rs: wire shape of category values, encrypted sentinel
//! - field.rs: field metadata driving the generic settings UI
//! - category.rs: category definitions and registry lookup

pub mod category;
pub mod field;
pub mod value;

pub use category::{category, CategoryMeta, GITHUB_ENTERPRISE};
pub use field::{FieldKind, FieldMeta};
pub use value::{is_encrypted, SettingsMap, ENCRYPTED_SENTINEL};
