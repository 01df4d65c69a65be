//! Category definitions and registry
//!
//! A category is a named group of settings managed as a unit: the API
//! reads, updates and reverts it atomically, the UI renders one screen
//! per category.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::field::{FieldKind, FieldMeta};

/// Category key for the GitHub Enterprise SSO settings
pub const GITHUB_ENTERPRISE: &str = "github-enterprise";

/// Metadata for one settings category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub key: &'static str,
    pub title: &'static str,
    /// Fields in render order
    pub fields: &'static [FieldMeta],
}

impl CategoryMeta {
    /// Fields that belong in an edit payload, in render order
    pub fn editable_fields(&self) -> impl Iterator<Item = &'static FieldMeta> {
        self.fields.iter().filter(|f| !f.read_only)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ============================================================================
// GitHub Enterprise category
// ============================================================================

static GITHUB_ENTERPRISE_FIELDS: [FieldMeta; 7] = [
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_CALLBACK_URL",
        label: "GitHub Enterprise OAuth2 Callback URL",
        help_text: "Register this callback URL with your GitHub Enterprise \
                    developer application.",
        kind: FieldKind::Url,
        read_only: true,
    },
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_URL",
        label: "GitHub Enterprise URL",
        help_text: "The URL for your GitHub Enterprise instance, e.g. \
                    https://github.example.com/.",
        kind: FieldKind::Url,
        read_only: false,
    },
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_API_URL",
        label: "GitHub Enterprise API URL",
        help_text: "The API URL for your GitHub Enterprise instance, e.g. \
                    https://github.example.com/api/v3/.",
        kind: FieldKind::Url,
        read_only: false,
    },
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_KEY",
        label: "GitHub Enterprise OAuth2 Key",
        help_text: "The OAuth2 key (Client ID) from your GitHub Enterprise \
                    developer application.",
        kind: FieldKind::Text,
        read_only: false,
    },
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_SECRET",
        label: "GitHub Enterprise OAuth2 Secret",
        help_text: "The OAuth2 secret (Client Secret) from your GitHub \
                    Enterprise developer application.",
        kind: FieldKind::Secret,
        read_only: false,
    },
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_ORGANIZATION_MAP",
        label: "GitHub Enterprise OAuth2 Organization Map",
        help_text: "Mapping to control which users are placed into which \
                    organizations after login, as a JSON object.",
        kind: FieldKind::Map,
        read_only: false,
    },
    FieldMeta {
        name: "SOCIAL_AUTH_GITHUB_ENTERPRISE_TEAM_MAP",
        label: "GitHub Enterprise OAuth2 Team Map",
        help_text: "Mapping of team members to teams after login, as a JSON \
                    object.",
        kind: FieldKind::Map,
        read_only: false,
    },
];

pub static GITHUB_ENTERPRISE_CATEGORY: CategoryMeta = CategoryMeta {
    key: GITHUB_ENTERPRISE,
    title: "GitHub Enterprise",
    fields: &GITHUB_ENTERPRISE_FIELDS,
};

static REGISTRY: Lazy<HashMap<&'static str, &'static CategoryMeta>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(GITHUB_ENTERPRISE, &GITHUB_ENTERPRISE_CATEGORY);
    map
});

/// Look up a category by key
pub fn category(key: &str) -> Option<&'static CategoryMeta> {
    REGISTRY.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_resolves_github_enterprise() {
        let meta = category("github-enterprise").unwrap();
        assert_eq!(meta.key, GITHUB_ENTERPRISE);
        assert_eq!(meta.title, "GitHub Enterprise");
        assert!(category("no-such-category").is_none());
    }

    #[test]
    fn has_exactly_six_editable_fields() {
        let meta = category(GITHUB_ENTERPRISE).unwrap();
        assert_eq!(meta.editable_fields().count(), 6);
        assert_eq!(meta.fields.len(), 7);
    }

    #[test]
    fn field_names_and_labels_are_unique() {
        let meta = category(GITHUB_ENTERPRISE).unwrap();
        let names: HashSet<_> = meta.fields.iter().map(|f| f.name).collect();
        let labels: HashSet<_> = meta.fields.iter().map(|f| f.label).collect();
        assert_eq!(names.len(), meta.fields.len());
        assert_eq!(labels.len(), meta.fields.len());
    }

    #[test]
    fn expected_labels_are_present() {
        let meta = category(GITHUB_ENTERPRISE).unwrap();
        for label in [
            "GitHub Enterprise URL",
            "GitHub Enterprise API URL",
            "GitHub Enterprise OAuth2 Key",
            "GitHub Enterprise OAuth2 Secret",
            "GitHub Enterprise OAuth2 Organization Map",
            "GitHub Enterprise OAuth2 Team Map",
        ] {
            let matches = meta
                .fields
                .iter()
                .filter(|f| f.label == label && !f.read_only)
                .count();
            assert_eq!(matches, 1, "expected exactly one field labeled {label}");
        }
    }

    #[test]
    fn callback_url_is_read_only() {
        let meta = category(GITHUB_ENTERPRISE).unwrap();
        let callback = meta
            .field("SOCIAL_AUTH_GITHUB_ENTERPRISE_CALLBACK_URL")
            .unwrap();
        assert!(callback.read_only);
        assert!(!meta
            .editable_fields()
            .any(|f| f.name == callback.name));
    }

    #[test]
    fn secret_and_map_kinds_match() {
        let meta = category(GITHUB_ENTERPRISE).unwrap();
        assert_eq!(
            meta.field("SOCIAL_AUTH_GITHUB_ENTERPRISE_SECRET")
                .unwrap()
                .kind,
            FieldKind::Secret
        );
        assert_eq!(
            meta.field("SOCIAL_AUTH_GITHUB_ENTERPRISE_ORGANIZATION_MAP")
                .unwrap()
                .kind,
            FieldKind::Map
        );
        assert_eq!(
            meta.field("SOCIAL_AUTH_GITHUB_ENTERPRISE_TEAM_MAP")
                .unwrap()
                .kind,
            FieldKind::Map
        );
    }
}
