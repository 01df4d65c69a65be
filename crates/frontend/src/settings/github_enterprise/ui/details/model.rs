use contracts::settings::{is_encrypted, FieldKind, FieldMeta};
use serde_json::Value;

/// Text shown for one setting on the detail screen
///
/// Secrets are never displayed; a stored secret shows as "Encrypted".
pub fn display_value(meta: &FieldMeta, value: Option<&Value>) -> String {
    let value = value.unwrap_or(&Value::Null);
    if meta.kind == FieldKind::Secret && is_encrypted(value) {
        return "Encrypted".to_string();
    }
    match value {
        Value::Null => "Not configured".to_string(),
        Value::String(s) if s.is_empty() => "Not configured".to_string(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::settings::category::GITHUB_ENTERPRISE_CATEGORY;
    use serde_json::json;

    fn field(name: &str) -> &'static FieldMeta {
        GITHUB_ENTERPRISE_CATEGORY.field(name).unwrap()
    }

    #[test]
    fn stored_secret_displays_as_encrypted() {
        let secret = field("SOCIAL_AUTH_GITHUB_ENTERPRISE_SECRET");
        assert_eq!(
            display_value(secret, Some(&json!("$encrypted$"))),
            "Encrypted"
        );
        assert_eq!(display_value(secret, Some(&json!(""))), "Not configured");
    }

    #[test]
    fn missing_and_null_values_display_as_not_configured() {
        let url = field("SOCIAL_AUTH_GITHUB_ENTERPRISE_URL");
        assert_eq!(display_value(url, None), "Not configured");
        assert_eq!(display_value(url, Some(&Value::Null)), "Not configured");
    }

    #[test]
    fn map_values_display_as_pretty_json() {
        let org = field("SOCIAL_AUTH_GITHUB_ENTERPRISE_ORGANIZATION_MAP");
        let shown = display_value(org, Some(&json!({ "Default": { "users": false } })));
        assert!(shown.contains("\"Default\""));
        assert!(shown.contains('\n'));
    }

    #[test]
    fn strings_display_verbatim() {
        let url = field("SOCIAL_AUTH_GITHUB_ENTERPRISE_URL");
        assert_eq!(
            display_value(url, Some(&json!("https://github.example.com"))),
            "https://github.example.com"
        );
    }
}
