use contracts::settings::category::GITHUB_ENTERPRISE_CATEGORY;
use contracts::settings::{is_encrypted, CategoryMeta, FieldKind, FieldMeta, SettingsMap, GITHUB_ENTERPRISE};
use serde_json::Value;

use crate::shared::api::{ApiError, SettingsApi};

/// Edit state of a single setting
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub meta: &'static FieldMeta,
    /// Raw text as shown in the control
    pub input: String,
    /// Loaded as the encrypted sentinel and not yet touched
    pub encrypted: bool,
    /// Parse error for map fields; blocks submit
    pub parse_error: Option<String>,
}

impl FieldEdit {
    fn from_loaded(meta: &'static FieldMeta, value: Option<&Value>) -> Self {
        let value = value.unwrap_or(&Value::Null);
        let encrypted = meta.kind == FieldKind::Secret && is_encrypted(value);
        let input = if encrypted {
            String::new()
        } else {
            display_text(meta.kind, value)
        };
        Self {
            meta,
            input,
            encrypted,
            parse_error: None,
        }
    }
}

/// Form state for one settings category
///
/// Holds one entry per editable field, in registry order. Values edited
/// here override the loaded ones when the payload is assembled; the
/// payload always carries the complete editable field set.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    meta: &'static CategoryMeta,
    pub fields: Vec<FieldEdit>,
}

impl EditForm {
    pub fn new(meta: &'static CategoryMeta, data: &SettingsMap) -> Self {
        let fields = meta
            .editable_fields()
            .map(|field| FieldEdit::from_loaded(field, data.get(field.name)))
            .collect();
        Self { meta, fields }
    }

    pub fn github_enterprise(data: &SettingsMap) -> Self {
        Self::new(&GITHUB_ENTERPRISE_CATEGORY, data)
    }

    pub fn field(&self, name: &str) -> Option<&FieldEdit> {
        self.fields.iter().find(|f| f.meta.name == name)
    }

    /// Record an edit. Touching a secret replaces the stored value; map
    /// fields are re-parsed and keep a field-local error on bad input.
    pub fn set_input(&mut self, name: &str, text: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.meta.name == name) {
            field.input = text.to_string();
            field.encrypted = false;
            field.parse_error = match field.meta.kind {
                FieldKind::Map => parse_map_input(text).err(),
                _ => None,
            };
        }
    }

    /// Clear one field to its empty representation, regardless of what
    /// the server currently stores.
    pub fn revert_field(&mut self, name: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.meta.name == name) {
            field.input.clear();
            field.encrypted = false;
            field.parse_error = None;
        }
    }

    /// Rebuild the form from the values reported after a category revert
    pub fn apply_reverted(&mut self, data: &SettingsMap) {
        *self = Self::new(self.meta, data);
    }

    /// Any field-local validation error pending
    pub fn has_blocking_errors(&self) -> bool {
        self.fields.iter().any(|f| f.parse_error.is_some())
    }

    /// Assemble the update payload: every editable field of the
    /// category, edited values overriding loaded ones.
    ///
    /// Map fields submit as parsed structures or null, never raw text.
    /// A secret still holding the server-side sentinel is omitted so the
    /// stored secret is kept; the sentinel itself is never written back.
    pub fn build_payload(&self) -> SettingsMap {
        let mut payload = SettingsMap::new();
        for field in &self.fields {
            match field.meta.kind {
                FieldKind::Secret if field.encrypted => continue,
                FieldKind::Map => {
                    let value = parse_map_input(&field.input).unwrap_or(Value::Null);
                    payload.insert(field.meta.name.to_string(), value);
                }
                _ => {
                    payload.insert(
                        field.meta.name.to_string(),
                        Value::String(field.input.clone()),
                    );
                }
            }
        }
        payload
    }
}

/// Text representation of a loaded value
fn display_text(kind: FieldKind, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => match kind {
            FieldKind::Map => serde_json::to_string_pretty(other).unwrap_or_default(),
            _ => other.to_string(),
        },
    }
}

/// Parse raw map-field text. Empty text means "not configured" (null);
/// anything else must be a JSON object.
pub fn parse_map_input(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {e}"))?;
    if !value.is_object() {
        return Err("Expected a JSON object".to_string());
    }
    Ok(value)
}

// ============================================================================
// API flows
// ============================================================================

/// Read current values for the category
pub async fn load_settings<A: SettingsApi>(api: &A) -> Result<SettingsMap, ApiError> {
    api.read_category(GITHUB_ENTERPRISE).await
}

/// Send the full payload. Exactly one update call per invocation; the
/// caller decides whether the error is surfaced inline.
pub async fn submit_settings<A: SettingsApi>(api: &A, form: &EditForm) -> Result<(), ApiError> {
    api.update_all(&form.build_payload()).await
}

/// Revert the category to system defaults, then re-read it so the form
/// can reflect them.
pub async fn revert_to_defaults<A: SettingsApi>(api: &A) -> Result<SettingsMap, ApiError> {
    api.revert_category(GITHUB_ENTERPRISE).await?;
    api.read_category(GITHUB_ENTERPRISE).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    const URL: &str = "SOCIAL_AUTH_GITHUB_ENTERPRISE_URL";
    const API_URL: &str = "SOCIAL_AUTH_GITHUB_ENTERPRISE_API_URL";
    const KEY: &str = "SOCIAL_AUTH_GITHUB_ENTERPRISE_KEY";
    const SECRET: &str = "SOCIAL_AUTH_GITHUB_ENTERPRISE_SECRET";
    const ORG_MAP: &str = "SOCIAL_AUTH_GITHUB_ENTERPRISE_ORGANIZATION_MAP";
    const TEAM_MAP: &str = "SOCIAL_AUTH_GITHUB_ENTERPRISE_TEAM_MAP";

    fn loaded_settings() -> SettingsMap {
        let data = json!({
            "SOCIAL_AUTH_GITHUB_ENTERPRISE_CALLBACK_URL":
                "https://platformhost/sso/complete/github-enterprise/",
            URL: "",
            API_URL: "",
            KEY: "",
            SECRET: "$encrypted$",
            ORG_MAP: null,
            TEAM_MAP: null,
        });
        match data {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn form() -> EditForm {
        EditForm::github_enterprise(&loaded_settings())
    }

    #[test]
    fn builds_one_entry_per_editable_field() {
        let form = form();
        assert_eq!(form.fields.len(), 6);
        let names: Vec<_> = form.fields.iter().map(|f| f.meta.name).collect();
        assert_eq!(names, [URL, API_URL, KEY, SECRET, ORG_MAP, TEAM_MAP]);
        // read-only callback URL is not an edit field
        assert!(form.field("SOCIAL_AUTH_GITHUB_ENTERPRISE_CALLBACK_URL").is_none());
    }

    #[test]
    fn secret_loads_as_encrypted_with_empty_input() {
        let form = form();
        let secret = form.field(SECRET).unwrap();
        assert!(secret.encrypted);
        assert_eq!(secret.input, "");
    }

    #[test]
    fn map_values_load_as_text() {
        let mut data = loaded_settings();
        data.insert(ORG_MAP.to_string(), json!({ "Default": { "users": true } }));
        let form = EditForm::github_enterprise(&data);
        let org = form.field(ORG_MAP).unwrap();
        let parsed: Value = serde_json::from_str(&org.input).unwrap();
        assert_eq!(parsed, json!({ "Default": { "users": true } }));
        // null loads as empty text
        assert_eq!(form.field(TEAM_MAP).unwrap().input, "");
    }

    #[test]
    fn reverted_secret_submits_empty_string() {
        let mut form = form();
        form.revert_field(SECRET);
        let payload = form.build_payload();
        assert_eq!(payload.get(SECRET), Some(&json!("")));
    }

    #[test]
    fn untouched_encrypted_secret_is_omitted_from_payload() {
        let form = form();
        let payload = form.build_payload();
        assert!(!payload.contains_key(SECRET));
        assert!(payload
            .values()
            .all(|v| v.as_str() != Some("$encrypted$")));
        for name in [URL, API_URL, KEY, ORG_MAP, TEAM_MAP] {
            assert!(payload.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn edited_secret_submits_new_value() {
        let mut form = form();
        form.set_input(SECRET, "new-secret");
        let payload = form.build_payload();
        assert_eq!(payload.get(SECRET), Some(&json!("new-secret")));
    }

    #[test]
    fn revert_field_clears_server_backed_value() {
        let mut data = loaded_settings();
        data.insert(URL.to_string(), json!("https://github.example.com"));
        let mut form = EditForm::github_enterprise(&data);
        form.revert_field(URL);
        assert_eq!(form.field(URL).unwrap().input, "");
        assert_eq!(form.build_payload().get(URL), Some(&json!("")));
    }

    #[test]
    fn full_payload_covers_all_editable_fields() {
        let mut form = form();
        form.revert_field(SECRET);
        form.set_input(URL, "https://localhost");
        form.set_input(ORG_MAP, "{\n\"Default\":{\n\"users\":\nfalse\n}\n}");
        let payload = form.build_payload();

        let expected = json!({
            URL: "https://localhost",
            API_URL: "",
            KEY: "",
            SECRET: "",
            TEAM_MAP: null,
            ORG_MAP: { "Default": { "users": false } },
        });
        assert_eq!(Value::Object(payload), expected);
    }

    #[test]
    fn malformed_map_input_blocks_submit() {
        let mut form = form();
        form.set_input(ORG_MAP, "{ not json");
        assert!(form.field(ORG_MAP).unwrap().parse_error.is_some());
        assert!(form.has_blocking_errors());

        form.set_input(ORG_MAP, "{\"Default\": {}}");
        assert!(form.field(ORG_MAP).unwrap().parse_error.is_none());
        assert!(!form.has_blocking_errors());
    }

    #[test]
    fn map_input_must_be_an_object() {
        assert!(parse_map_input("[1, 2]").is_err());
        assert!(parse_map_input("\"text\"").is_err());
        assert_eq!(parse_map_input("   "), Ok(Value::Null));
        assert_eq!(
            parse_map_input("{\"a\": 1}"),
            Ok(json!({ "a": 1 }))
        );
    }

    #[test]
    fn apply_reverted_reloads_defaults() {
        let mut form = form();
        form.set_input(URL, "https://localhost");
        let mut defaults = loaded_settings();
        defaults.insert(SECRET.to_string(), json!(""));
        form.apply_reverted(&defaults);
        assert_eq!(form.field(URL).unwrap().input, "");
        assert!(!form.field(SECRET).unwrap().encrypted);
    }

    // ========================================================================
    // API flows against a scripted client
    // ========================================================================

    #[derive(Default)]
    struct MockApi {
        data: SettingsMap,
        fail_read: bool,
        fail_update: Option<ApiError>,
        read_calls: Cell<u32>,
        update_calls: Cell<u32>,
        revert_calls: RefCell<Vec<String>>,
        last_payload: RefCell<Option<SettingsMap>>,
    }

    impl MockApi {
        fn with_data(data: SettingsMap) -> Self {
            Self {
                data,
                ..Self::default()
            }
        }
    }

    impl SettingsApi for MockApi {
        async fn read_category(&self, category: &str) -> Result<SettingsMap, ApiError> {
            assert_eq!(category, "github-enterprise");
            self.read_calls.set(self.read_calls.get() + 1);
            if self.fail_read {
                return Err(ApiError {
                    status: Some(500),
                    message: "HTTP 500".to_string(),
                    detail: None,
                });
            }
            Ok(self.data.clone())
        }

        async fn update_all(&self, payload: &SettingsMap) -> Result<(), ApiError> {
            self.update_calls.set(self.update_calls.get() + 1);
            *self.last_payload.borrow_mut() = Some(payload.clone());
            match &self.fail_update {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn revert_category(&self, category: &str) -> Result<(), ApiError> {
            self.revert_calls.borrow_mut().push(category.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn submit_calls_update_once_with_full_payload() {
        let api = MockApi::default();
        let mut form = form();
        form.revert_field(SECRET);
        form.set_input(URL, "https://localhost");
        form.set_input(ORG_MAP, "{\n\"Default\":{\n\"users\":\nfalse\n}\n}");

        submit_settings(&api, &form).await.unwrap();

        assert_eq!(api.update_calls.get(), 1);
        let sent = api.last_payload.borrow().clone().unwrap();
        assert_eq!(
            Value::Object(sent),
            json!({
                URL: "https://localhost",
                API_URL: "",
                KEY: "",
                SECRET: "",
                TEAM_MAP: null,
                ORG_MAP: { "Default": { "users": false } },
            })
        );
    }

    #[tokio::test]
    async fn failed_submit_keeps_server_detail_and_single_call() {
        let api = MockApi {
            fail_update: Some(ApiError {
                status: Some(400),
                message: "HTTP 400".to_string(),
                detail: Some("An error occurred".to_string()),
            }),
            ..MockApi::default()
        };
        let form = form();

        let err = submit_settings(&api, &form).await.unwrap_err();

        assert_eq!(api.update_calls.get(), 1);
        assert_eq!(err.detail.as_deref(), Some("An error occurred"));
    }

    #[tokio::test]
    async fn revert_flow_reverts_once_then_rereads() {
        let api = MockApi::with_data(loaded_settings());

        let defaults = revert_to_defaults(&api).await.unwrap();

        assert_eq!(
            api.revert_calls.borrow().as_slice(),
            ["github-enterprise".to_string()]
        );
        assert_eq!(api.read_calls.get(), 1);
        assert!(defaults.contains_key(URL));
    }

    #[tokio::test]
    async fn load_failure_propagates() {
        let api = MockApi {
            fail_read: true,
            ..MockApi::default()
        };
        assert!(load_settings(&api).await.is_err());
        assert_eq!(api.read_calls.get(), 1);
    }

    #[tokio::test]
    async fn load_returns_category_values() {
        let api = MockApi::with_data(loaded_settings());
        let data = load_settings(&api).await.unwrap();
        let form = EditForm::github_enterprise(&data);
        assert_eq!(form.fields.len(), 6);
    }
}
