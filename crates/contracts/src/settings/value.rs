use serde_json::Value;

/// Placeholder the API returns for a secret that is set server-side.
/// The stored value is never exposed to the client, and the sentinel
/// must never be written back.
pub const ENCRYPTED_SENTINEL: &str = "$encrypted$";

/// Values of one settings category as they travel over the wire:
/// a JSON object keyed by setting name.
pub type SettingsMap = serde_json::Map<String, Value>;

/// Check whether a value is the encrypted sentinel.
pub fn is_encrypted(value: &Value) -> bool {
    value.as_str() == Some(ENCRYPTED_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_sentinel() {
        assert!(is_encrypted(&json!("$encrypted$")));
        assert!(!is_encrypted(&json!("")));
        assert!(!is_encrypted(&json!("hunter2")));
        assert!(!is_encrypted(&Value::Null));
        assert!(!is_encrypted(&json!({ "key": "$encrypted$" })));
    }
}
