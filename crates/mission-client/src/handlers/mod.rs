pub mod board;
pub mod mission;
pub mod view;

use serde::de::DeserializeOwned;

/// Parse a wire-format enum name such as `inProgress` or `desc`.
fn parse_choice<T: DeserializeOwned>(kind: &str, raw: &str, valid: &str) -> anyhow::Result<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).map_err(|_| {
        anyhow::anyhow!("Invalid {} '{}'. Valid values: {}", kind, raw, valid)
    })
}
