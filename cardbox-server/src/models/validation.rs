//! Validation error types

use std::fmt;

use serde::Serialize;

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// One rejected input location.
///
/// Serialized as `{"loc": [...], "msg": "...", "type": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ValidationError {
    /// Request body could not be read or deserialized
    pub fn body(msg: impl Into<String>, kind: &'static str) -> Self {
        let msg = msg.into();
        let mut loc = vec!["body".to_string()];
        let kind = if let Some(field) = missing_field(&msg) {
            loc.push(field.to_string());
            "missing"
        } else {
            if let Some(path) = field_path(&msg) {
                loc.extend(path.split('.').map(str::to_string));
            }
            kind
        };

        Self { loc, msg, kind }
    }

    /// Path parameter failed to parse
    pub fn path(field: &str, msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc: vec!["path".to_string(), field.to_string()],
            msg: msg.into(),
            kind,
        }
    }
}

/// Pull the field name out of serde's "missing field `name`" message
fn missing_field(msg: &str) -> Option<&str> {
    let rest = &msg[msg.find("missing field `")? + "missing field `".len()..];
    rest.split('`').next().filter(|field| !field.is_empty())
}

/// Pull the field path out of a "x: invalid type ..." deserialization message
fn field_path(msg: &str) -> Option<&str> {
    let rest = msg.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(msg);
    let (path, _) = rest.split_once(": ")?;
    let is_path = !path.is_empty() && !path.contains(char::is_whitespace);
    is_path.then_some(path)
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

impl std::error::Error for ValidationError {}
