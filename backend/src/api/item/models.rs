//! Request payloads for the bucket list item endpoints.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Create request; `name` is required but optional at the serde level so a
/// missing field maps to a 400 validation error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1-255 characters"))]
    pub name: Option<String>,
}

/// Update request; both fields optional, absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1-255 characters"))]
    pub name: Option<String>,

    /// Completion flag; accepts a JSON bool or a 0/1 integer.
    #[serde(default, deserialize_with = "deserialize_done")]
    pub done: Option<bool>,
}

fn deserialize_done<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;

    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b)),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(|i| Some(i != 0))
            .ok_or_else(|| Error::custom("done must be a bool or 0/1")),
        Some(other) => Err(Error::custom(format!(
            "done must be a bool or 0/1, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_accepts_bool_and_int() {
        let req: UpdateItemRequest = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(req.done, Some(true));

        let req: UpdateItemRequest = serde_json::from_str(r#"{"done": 1}"#).unwrap();
        assert_eq!(req.done, Some(true));

        let req: UpdateItemRequest = serde_json::from_str(r#"{"done": 0}"#).unwrap();
        assert_eq!(req.done, Some(false));

        let req: UpdateItemRequest = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(req.done, None);
    }

    #[test]
    fn test_done_rejects_strings() {
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"done": "yes"}"#).is_err());
    }
}
