//! Node and edge attributes
//!
//! Attributes are flat scalars fixed at creation time: users carry `name`,
//! `age`, `location` and `created_at`, interests carry `name`, friendships
//! carry `since`. There are no nested values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl PropertyValue {
    pub fn as_string(&self) -> Option<&str> {
        if let PropertyValue::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Timestamp attributes (`since`, `created_at`)
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        if let PropertyValue::DateTime(dt) = self {
            Some(*dt)
        } else {
            None
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

// ages
impl From<u32> for PropertyValue {
    fn from(i: u32) -> Self {
        PropertyValue::Integer(i64::from(i))
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(dt: DateTime<Utc>) -> Self {
        PropertyValue::DateTime(dt)
    }
}

/// Attribute name -> value
pub type PropertyMap = HashMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accessor() {
        let value: PropertyValue = "hello".into();
        assert_eq!(value.as_string(), Some("hello"));
        assert_eq!(value.as_datetime(), None);

        let age: PropertyValue = 28u32.into();
        assert_eq!(age, PropertyValue::Integer(28));
        assert_eq!(age.as_string(), None);
    }

    #[test]
    fn test_datetime_accessor() {
        let now = Utc::now();
        let value: PropertyValue = now.into();
        assert_eq!(value.as_datetime(), Some(now));
        assert_eq!(PropertyValue::Null.as_datetime(), None);
    }

    #[test]
    fn test_serde_json_shape() {
        let value = PropertyValue::from(true);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"Boolean":true}"#);
        assert_eq!(serde_json::from_str::<PropertyValue>(&json).unwrap(), value);
    }
}
