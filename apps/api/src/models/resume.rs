use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::sanitize::clean_extracted_text;

/// Structured fields extracted from a resume by the AI service.
///
/// Deserialization follows document-store semantics: absent or null fields take
/// their default, numbers and booleans in text fields are stored as text, and
/// unknown fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedResume {
    #[serde(deserialize_with = "text")]
    pub professional_summary: String,
    #[serde(deserialize_with = "text_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "or_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "or_default")]
    pub project: Vec<Project>,
    #[serde(deserialize_with = "or_default")]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "text")]
    pub full_name: String,
    #[serde(deserialize_with = "text")]
    pub profession: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub linkedin: String,
    #[serde(deserialize_with = "text")]
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "text")]
    pub company: String,
    #[serde(deserialize_with = "text")]
    pub position: String,
    #[serde(deserialize_with = "text")]
    pub start_date: String,
    #[serde(deserialize_with = "text")]
    pub end_date: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "text")]
    pub institution: String,
    #[serde(deserialize_with = "text")]
    pub degree: String,
    #[serde(deserialize_with = "text")]
    pub field: String,
    #[serde(deserialize_with = "text")]
    pub graduation_date: String,
    #[serde(deserialize_with = "text")]
    pub gpa: String,
}

/// Casts scalars to text; `null` becomes empty. Arrays and objects are rejected.
/// Cast numbers go through the extracted-text cleanup so `-12` cannot keep its sign.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    cast_text(Value::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}

fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|item| cast_text(item).map_err(serde::de::Error::custom))
        .collect()
}

fn cast_text(value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(clean_extracted_text(&n.to_string())),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("expected text, found {}", kind_of(&other))),
    }
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
