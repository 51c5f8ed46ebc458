//! Reshaping search endpoint records into `{id, text}` widget options.

use super::EntityKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One option for the search widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOption {
    /// Record id, passed through as the endpoint returned it.
    pub id: Value,
    pub text: String,
}

/// Response envelope the search widget expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<SearchOption>,
}

#[derive(Debug, Deserialize)]
struct ActionResourceRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    action: Value,
    #[serde(default)]
    resource_primary: Value,
    #[serde(default)]
    resource_secondary: Value,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    lookup: Value,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    description: Value,
}

#[derive(Debug, Deserialize)]
struct GroupRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Value,
}

/// Text of an optional field; `None` for null, missing, empty, `false` or zero.
fn present(v: &Value) -> Option<String> {
    match v {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Text of a field that is always rendered; null or missing renders as `null`.
fn rendered(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn action_resource_option(rec: ActionResourceRecord) -> SearchOption {
    let mut text = rendered(&rec.action);
    if let Some(primary) = present(&rec.resource_primary) {
        text.push_str(": ");
        text.push_str(&primary);
    }
    if let Some(secondary) = present(&rec.resource_secondary) {
        text.push_str(", ");
        text.push_str(&secondary);
    }
    SearchOption { id: rec.id, text }
}

fn user_option(rec: UserRecord) -> SearchOption {
    let mut text = format!("{} => {}", rendered(&rec.lookup), rendered(&rec.value));
    if let Some(description) = present(&rec.description) {
        text.push_str(&format!(" ({description})"));
    }
    SearchOption { id: rec.id, text }
}

fn group_option(rec: GroupRecord) -> SearchOption {
    SearchOption {
        id: rec.id,
        text: rendered(&rec.name),
    }
}

fn option_for(kind: EntityKind, record: Value) -> Result<SearchOption, serde_json::Error> {
    Ok(match kind {
        EntityKind::ActionResource => action_resource_option(serde_json::from_value(record)?),
        EntityKind::User => user_option(serde_json::from_value(record)?),
        EntityKind::Group => group_option(serde_json::from_value(record)?),
    })
}

/// Maps endpoint records to widget options, preserving order.
///
/// Fails only if a record is not a JSON object.
pub fn map_results(kind: EntityKind, records: Vec<Value>) -> Result<SearchResults, serde_json::Error> {
    let results = records
        .into_iter()
        .map(|record| option_for(kind, record))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SearchResults { results })
}

/// Parses an `_shape=array` response body and maps it.
pub fn parse_results(kind: EntityKind, body: &[u8]) -> Result<SearchResults, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_slice(body)?;
    map_results(kind, records)
}
