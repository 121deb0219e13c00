use crate::models::{Item, ItemChanges};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_OFFSET: i64 = 0;

/// Raw pagination parameters; parsed by the handler so that a non-integer
/// value surfaces as a handler failure instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListItemsQuery {
    pub fn limit(&self) -> Result<i64, std::num::ParseIntError> {
        parse_param(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> Result<i64, std::num::ParseIntError> {
        parse_param(self.offset.as_deref(), DEFAULT_OFFSET)
    }
}

fn parse_param(raw: Option<&str>, default: i64) -> Result<i64, std::num::ParseIntError> {
    match raw {
        Some(value) => value.trim().parse(),
        None => Ok(default),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListItemsResponse {
    pub items: Vec<Item>,
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Value,
    #[serde(default = "empty_description")]
    pub description: Value,
}

fn empty_description() -> Value {
    Value::String(String::new())
}

/// Keys present in the body overwrite the stored fields, `null` included.
#[derive(Debug, Default)]
pub struct UpdateItemRequest {
    pub name: Option<Value>,
    pub description: Option<Value>,
}

impl TryFrom<Value> for UpdateItemRequest {
    type Error = String;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                name: fields.remove("name"),
                description: fields.remove("description"),
            }),
            other => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(request: UpdateItemRequest) -> Self {
        ItemChanges {
            name: request.name,
            description: request.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub message: String,
    pub id: String,
}
