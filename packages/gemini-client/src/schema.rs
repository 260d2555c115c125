//! Type-safe schema generation for Gemini structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from Rust types.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use gemini_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Talk {
//!     title: String,
//!     speaker: Option<String>,
//! }
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Agenda {
//!     talks: Vec<Talk>,
//! }
//!
//! // Get Gemini-compatible schema
//! let schema = Agenda::gemini_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Keywords schemars emits that `responseJsonSchema` does not accept.
const UNSUPPORTED_KEYWORDS: &[&str] = &["$schema", "default", "definitions"];

/// Trait for types that can be used as Gemini structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible JSON schema for this type.
    ///
    /// Gemini's `responseJsonSchema` accepts a subset of JSON Schema, so:
    /// 1. All `$ref` references are inlined
    /// 2. Single-element `allOf` wrappers (documented fields) are merged away
    /// 3. `definitions`, `$schema` and `default` keywords are removed
    fn gemini_schema() -> Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        inline_refs(&mut value);
        flatten_single_all_of(&mut value);
        strip_unsupported(&mut value);

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Inline all $ref references by replacing them with the actual schema from definitions.
fn inline_refs(value: &mut Value) {
    let definitions = if let Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(ref_path)) = map.get("$ref").cloned() {
                // Refs look like "#/definitions/Company"
                if let Some(type_name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

/// Merge `{"description": .., "allOf": [schema]}` into one object.
///
/// schemars wraps referenced types this way when the field has a doc comment.
fn flatten_single_all_of(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let single = match map.get("allOf") {
                Some(Value::Array(items)) if items.len() == 1 => items[0].as_object().cloned(),
                _ => None,
            };
            if let Some(inner) = single {
                map.remove("allOf");
                for (key, v) in inner {
                    map.entry(key).or_insert(v);
                }
            }
            for (_, v) in map.iter_mut() {
                flatten_single_all_of(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                flatten_single_all_of(item);
            }
        }
        _ => {}
    }
}

/// Remove keywords Gemini rejects, at every level.
fn strip_unsupported(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for keyword in UNSUPPORTED_KEYWORDS {
                map.remove(*keyword);
            }
            for (_, v) in map.iter_mut() {
                strip_unsupported(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                strip_unsupported(item);
            }
        }
        _ => {}
    }
}
