//! Parameter schema model for tools
//!
//! Tools declare their parameters as a closed set of kinds rather than
//! arbitrary JSON Schema. The bridge renders the declared parameters into the
//! `{type, properties, required}` object format expected by LLM
//! function-calling APIs.

use serde_json::{Map, Value, json};

/// The recognized parameter kinds.
///
/// Container kinds collapse to bare `array`/`object`; element types are never
/// inspected. `Optional` marks a parameter whose value may be omitted and
/// resolves to the JSON type of its first non-null inner kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    Optional(Box<ParamKind>),
}

impl ParamKind {
    /// Total mapping to the canonical JSON Schema type names.
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
            ParamKind::Null => "null",
            ParamKind::Optional(inner) => match inner.as_ref() {
                // No non-null member to resolve to
                ParamKind::Null => "string",
                other => other.json_type(),
            },
        }
    }

    /// Convenience constructor for an optional parameter of the given kind.
    pub fn optional(inner: ParamKind) -> Self {
        ParamKind::Optional(Box::new(inner))
    }
}

/// A single declared parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub description: String,
    /// Default value in textual form. A parameter with a default is excluded
    /// from the `required` list.
    pub default: Option<String>,
}

/// Ordered parameter declarations for one tool.
#[derive(Debug, Clone, Default)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
}

impl ToolSchema {
    /// Create an empty schema (no declared parameters).
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Declare a required parameter.
    pub fn param(
        mut self,
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            kind,
            description: description.into(),
            default: None,
        });
        self
    }

    /// Declare a parameter with a default value. Defaulted parameters are
    /// never listed as required.
    pub fn param_with_default(
        mut self,
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            kind,
            description: description.into(),
            default: Some(default.into()),
        });
        self
    }

    /// The declared parameters, in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render the JSON Schema-shaped parameter object.
    ///
    /// `required` preserves declaration order and contains exactly the
    /// parameters declared without a default. The empty schema renders as
    /// `{"type":"object","properties":{},"required":[]}`.
    pub fn to_value(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.params {
            let mut info = Map::new();
            info.insert("type".to_string(), json!(param.kind.json_type()));
            info.insert("description".to_string(), json!(param.description));

            if let Some(default) = &param.default {
                info.insert("default".to_string(), json!(default));
            } else {
                required.push(json!(param.name));
            }

            properties.insert(param.name.clone(), Value::Object(info));
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}
