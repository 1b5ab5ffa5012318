//! # Affordances
//!
//! State transitions available through a link, e.g. "this person can be updated with a `PUT`
//! carrying a name and an age". The Siren codec renders every non-`GET` affordance as an action.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP methods an affordance (or a Siren action) may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            "TRACE" => Ok(Self::Trace),
            other => Err(format!("Unknown HTTP method: {other}")),
        }
    }
}

/// The underlying value type of an input property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Text,
    Integer,
    Decimal,
    Boolean,
    Object,
    Array,
}

impl ValueType {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }

    /// Infers the value type from a JSON sample. `null` counts as text.
    pub fn of(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Number(n) if n.is_f64() => Self::Decimal,
            Value::Number(_) => Self::Integer,
            Value::Bool(_) => Self::Boolean,
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) | Value::Null => Self::Text,
        }
    }
}

/// Name and type of a single input property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyMetadata {
    pub name: String,
    pub value_type: ValueType,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// Describes the payload an affordance accepts or returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadMetadata {
    pub properties: Vec<PropertyMetadata>,
    pub media_type: Option<String>,
}

impl PayloadMetadata {
    pub fn new(properties: Vec<PropertyMetadata>) -> Self {
        Self {
            properties,
            media_type: None,
        }
    }

    /// Derives the property list from a sample value. Only struct-like samples (JSON objects)
    /// produce properties; field order follows the sample's serialized order.
    pub fn from_sample<T: Serialize>(sample: &T) -> Result<Self, serde_json::Error> {
        let properties = match serde_json::to_value(sample)? {
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(name, value)| PropertyMetadata::new(name.clone(), ValueType::of(value)))
                .collect(),
            _ => Vec::new(),
        };
        Ok(Self::new(properties))
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// A state transition attached to a link.
#[derive(Debug, Clone, PartialEq)]
pub struct Affordance {
    name: String,
    method: HttpMethod,
    input: PayloadMetadata,
    output: Option<PayloadMetadata>,
}

impl Affordance {
    pub fn new(name: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            name: name.into(),
            method,
            input: PayloadMetadata::default(),
            output: None,
        }
    }

    pub fn with_input(mut self, input: PayloadMetadata) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: PayloadMetadata) -> Self {
        self.output = Some(output);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn input(&self) -> &PayloadMetadata {
        &self.input
    }

    pub fn output(&self) -> Option<&PayloadMetadata> {
        self.output.as_ref()
    }
}
