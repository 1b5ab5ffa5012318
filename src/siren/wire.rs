//! # Siren Wire Schema
//!
//! Plain serde structs mirroring the Siren JSON document. Field declaration order is the
//! emission order, and every optional field is omitted when it is `None` or empty.

use crate::model::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Siren entity, either the document root or an embedded sub-entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SirenEntity {
    #[serde(rename = "class", default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Only set on embedded entities.
    #[serde(rename = "rel", default, skip_serializing_if = "Vec::is_empty")]
    pub rels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<SirenEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<SirenLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<SirenAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A navigational link. `rels` must not be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SirenLink {
    #[serde(rename = "rel", default)]
    pub rels: Vec<String>,
    #[serde(rename = "class", default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl SirenLink {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rels: vec![rel.into()],
            href: href.into(),
            ..Self::default()
        }
    }
}

/// A state transition. A missing `method` means `GET`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SirenAction {
    pub name: String,
    #[serde(rename = "class", default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SirenField>,
}

impl SirenAction {
    /// The effective method, defaulting to `GET`.
    pub fn method(&self) -> HttpMethod {
        self.method.unwrap_or_default()
    }
}

/// One input of an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SirenField {
    pub name: String,
    #[serde(rename = "class", default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// HTML5 input types Siren allows for fields. The encoder only produces `text` and `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Hidden,
    #[default]
    Text,
    Search,
    Tel,
    Url,
    Email,
    Password,
    Datetime,
    Date,
    Month,
    Week,
    Time,
    DatetimeLocal,
    Number,
    Range,
    Color,
    Checkbox,
    Radio,
    File,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fields_are_omitted() {
        let entity = SirenEntity::default();
        assert_eq!(serde_json::to_string(&entity).expect("serializes"), "{}");

        let link = SirenLink::new("self", "/persons");
        assert_eq!(
            serde_json::to_string(&link).expect("serializes"),
            r#"{"rel":["self"],"href":"/persons"}"#
        );
    }

    #[test]
    fn action_fields_are_emitted_in_order() {
        let action = SirenAction {
            name: "updatePerson".into(),
            method: Some(HttpMethod::Put),
            href: "/persons/1".into(),
            title: Some("Update".into()),
            media_type: Some("application/json".into()),
            fields: vec![SirenField {
                name: "age".into(),
                field_type: Some(FieldType::Number),
                value: Some(json!(42)),
                title: Some("Age".into()),
                ..SirenField::default()
            }],
            ..SirenAction::default()
        };

        assert_eq!(
            serde_json::to_string(&action).expect("serializes"),
            concat!(
                r#"{"name":"updatePerson","method":"PUT","href":"/persons/1","title":"Update","#,
                r#""type":"application/json","#,
                r#""fields":[{"name":"age","type":"number","value":42,"title":"Age"}]}"#
            )
        );
    }

    #[test]
    fn missing_method_defaults_to_get() {
        let action: SirenAction =
            serde_json::from_value(json!({"name": "find", "href": "/persons{?name}"}))
                .expect("deserializes");
        assert_eq!(action.method, None);
        assert_eq!(action.method(), HttpMethod::Get);
    }

    #[test]
    fn field_types_use_html_names() {
        assert_eq!(
            serde_json::to_value(FieldType::DatetimeLocal).expect("serializes"),
            json!("datetime-local")
        );
        assert_eq!(
            serde_json::to_value(FieldType::Text).expect("serializes"),
            json!("text")
        );
    }
}
