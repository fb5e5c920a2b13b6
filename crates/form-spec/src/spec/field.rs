use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

/// Field variants understood by the renderer.
///
/// Tags outside the known set are kept as [`FieldType::Other`] so that a
/// screen written for a newer renderer still loads; such fields render
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Label,
    TextInput,
    Button,
    Other(String),
}

impl FieldType {
    pub const KNOWN: [&'static str; 3] = ["Label", "TextInput", "Button"];

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Label => "Label",
            FieldType::TextInput => "TextInput",
            FieldType::Button => "Button",
            FieldType::Other(tag) => tag,
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Other(String::new())
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Label" => FieldType::Label,
            "TextInput" => FieldType::TextInput,
            "Button" => FieldType::Button,
            _ => FieldType::Other(tag),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        FieldType::from(tag.to_string())
    }
}

impl From<FieldType> for String {
    fn from(kind: FieldType) -> Self {
        match kind {
            FieldType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl JsonSchema for FieldType {
    fn schema_name() -> Cow<'static, str> {
        "FieldType".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Field variant tag. Unknown tags are accepted and render nothing.",
            "examples": FieldType::KNOWN,
        })
    }
}

/// Title of a presented message when the button sets no `alertTitle`.
pub const DEFAULT_MESSAGE_TITLE: &str = "Hello";

/// One entry of a screen's `fields` list.
///
/// Attributes that do not apply to the descriptor's variant are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Value store key; required for `TextInput`.
    #[serde(default, alias = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", alias = "Type", default)]
    pub kind: FieldType,
    /// Static text of a `Label`.
    #[serde(default, alias = "Text", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Hint text of a `TextInput`.
    #[serde(default, alias = "Placeholder", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Caption of a `Button`.
    #[serde(default, alias = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Message template of a `Button`, with `${id}` placeholders.
    #[serde(default, alias = "AlertMessage", skip_serializing_if = "Option::is_none")]
    pub alert_message: Option<String>,
    /// Title of the presented message; defaults to [`DEFAULT_MESSAGE_TITLE`].
    #[serde(default, alias = "AlertTitle", skip_serializing_if = "Option::is_none")]
    pub alert_title: Option<String>,
}

impl FieldDescriptor {
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            kind: FieldType::Label,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text_input(id: impl Into<String>, placeholder: Option<&str>) -> Self {
        Self {
            id: Some(id.into()),
            kind: FieldType::TextInput,
            placeholder: placeholder.map(String::from),
            ..Self::default()
        }
    }

    pub fn button(title: impl Into<String>, alert_message: Option<&str>) -> Self {
        Self {
            kind: FieldType::Button,
            title: Some(title.into()),
            alert_message: alert_message.map(String::from),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Title handed to the presenter when this button fires.
    pub fn message_title(&self) -> &str {
        self.alert_title
            .as_deref()
            .unwrap_or(DEFAULT_MESSAGE_TITLE)
    }
}
