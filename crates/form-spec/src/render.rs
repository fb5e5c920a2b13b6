use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{
    spec::field::{FieldDescriptor, FieldType},
    store::ValueStore,
};

/// Visual role of a static text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Subtitle,
    Heading,
}

impl TextStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextStyle::Title => "title",
            TextStyle::Subtitle => "subtitle",
            TextStyle::Heading => "heading",
        }
    }
}

/// Message template carried by a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub title: String,
    pub template: String,
}

/// State change requested by an element in response to a user event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// An input bound to `id` now holds `text`.
    Change { id: String, text: String },
    /// Resolve `template` and hand the result to the presenter.
    Present { title: String, template: String },
}

/// A renderable element produced from one descriptor.
///
/// `key` is the descriptor's index in the screen's field list; hosts send it
/// back with change and press events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text {
        style: TextStyle,
        text: String,
    },
    TextInput {
        key: usize,
        placeholder: Option<String>,
        value: String,
        binding: Option<String>,
    },
    Button {
        key: usize,
        label: String,
        action: Option<Action>,
    },
}

impl Element {
    pub fn key(&self) -> Option<usize> {
        match self {
            Element::Text { .. } => None,
            Element::TextInput { key, .. } | Element::Button { key, .. } => Some(*key),
        }
    }

    /// Change callback: the message an edit to this element produces, if any.
    pub fn change(&self, text: impl Into<String>) -> Option<Message> {
        match self {
            Element::TextInput {
                binding: Some(id), ..
            } => Some(Message::Change {
                id: id.clone(),
                text: text.into(),
            }),
            Element::TextInput { key, .. } => {
                debug!(key, "edit dropped: input has no id");
                None
            }
            _ => None,
        }
    }

    /// Press callback: the message pressing this element produces, if any.
    pub fn press(&self) -> Option<Message> {
        match self {
            Element::Button {
                action: Some(action),
                ..
            } => Some(Message::Present {
                title: action.title.clone(),
                template: action.template.clone(),
            }),
            Element::Button { key, .. } => {
                debug!(key, "press ignored: button has no message");
                None
            }
            _ => None,
        }
    }

    /// Hands the element to a concrete widget toolkit.
    pub fn paint<T: Toolkit>(&self, toolkit: &mut T) -> T::Widget {
        match self {
            Element::Text { style, text } => toolkit.text(*style, text),
            Element::TextInput {
                key,
                placeholder,
                value,
                ..
            } => toolkit.text_input(*key, placeholder.as_deref(), value),
            Element::Button { key, label, .. } => toolkit.button(*key, label),
        }
    }
}

/// Widget construction supplied by the host UI layer.
pub trait Toolkit {
    type Widget;

    fn text(&mut self, style: TextStyle, text: &str) -> Self::Widget;

    /// Editable control seeded with `value`; edits come back as change events for `key`.
    fn text_input(&mut self, key: usize, placeholder: Option<&str>, value: &str) -> Self::Widget;

    /// Pressable control; presses come back as press events for `key`.
    fn button(&mut self, key: usize, label: &str) -> Self::Widget;
}

/// Shows a resolved message to the user. Fire and forget.
pub trait Presenter {
    fn present(&mut self, title: &str, body: &str);
}

/// A message captured by the `Vec` presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedMessage {
    pub title: String,
    pub body: String,
}

impl Presenter for Vec<PresentedMessage> {
    fn present(&mut self, title: &str, body: &str) {
        self.push(PresentedMessage {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

/// Maps one descriptor to its element. Unknown field types render nothing.
pub fn render_field(index: usize, field: &FieldDescriptor, store: &ValueStore) -> Option<Element> {
    match &field.kind {
        FieldType::Label => Some(Element::Text {
            style: TextStyle::Heading,
            text: field.text.clone().unwrap_or_default(),
        }),
        FieldType::TextInput => Some(Element::TextInput {
            key: index,
            placeholder: field.placeholder.clone(),
            value: field
                .id
                .as_deref()
                .map(|id| store.get(id).to_string())
                .unwrap_or_default(),
            binding: field.id.clone(),
        }),
        FieldType::Button => Some(Element::Button {
            key: index,
            label: field.title.clone().unwrap_or_default(),
            action: field.alert_message.as_ref().map(|template| Action {
                title: field.message_title().to_string(),
                template: template.clone(),
            }),
        }),
        FieldType::Other(tag) => {
            debug!(index, tag = %tag, "skipping field with unsupported type");
            None
        }
    }
}

/// Render elements as human-friendly text, one line per element.
pub fn render_text(elements: &[Element]) -> String {
    let mut lines = Vec::new();
    for element in elements {
        match element {
            Element::Text { style, text } => match style {
                TextStyle::Title => lines.push(format!("Form: {}", text)),
                TextStyle::Subtitle => lines.push(format!("  {}", text)),
                TextStyle::Heading => lines.push(text.clone()),
            },
            Element::TextInput {
                key,
                placeholder,
                value,
                binding,
            } => {
                let mut entry = format!(
                    " [{}] input {}",
                    key,
                    binding.as_deref().unwrap_or("(unbound)")
                );
                if !value.is_empty() {
                    entry.push_str(&format!(" = {}", value));
                } else if let Some(placeholder) = placeholder {
                    entry.push_str(&format!(" <{}>", placeholder));
                }
                lines.push(entry);
            }
            Element::Button { key, label, .. } => {
                lines.push(format!(" [{}] button ({})", key, label));
            }
        }
    }
    lines.join("\n")
}

/// Render elements as a structured JSON-friendly value.
pub fn render_json_ui(elements: &[Element]) -> Value {
    let elements = elements
        .iter()
        .map(|element| {
            let mut map = Map::new();
            match element {
                Element::Text { style, text } => {
                    map.insert("type".into(), Value::String("text".into()));
                    map.insert("style".into(), Value::String(style.as_str().into()));
                    map.insert("text".into(), Value::String(text.clone()));
                }
                Element::TextInput {
                    key,
                    placeholder,
                    value,
                    binding,
                } => {
                    map.insert("type".into(), Value::String("text_input".into()));
                    map.insert("key".into(), json!(key));
                    map.insert(
                        "id".into(),
                        binding.clone().map(Value::String).unwrap_or(Value::Null),
                    );
                    if let Some(placeholder) = placeholder {
                        map.insert("placeholder".into(), Value::String(placeholder.clone()));
                    }
                    map.insert("value".into(), Value::String(value.clone()));
                }
                Element::Button { key, label, action } => {
                    map.insert("type".into(), Value::String("button".into()));
                    map.insert("key".into(), json!(key));
                    map.insert("label".into(), Value::String(label.clone()));
                    if let Some(action) = action {
                        map.insert(
                            "action".into(),
                            json!({ "title": action.title, "template": action.template }),
                        );
                    }
                }
            }
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    json!({ "elements": elements })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_renders_heading_text() {
        let element = render_field(0, &FieldDescriptor::label("Person name"), &ValueStore::new());
        assert_eq!(
            element,
            Some(Element::Text {
                style: TextStyle::Heading,
                text: "Person name".into(),
            })
        );
    }

    #[test]
    fn input_is_seeded_from_the_store() {
        let store = ValueStore::new().set("person-name", "Ana");
        let element = render_field(
            4,
            &FieldDescriptor::text_input("person-name", Some("John Smith")),
            &store,
        )
        .expect("input element");
        let Element::TextInput { key, value, .. } = &element else {
            panic!("expected input, got {element:?}");
        };
        assert_eq!(*key, 4);
        assert_eq!(value, "Ana");
        assert_eq!(
            element.change("Bea"),
            Some(Message::Change {
                id: "person-name".into(),
                text: "Bea".into(),
            })
        );
        assert_eq!(element.press(), None);
    }

    #[test]
    fn unbound_input_drops_edits() {
        let field = FieldDescriptor {
            kind: FieldType::TextInput,
            ..FieldDescriptor::default()
        };
        let element = render_field(0, &field, &ValueStore::new()).expect("still renders");
        assert_eq!(element.change("lost"), None);
    }

    #[test]
    fn button_press_carries_template() {
        let field = FieldDescriptor::button("Say hi", Some("Hello ${person-name}!"));
        let element = render_field(2, &field, &ValueStore::new()).expect("button");
        assert_eq!(
            element.press(),
            Some(Message::Present {
                title: "Hello".into(),
                template: "Hello ${person-name}!".into(),
            })
        );
        assert_eq!(element.change("x"), None);
    }

    #[test]
    fn button_without_message_is_inert() {
        let element = render_field(0, &FieldDescriptor::button("Nothing", None), &ValueStore::new())
            .expect("button");
        assert_eq!(element.press(), None);
    }

    #[test]
    fn unknown_types_render_nothing() {
        let field = FieldDescriptor {
            kind: FieldType::from("Slider"),
            text: Some("ignored".into()),
            ..FieldDescriptor::default()
        };
        assert_eq!(render_field(0, &field, &ValueStore::new()), None);
    }

    #[test]
    fn irrelevant_attributes_are_ignored() {
        let field = FieldDescriptor {
            placeholder: Some("not for labels".into()),
            alert_message: Some("${x}".into()),
            ..FieldDescriptor::label("Plain")
        };
        let element = render_field(0, &field, &ValueStore::new()).expect("label");
        assert_eq!(element.press(), None);
        assert_eq!(element.key(), None);
    }

    struct Recorder(Vec<String>);

    impl Toolkit for Recorder {
        type Widget = usize;

        fn text(&mut self, style: TextStyle, text: &str) -> usize {
            self.0.push(format!("{}:{}", style.as_str(), text));
            self.0.len()
        }

        fn text_input(&mut self, key: usize, placeholder: Option<&str>, value: &str) -> usize {
            self.0
                .push(format!("input#{}:{}:{}", key, placeholder.unwrap_or("-"), value));
            self.0.len()
        }

        fn button(&mut self, key: usize, label: &str) -> usize {
            self.0.push(format!("button#{}:{}", key, label));
            self.0.len()
        }
    }

    #[test]
    fn paint_dispatches_to_toolkit() {
        let store = ValueStore::new().set("n", "v");
        let mut toolkit = Recorder(Vec::new());
        let fields = [
            FieldDescriptor::label("L"),
            FieldDescriptor::text_input("n", None),
            FieldDescriptor::button("B", None),
        ];
        for (index, field) in fields.iter().enumerate() {
            if let Some(element) = render_field(index, field, &store) {
                element.paint(&mut toolkit);
            }
        }
        assert_eq!(toolkit.0, vec!["heading:L", "input#1:-:v", "button#2:B"]);
    }
}
