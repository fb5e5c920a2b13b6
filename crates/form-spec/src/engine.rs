use tracing::debug;

use crate::{
    render::{Element, Message, Presenter, TextStyle, render_field},
    spec::screen::ScreenConfig,
    store::ValueStore,
    template::{ResolutionMode, TemplateResolver},
};

/// A user event as delivered by the host, addressed by field index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Change { index: usize, text: String },
    Press { index: usize },
}

/// Owns a screen's schema and its value store, and turns user events into
/// store updates and presented messages.
#[derive(Debug, Clone)]
pub struct FormEngine {
    config: ScreenConfig,
    store: ValueStore,
    resolver: TemplateResolver,
}

impl FormEngine {
    pub fn new(config: ScreenConfig) -> Self {
        Self {
            config,
            store: ValueStore::new(),
            resolver: TemplateResolver::default(),
        }
    }

    /// Seeds the store, e.g. from a saved answers file.
    pub fn with_values(mut self, store: ValueStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.resolver = TemplateResolver::new(mode);
        self
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn values(&self) -> &ValueStore {
        &self.store
    }

    pub fn into_values(self) -> ValueStore {
        self.store
    }

    pub fn render_title(&self) -> Element {
        Element::Text {
            style: TextStyle::Title,
            text: self.config.title.clone(),
        }
    }

    pub fn render_subtitle(&self) -> Element {
        Element::Text {
            style: TextStyle::Subtitle,
            text: self.config.subtitle.clone(),
        }
    }

    /// One element per renderable field, in schema order.
    pub fn render_fields(&self) -> Vec<Element> {
        self.config
            .fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| render_field(index, field, &self.store))
            .collect()
    }

    /// Title, subtitle, then the fields.
    pub fn render_screen(&self) -> Vec<Element> {
        let mut elements = vec![self.render_title(), self.render_subtitle()];
        elements.extend(self.render_fields());
        elements
    }

    pub fn resolve(&self, template: &str) -> String {
        self.resolver.resolve(template, &self.store)
    }

    pub fn update<P: Presenter + ?Sized>(&mut self, message: Message, presenter: &mut P) {
        match message {
            Message::Change { id, text } => {
                debug!(id = %id, len = text.len(), "value changed");
                self.store = self.store.set(id, text);
            }
            Message::Present { title, template } => {
                let body = self.resolve(&template);
                debug!(title = %title, body = %body, "presenting message");
                presenter.present(&title, &body);
            }
        }
    }

    /// Routes a host event through the element rendered at its index.
    pub fn handle<P: Presenter + ?Sized>(&mut self, event: FormEvent, presenter: &mut P) {
        let index = match &event {
            FormEvent::Change { index, .. } | FormEvent::Press { index } => *index,
        };
        let Some(element) = self
            .config
            .fields
            .get(index)
            .and_then(|field| render_field(index, field, &self.store))
        else {
            debug!(index, "event for a field that renders nothing");
            return;
        };
        let message = match event {
            FormEvent::Change { text, .. } => element.change(text),
            FormEvent::Press { .. } => element.press(),
        };
        if let Some(message) = message {
            self.update(message, presenter);
        }
    }
}
