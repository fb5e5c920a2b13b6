pub mod engine;
pub mod error;
pub mod render;
pub mod spec;
pub mod store;
pub mod template;

pub use engine::{FormEngine, FormEvent};
pub use error::FormError;
pub use render::{
    Action, Element, Message, PresentedMessage, Presenter, TextStyle, Toolkit, render_field,
    render_json_ui, render_text,
};
pub use spec::{FieldDescriptor, FieldType, ScreenConfig, screen_config_schema};
pub use store::ValueStore;
pub use template::{ResolutionMode, TemplateResolver, resolve};
