pub mod field;
pub mod screen;

pub use field::{FieldDescriptor, FieldType};
pub use screen::{ScreenConfig, screen_config_schema};
