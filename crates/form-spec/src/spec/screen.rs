use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;
use crate::spec::field::FieldDescriptor;

const TECH_ASSESSMENT: &str = include_str!("../../tests/fixtures/tech_assessment.json");

/// Root of a screen schema: header text plus the ordered field list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScreenConfig {
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Subtitle")]
    pub subtitle: String,
    #[serde(default, alias = "Fields")]
    pub fields: Vec<FieldDescriptor>,
}

impl ScreenConfig {
    pub fn from_json_str(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(FormError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The sample screen shipped with the crate.
    pub fn tech_assessment() -> Self {
        Self::from_json_str(TECH_ASSESSMENT).unwrap_or_default()
    }
}

/// JSON Schema describing the screen config format.
pub fn screen_config_schema() -> Value {
    let schema = schemars::schema_for!(ScreenConfig);
    schema.to_value()
}
