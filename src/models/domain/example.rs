use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::domain::choice_style::{ChoiceStyle, TaskConfig};

pub const CHOICE_STYLE_KEY: &str = "choice_style";
pub const CONFIG_KEY: &str = "config";

/// One annotation task as read from the input file. Fields are kept in their
/// original order and passed through untouched, except for `config`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Example(Map<String, Value>);

impl Example {
    pub fn choice_style(&self) -> ChoiceStyle {
        ChoiceStyle::classify(self.0.get(CHOICE_STYLE_KEY))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Replaces the example's `config` with the settings for its choice style.
    pub fn with_config(mut self, config: TaskConfig) -> Self {
        // A struct of a bool and a unit enum cannot fail to serialize.
        let value = serde_json::to_value(config).expect("TaskConfig serializes to JSON");
        self.0.insert(CONFIG_KEY.to_string(), value);
        self
    }
}

impl TryFrom<Value> for Example {
    type Error = Value;

    /// Only JSON objects are examples; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Example(fields)),
            other => Err(other),
        }
    }
}

/// Attaches the choice-view config to a single example.
pub fn derive_config(example: Example) -> Example {
    let config = TaskConfig::from(example.choice_style());
    example.with_config(config)
}
