use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceStyle {
    #[default]
    Single, // One option, accepted as soon as it is picked
    Multiple, // Any number of options, accepted explicitly
}

impl ChoiceStyle {
    /// Classifies a raw `choice_style` value. Only the exact string
    /// `"multiple"` selects multiple choice; everything else, including a
    /// missing field, is single choice.
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if s == "multiple" => ChoiceStyle::Multiple,
            _ => ChoiceStyle::Single,
        }
    }

    pub fn auto_accept(self) -> bool {
        matches!(self, ChoiceStyle::Single)
    }
}

/// Per-task settings the choice view reads from an example's `config` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub struct TaskConfig {
    pub choice_auto_accept: bool,
    pub choice_style: ChoiceStyle,
}

impl From<ChoiceStyle> for TaskConfig {
    fn from(choice_style: ChoiceStyle) -> Self {
        TaskConfig {
            choice_auto_accept: choice_style.auto_accept(),
            choice_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_only_matches_exact_multiple() {
        assert_eq!(
            ChoiceStyle::classify(Some(&json!("multiple"))),
            ChoiceStyle::Multiple
        );

        let singles = [
            json!("single"),
            json!("Multiple"),
            json!("multiple "),
            json!(""),
            json!(null),
            json!(true),
            json!(["multiple"]),
            json!({"style": "multiple"}),
        ];
        for value in singles {
            assert_eq!(
                ChoiceStyle::classify(Some(&value)),
                ChoiceStyle::Single,
                "{} should fall back to single",
                value
            );
        }

        assert_eq!(ChoiceStyle::classify(None), ChoiceStyle::Single);
    }

    #[test]
    fn task_config_serializes_with_lowercase_style() {
        let multiple = serde_json::to_value(TaskConfig::from(ChoiceStyle::Multiple)).unwrap();
        assert_eq!(
            multiple,
            json!({"choice_auto_accept": false, "choice_style": "multiple"})
        );

        let single = serde_json::to_value(TaskConfig::from(ChoiceStyle::Single)).unwrap();
        assert_eq!(
            single,
            json!({"choice_auto_accept": true, "choice_style": "single"})
        );
    }
}
