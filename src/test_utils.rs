use crate::models::domain::Example;

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use serde_json::json;

    fn example(value: serde_json::Value) -> Example {
        Example::try_from(value).expect("fixture should be a JSON object")
    }

    /// Creates a question without a `choice_style`
    pub fn single_choice_example(id: &str) -> Example {
        example(json!({
            "id": id,
            "text": "Which option fits best?",
            "options": [{"id": "a", "text": "A"}, {"id": "b", "text": "B"}]
        }))
    }

    /// Creates a question marked as multiple choice
    pub fn multiple_choice_example(id: &str) -> Example {
        example(json!({
            "id": id,
            "text": "Select all that apply.",
            "options": [{"id": "a", "text": "A"}, {"id": "b", "text": "B"}],
            "choice_style": "multiple"
        }))
    }

    /// Creates a mix covering every classification branch
    pub fn mixed_examples() -> Vec<Example> {
        vec![
            single_choice_example("q1"),
            multiple_choice_example("q2"),
            example(json!({"id": "q3", "text": "Pick one.", "choice_style": "single"})),
            example(json!({"id": "q4", "text": "Pick one.", "choice_style": "MULTIPLE"})),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents a redirect (3xx)
    pub fn assert_redirect_status(status: StatusCode) {
        assert!(
            status.is_redirection(),
            "Expected redirect status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents a client error (4xx)
    pub fn assert_client_error_status(status: StatusCode) {
        assert!(
            status.is_client_error(),
            "Expected client error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::models::domain::ChoiceStyle;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_choice_styles() {
        assert_eq!(single_choice_example("q").choice_style(), ChoiceStyle::Single);
        assert_eq!(multiple_choice_example("q").choice_style(), ChoiceStyle::Multiple);
    }

    #[test]
    fn test_fixtures_mixed_examples() {
        let examples = mixed_examples();
        assert_eq!(examples.len(), 4);
        assert_eq!(examples[1].choice_style(), ChoiceStyle::Multiple);
        assert_eq!(examples[3].choice_style(), ChoiceStyle::Single);
    }

    #[test]
    fn test_status_helpers() {
        assert_redirect_status(StatusCode::FOUND);
        assert_client_error_status(StatusCode::BAD_REQUEST);
    }
}
