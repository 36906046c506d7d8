pub mod global_css;

pub use global_css::GLOBAL_CSS;

/// Body returned when the survey callback lacks either identifier.
pub const MISSING_PARAMETERS_MESSAGE: &str =
    "Error: Missing required parameters (PROLIFIC_PID or SESSION_ID).";

pub const CHOICE_VIEW_ID: &str = "choice";

pub const SINGLE_OR_MULTIPLE_CHOICE_RECIPE: &str = "single_or_multiple_choice";

pub const PROLIFIC_PID_PARAM: &str = "PROLIFIC_PID";
pub const SESSION_ID_PARAM: &str = "SESSION_ID";

pub const SESSION_QUERY_KEY: &str = "session";
