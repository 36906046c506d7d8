pub mod choice_style;
pub mod example;
pub mod recipe;
pub use choice_style::{ChoiceStyle, TaskConfig};
pub use example::{derive_config, Example};
pub use recipe::{RecipeComponents, RecipeConfig};
