use crate::{
    constants::SINGLE_OR_MULTIPLE_CHOICE_RECIPE,
    errors::AppResult,
    models::domain::RecipeComponents,
    recipes::{BoxedExampleStream, Recipe, RecipeArgs},
    services::choice_recipe,
};

/// One single- or multiple-choice question per task, in file order.
pub struct SingleOrMultipleChoice;

impl Recipe for SingleOrMultipleChoice {
    fn name(&self) -> &'static str {
        SINGLE_OR_MULTIPLE_CHOICE_RECIPE
    }

    fn build(&self, args: &RecipeArgs) -> AppResult<RecipeComponents<BoxedExampleStream>> {
        let components = choice_recipe::single_or_multiple_choice(&args.dataset, &args.file_path)?;
        Ok(components.map_stream(|stream| Box::new(stream) as BoxedExampleStream))
    }
}
