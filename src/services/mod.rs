pub mod choice_recipe;
pub mod http_helpers;
pub mod recipe_output;
pub mod redirect_service;
