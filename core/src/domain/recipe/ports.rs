use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeGenerationRequest},
};

/// Gateway to the recipe generation endpoint
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGenerator: Send + Sync {
    fn generate(
        &self,
        request: RecipeGenerationRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

/// Gateway to the recipe save endpoint
#[cfg_attr(test, mockall::automock)]
pub trait RecipeStore: Send + Sync {
    fn save(&self, recipe_id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}
