use crate::domain::{generation::entities::GenerationStage, recipe::entities::Recipe};

/// A navigation side effect the consuming UI must perform. The workflow
/// never navigates itself; it hands one of these back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Login,
    RecipeList,
    RecipeDetail(i64),
    NutritionSettings,
}

/// The single panel to render, derived from the workflow state.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowView<'a> {
    LoadingSpinner,
    ProgressIndicator { stage: GenerationStage },
    ErrorPanel { message: &'a str },
    RecipeResult { recipe: &'a Recipe },
    InputForm { has_nutrition_profile: bool },
}
