use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated recipe. Created by the generation endpoint; locally mutated
/// only to flip `is_saved` after a confirmed save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    #[serde(default)]
    pub is_saved: bool,
}

/// Parameters for one generation attempt. Opaque to the workflow, which
/// only holds on to the last submitted value so the attempt can be retried;
/// validation belongs to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGenerationRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub meal_type: Option<String>,
    pub servings: Option<u32>,
    pub max_ready_minutes: Option<u32>,
    #[serde(default)]
    pub exclusions: Vec<String>,
}
