use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's dietary targets and constraints as served by the nutrition
/// profile endpoint. The workflow only needs to know whether one exists;
/// the fields are carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub id: Uuid,
    pub daily_calories: Option<i32>,
    pub protein_grams: Option<i32>,
    pub carb_grams: Option<i32>,
    pub fat_grams: Option<i32>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
