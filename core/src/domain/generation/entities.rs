use std::time::Duration;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

/// Display labels for one generation attempt. Perceived progress only:
/// the stages advance on a fixed timetable regardless of what the real
/// request is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStage {
    Initializing,
    Generating,
    Validating,
    Complete,
}

impl GenerationStage {
    pub fn as_str(&self) -> &str {
        match self {
            GenerationStage::Initializing => "initializing",
            GenerationStage::Generating => "generating",
            GenerationStage::Validating => "validating",
            GenerationStage::Complete => "complete",
        }
    }
}

/// How long each stage label stays up.
pub const STAGE_PLAN: [(GenerationStage, Duration); 4] = [
    (GenerationStage::Initializing, Duration::from_millis(800)),
    (GenerationStage::Generating, Duration::from_millis(2000)),
    (GenerationStage::Validating, Duration::from_millis(1000)),
    (GenerationStage::Complete, Duration::from_millis(500)),
];

/// Exhaustive workflow state. Success and failure are distinct variants, so
/// a generated recipe and an error can never be present at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowPhase {
    LoadingProfile,
    Idle,
    Generating,
    Succeeded { recipe: Recipe },
    Failed { error: String },
}
