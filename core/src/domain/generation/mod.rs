pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{GenerationStage, WorkflowPhase};
pub use services::GenerationWorkflow;
pub use value_objects::{Navigation, WorkflowView};
