pub mod entities;
pub mod ports;

pub use entities::{Recipe, RecipeGenerationRequest};
pub use ports::{RecipeGenerator, RecipeStore};
