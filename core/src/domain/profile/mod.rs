pub mod entities;
pub mod ports;

pub use entities::NutritionProfile;
pub use ports::{ProfileFetch, ProfileGateway};
