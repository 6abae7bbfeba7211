pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{ActionState, User};
pub use ports::SessionRepository;
pub use services::{validated_action, validated_action_with_user};
