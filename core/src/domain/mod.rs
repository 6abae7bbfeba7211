pub mod auth;
pub mod common;
pub mod generation;
pub mod profile;
pub mod recipe;
