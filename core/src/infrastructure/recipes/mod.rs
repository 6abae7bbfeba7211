pub mod gateway;

pub use gateway::HttpRecipeGateway;
