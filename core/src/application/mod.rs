use crate::{
    domain::{
        common::{GatewayConfig, MealsmithConfig},
        generation::services::GenerationWorkflow,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        recipes::gateway::HttpRecipeGateway,
    },
};

/// The generation workflow wired to the real HTTP gateways.
pub type MealsmithWorkflow =
    GenerationWorkflow<HttpRecipeGateway, HttpRecipeGateway, HttpRecipeGateway>;

/// Application handle: the recipe-generation workflow plus the shared
/// database connection the persistence layer builds on.
pub struct Mealsmith {
    pub workflow: MealsmithWorkflow,
    pub postgres: Postgres,
}

/// Build the application from configuration: connect Postgres and point the
/// workflow at the recipe backend.
pub async fn create_app(config: MealsmithConfig) -> Result<Mealsmith, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url.clone(),
    })
    .await?;

    Ok(Mealsmith {
        workflow: create_workflow(config.gateway),
        postgres,
    })
}

/// Wire a workflow alone, for consumers that bring their own persistence.
pub fn create_workflow(config: GatewayConfig) -> MealsmithWorkflow {
    let gateway = HttpRecipeGateway::new(config);
    GenerationWorkflow::new(gateway.clone(), gateway.clone(), gateway)
}
