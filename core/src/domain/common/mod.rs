use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;

use self::entities::app_errors::CoreError;

#[derive(Clone, Debug)]
pub struct MealsmithConfig {
    pub database: DatabaseConfig,
    pub gateway: GatewayConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Where the recipe backend lives and how to authenticate against it.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl MealsmithConfig {
    /// Read configuration from the environment. A missing `POSTGRES_URL` or
    /// `RECIPE_API_URL` is a hard error; the API token is optional.
    pub fn from_env() -> Result<Self, CoreError> {
        let database_url =
            std::env::var("POSTGRES_URL").map_err(|_| CoreError::MissingEnv("POSTGRES_URL"))?;
        let base_url =
            std::env::var("RECIPE_API_URL").map_err(|_| CoreError::MissingEnv("RECIPE_API_URL"))?;
        let bearer_token = std::env::var("RECIPE_API_TOKEN").ok();

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            gateway: GatewayConfig {
                base_url,
                bearer_token,
            },
        })
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
