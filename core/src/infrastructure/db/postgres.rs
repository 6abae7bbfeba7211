use sea_orm::{Database, DatabaseConnection};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

/// Postgres handle for the application's persistence layer. The workflow
/// itself talks to HTTP gateways; this exists so the rest of the
/// application shares one ORM connection pool.
#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(&config.database_url).await?;
        db.ping().await?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
