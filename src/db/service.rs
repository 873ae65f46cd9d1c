use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Owns the connection pool. Built once in `main` and handed to handlers
/// through `web::Data<Arc<DbService>>`.
#[derive(Clone)]
pub struct DbService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri.to_owned());
        options
            .max_connections(max_connections)
            .sqlx_logging_level(log::LevelFilter::Debug);
        Self::connect(options).await
    }

    /// Connects and applies pending migrations.
    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }
}
