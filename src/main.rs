use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use taskhub::config::EnvConfig;
use taskhub::db::service::DbService;
use taskhub::routes::configure_routes;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let db_service = Arc::new(
        DbService::new(&config.db_url, config.max_connections)
            .await
            .map_err(|e| {
                error!("Failed to initialize DbService: {}", e);
                std::io::Error::other(e.to_string())
            })?,
    );

    info!("Starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
