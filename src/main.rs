use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use std::sync::Arc;

mod comment;
mod database;
mod docs;
mod middleware;
mod movie;
mod router;
mod utils;
use database::{DocumentStore, MemoryStore, MongoStore};
use middleware::not_found::not_found;
use router::index::app_config;
use serde_json::json;
use utils::config::{AppConfig, StoreBackend};

#[get("/")]
async fn default(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": 200,
        "message": "Welcome to the Mflix API",
        "service": config.service_name,
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    // The Mongo client connects on first use, not here.
    let store: Arc<dyn DocumentStore> = match config.backend {
        StoreBackend::Mongo => Arc::new(MongoStore::new(config.mongo.clone())),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    info!(
        "Starting server on http://{}:{} ({:?} store)",
        config.host, config.port, config.backend
    );

    let bind = (config.host.clone(), config.port);
    let app_state = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(app_config(store.clone()))
            .service(default)
            .default_service(web::route().to(not_found))
    })
    .bind(bind)?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
