use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;

use farm_easy::models::config::ServerConfig;
use farm_easy::repository::InMemoryRepository;
use farm_easy::routes;

const SETTINGS_PATH: &str = "config/settings";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load(SETTINGS_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let repo = match InMemoryRepository::from_json_file(&server_config.catalog_path) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!(
                "Failed to load catalog from {}: {e}",
                server_config.catalog_path
            );
            std::process::exit(1);
        }
    };

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting Farm-Easy on {}:{}", bind_address.0, bind_address.1);

    let server_config = web::Data::new(server_config);
    let repo = web::Data::new(repo);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
