mod auth;
mod config;
mod db;
mod entity;
mod error;
mod i18n;
mod locale;
mod mailer;
mod repo;
mod response;
mod routes;
mod seed;
#[cfg(test)]
mod test_util;

use actix_web::{middleware, web, App, HttpServer};
use config::AppConfig;
use db::connect_db;
use log::info;
use mailer::Mailer;
use response::json_error_handler;
use routes::{contact, feedback, health, resource};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();
    let db = connect_db(&config).await;
    if config.seed_demo {
        seed::seed_demo_data(&db).await;
    }
    let mailer = Mailer::from_config(&config);
    let server_port = config.server_port;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(middleware::Logger::default())
            .wrap(actix_web::middleware::from_fn(routes::gate::auth_gate_handler))
            .wrap(actix_web::middleware::from_fn(routes::gate::locale_handler))
            .wrap(actix_web::middleware::from_fn(routes::cors::cors_handler))
            .service(
                web::scope("/api")
                    .service(web::scope("/resources").configure(resource::config))
                    .service(web::scope("/feedback").configure(feedback::config))
                    .service(web::scope("/contact").configure(contact::config))
                    .service(web::scope("/health").configure(health::config)),
            )
            .configure(routes::pages::config)
    })
    .bind(("0.0.0.0", server_port))?;
    info!("server started at http://0.0.0.0:{}", server_port);
    server.run().await
}
