use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::{settings::Settings, store::UserStore};

mod error;
mod models;
mod services;
mod settings;
mod store;
mod views;

#[derive(Default)]
pub struct AppState {
    pub users: UserStore,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let state = web::Data::new(AppState {
        users: UserStore::seeded(),
    });

    info!("Server running on port {}", settings.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(services::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
