#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::response::content::RawHtml;
use rocket_dyn_templates::Template;

mod boot;
mod config;
mod db;
mod models;
mod render;
mod routes;
mod sms77;
mod store;


use config::AppConfig;
use store::sqlite::SqliteStore;
use store::Store;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/sms'>← SMS</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/sms'>← SMS</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let figment = rocket::Config::figment();
    let config = AppConfig::from_figment(&figment);

    // Boot check: create the db directory, validate templates
    boot::run(&config);

    let store = SqliteStore::new_at(&config.database_path)
        .expect("Failed to initialize database pool");
    store.run_migrations().expect("Failed to run database migrations");
    sms77::install(&store).expect("Failed to register extension settings");

    if sms77::api_key(&store).is_empty() {
        log::warn!("No sms77 API key configured yet; set one under /settings");
    }
    log::info!("Gateway: {}", config.gateway_url);

    let store: Arc<dyn Store> = Arc::new(store);

    rocket::custom(figment)
        .manage(store)
        .manage(config)
        .attach(Template::fairing())
        .mount("/", routes::routes())
        .register("/", catchers![not_found, server_error])
}
