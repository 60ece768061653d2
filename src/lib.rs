pub mod config;
pub mod crud;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub use config::Config;
pub use db::{create_pool, DbPool};

use handlers::crud::resource_scope;
use models::admin::Admin;
use models::cart::Cart;
use models::cart_item::CartItem;
use models::client::Client;
use models::company::Company;
use models::product::Product;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
///
/// An unreachable database is reported to the caller rather than aborting:
/// startup logs the failure and the server still comes up, with requests
/// failing per-request until the database is back.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Build and return an actix-web `Server` bound to the configured address.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(pool: DbPool, config: &Config) -> std::io::Result<actix_web::dev::Server> {
    let host = config.host.clone();
    let port = config.port;
    let image_base_url = config.image_base_url.clone();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(handlers::images::ImageProxy::new(
                reqwest::Client::new(),
                image_base_url.clone(),
            )))
            .wrap(Logger::default())
            .service(resource_scope::<Admin>("/admins"))
            .service(resource_scope::<Client>("/clients"))
            .service(resource_scope::<Product>("/products"))
            .service(resource_scope::<Company>("/companies"))
            // Carts carry two extra routes, so the scope is spelled out;
            // literal segments must precede the `/{id}` matchers.
            .service(
                web::scope("/carts")
                    .route("", web::get().to(handlers::crud::list_all::<Cart>))
                    .route("", web::post().to(handlers::crud::create::<Cart>))
                    .route("/items", web::post().to(handlers::cart::add_item))
                    .route("/status/{status}", web::get().to(handlers::cart::list_by_status))
                    .route(
                        "/quantity/{count}",
                        web::get().to(handlers::crud::list_limited::<Cart>),
                    )
                    .route("/{id}", web::get().to(handlers::crud::get_by_id::<Cart>))
                    .route("/{id}", web::put().to(handlers::crud::update::<Cart>))
                    .route("/{id}", web::delete().to(handlers::crud::delete::<Cart>)),
            )
            .service(resource_scope::<CartItem>("/cart-items"))
            .route("/images/{name}", web::get().to(handlers::images::get_image))
    })
    .bind((host, port))?
    .run())
}
