use dotenvy::dotenv;
use storefront_api::{build_server, create_pool, run_migrations, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let pool = create_pool(&config.database_url);

    if let Err(e) = run_migrations(&pool) {
        log::error!("database not ready at startup: {}", e);
    }

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(pool, &config)?.await
}
