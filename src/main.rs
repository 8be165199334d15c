use actix_web::{App, HttpServer, middleware, web};

use polls::config::Config;
use polls::db;
use polls::models::question::PgQuestionStore;
use polls::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().expect("Failed to load configuration");

    let pool = db::init_pool(&config)
        .await
        .expect("Failed to connect to the database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    if config.seed_demo {
        if let Err(e) = db::seed_demo(&pool).await {
            log::warn!("Demo seed failed: {e}");
        }
    }

    let store = web::Data::new(PgQuestionStore::new(pool));
    let settings = web::Data::new(config.clone());

    log::info!("Starting server at http://{}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(settings.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure::<PgQuestionStore>)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
