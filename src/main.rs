use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use blog_admin_api::auth::middleware::JwtSecret;
use blog_admin_api::config::Config;
use blog_admin_api::create_pool;
use blog_admin_api::handlers;
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use std::io;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = Config::from_env().map_err(io::Error::other)?;

    let db = create_pool(&config).await.map_err(io::Error::other)?;
    Migrator::up(&db, None).await.map_err(io::Error::other)?;
    tracing::info!("Connected to database, migrations applied");

    let db_data = web::Data::new(db);
    let jwt_secret = web::Data::new(JwtSecret(config.jwt_secret.clone()));

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(jwt_secret.clone())
            .route("/health", web::get().to(handlers::health::health))
            .service(web::scope("/api").configure(handlers::init_routes))
            .default_service(web::to(handlers::not_found))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
