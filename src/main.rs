use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use aisim_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::get_content)
            .service(handlers::save_content)
            .service(handlers::get_weekly_exam)
            .service(handlers::get_module_exam)
            .service(handlers::get_progress)
            .service(handlers::save_progress)
            .service(handlers::record_lesson)
    })
    .bind((host, port))?
    .run()
    .await
}
