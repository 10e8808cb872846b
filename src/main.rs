use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use autograder::api::{configure_routes, AppState};
use autograder::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded ({}), using process environment", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env().map_err(std::io::Error::other)?;

    log::info!(
        "interpreter: {} {} (timeout {:?})",
        app_config.interpreter.runtime,
        app_config.interpreter.entrypoint.display(),
        app_config.interpreter.timeout
    );
    if !app_config.interpreter.entrypoint.exists() {
        log::warn!(
            "interpreter entrypoint {} does not exist yet; executions will fail until it does",
            app_config.interpreter.entrypoint.display()
        );
    }

    let bind = (app_config.bind_addr.clone(), app_config.port);
    let state = AppState::new(app_config);

    println!("🚀 Starting server on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}
