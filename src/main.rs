use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use choice_bridge::{app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    log::info!(
        "Starting redirect server on http://{}:{}",
        bind_address.0,
        bind_address.1
    );
    log::info!("Annotation sessions at {}", config.prodigy_base_url);

    let state = AppState::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
