use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use bubloo_lab_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.validate().map_err(std::io::Error::other)?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).await.map_err(std::io::Error::other)?;
    log_startup(&state).await;

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}

async fn log_startup(state: &AppState) {
    let config = &state.config;
    log::info!(
        "Server running on http://{}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "Gemini API key: {}",
        if config.api_key_configured() { "configured" } else { "missing" }
    );
    log::info!(
        "Knowledge base: {} ({:?} refresh, {:?} grounding, {:?} context)",
        state.corpus_service.source_dir().display(),
        config.corpus_refresh,
        config.grounding,
        config.context_policy
    );

    match state.corpus_service.current().await {
        Ok(corpus) if corpus.count() > 0 => {
            log::info!("PDFs loaded: {}", corpus.count());
            log::info!("Files: {}", corpus.names().join(", "));
        }
        Ok(_) => log::info!(
            "PDFs loaded: 0. Add PDFs to {} to enable PDF-based responses",
            state.corpus_service.source_dir().display()
        ),
        Err(err) => log::warn!("Could not read knowledge base: {}", err),
    }
}
