mod chat_request;
mod config;
mod relay;
mod upstream;

use actix_web::{web, App, HttpServer};
use tracing::info;

/*
    Backend relay for the ChatPKR web client.
    The client posts { "message": "..." } to /api/chat and gets back the raw
    OpenRouter chat-completion payload. The OpenRouter API key is read from
    OPENROUTER_API_KEY (a .env file works too) so it never ships to the browser.
 */
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    let upstream = web::Data::new(upstream::UpstreamClient::new(&config));

    info!("listening on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(upstream.clone())
            .configure(relay::configure)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
