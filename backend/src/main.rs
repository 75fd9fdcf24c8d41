mod config;
mod error;
mod favorites;
mod lookup;
mod services;

use crate::config::AppConfig;
use crate::favorites::FavoritesStore;
use crate::lookup::scryfall::ScryfallClient;
use crate::lookup::CardSearch;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env()?;
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    let store = if config.seed_example {
        FavoritesStore::with_example()
    } else {
        FavoritesStore::new()
    };

    let scryfall = ScryfallClient::new(&config.scryfall_base_url)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let card_search: Arc<dyn CardSearch> = Arc::new(scryfall);

    info!("Server running at {}", url);
    info!("Card search backed by {}", config.scryfall_base_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(services::query_config())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::from(card_search.clone()))
            .service(services::search::configure_routes())
            .service(services::my_cards::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
