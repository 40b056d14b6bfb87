//! HTTP surface of the service.
//!
//! Registers `GET /` and `GET /trends` on an actix-web server sharing the
//! startup `AppConfig` read-only across workers.

mod routes;

use crate::cli::AppConfig;
use crate::error::Result;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;

/// Binds `host:port` and serves until the server is stopped.
pub async fn serve(config: AppConfig, host: &str, port: u16) -> Result<()> {
    let data = web::Data::new(config);

    info!("Starting HTTP server on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
