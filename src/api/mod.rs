// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;

use crate::config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::classify_strength
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::StrengthResponse,
            crate::models::StrengthLabel
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "rust_passgen API",
        version = "0.1.0",
        description = "Policy-driven secure password generator",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config, port: u16) -> std::io::Result<()> {
    let address = config.web_address.clone();
    log::info!("Starting rust_passgen API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
