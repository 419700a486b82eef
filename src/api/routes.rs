// src/api/routes.rs
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use super::handlers;
use super::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::get().to(handlers::generator::classify_strength)),
    );

    // API documentation
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json));
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
