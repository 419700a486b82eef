// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse, StrengthQuery, StrengthResponse,
};
use crate::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{Coverage, PolicyConfig};

/// Generate a secure password
///
/// Generates a password from the requested character-class policy and
/// reports the policy's strength.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid policy", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let coverage = match generation_req.strict {
        Some(true) => Coverage::Strict,
        Some(false) => Coverage::BestEffort,
        None => config.coverage(),
    };

    // Create options with defaults or provided values
    let options = PolicyConfig {
        length: generation_req.length.unwrap_or(config.default_password_length),
        include_uppercase: generation_req.include_uppercase.unwrap_or(true),
        include_lowercase: generation_req.include_lowercase.unwrap_or(true),
        include_digits: generation_req.include_digits.unwrap_or(true),
        include_symbols: generation_req.include_symbols.unwrap_or(true),
        coverage,
    };

    if let Err(e) = config.check_length(options.length) {
        warn!("Rejected generation request: {}", e);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e));
    }

    let generator = PasswordGenerator::new();

    let password = match generator.generate_password(&options) {
        Ok(pwd) => pwd,
        Err(e) => {
            warn!("Rejected generation request: {}", e);
            return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e));
        }
    };

    let strength = generator.classify(&options);
    debug!("Generated {}-character password ({})", options.length, strength);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password.into_string()),
        strength: Some(strength),
        error: None,
    })
}

/// Classify policy strength
///
/// Maps a length and enabled class count to a strength label.
#[utoipa::path(
    get,
    path = "/generator/strength",
    tag = "Generator",
    params(StrengthQuery),
    responses(
        (status = 200, description = "Strength label", body = StrengthResponse),
        (status = 400, description = "Missing or malformed query")
    )
)]
pub async fn classify_strength(query: web::Query<StrengthQuery>) -> impl Responder {
    let StrengthQuery { length, classes } = query.into_inner();

    HttpResponse::Ok().json(StrengthResponse {
        length,
        classes,
        strength: crate::generators::classify(length, classes),
    })
}
