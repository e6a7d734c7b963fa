use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

pub const FEATURES: [&str; 5] = ["chat", "quiz", "custom-quiz", "pdf-knowledge-base", "pdf-upload"];

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        message: "Gemini AI Server is running",
        api_key_configured: state.config.api_key_configured(),
        features: FEATURES.to_vec(),
    })
}
