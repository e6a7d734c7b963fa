use actix_web::{routes, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::ChatRequest};

#[routes]
#[post("/chat")]
#[post("/api/chat")]
async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.chat_service.chat(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
