use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CustomQuizRequest, QuizRequest},
};

#[post("/api/quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quiz/custom")]
async fn generate_custom_quiz(
    state: web::Data<AppState>,
    request: web::Json<CustomQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .generate_custom_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
