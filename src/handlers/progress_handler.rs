use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::ProgressRecord,
    models::dto::request::RecordLessonRequest,
    models::dto::response::MessageResponse,
};

#[get("/users/{user_id}/progress")]
pub async fn get_progress(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let record = state.progress_service.get_progress(&user_id).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[post("/users/{user_id}/progress")]
pub async fn save_progress(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    record: web::Json<ProgressRecord>,
) -> Result<HttpResponse, AppError> {
    state
        .progress_service
        .replace_progress(&user_id, record.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Progress saved")))
}

#[post("/users/{user_id}/progress/lessons")]
pub async fn record_lesson(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    request: web::Json<RecordLessonRequest>,
) -> Result<HttpResponse, AppError> {
    let record = state
        .progress_service
        .record_lesson_completion(&user_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}
