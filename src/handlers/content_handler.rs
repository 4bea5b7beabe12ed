use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{ContentQuery, ModuleExamQuery, SaveContentRequest, WeeklyExamQuery},
    models::dto::response::{ContentResponse, ExamResponse, MessageResponse},
};

#[get("/content")]
pub async fn get_content(
    state: web::Data<AppState>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse, AppError> {
    let key = query.key();
    let response = match state.content_service.get_content(&key).await? {
        Some(unit) => ContentResponse::found(unit),
        None => ContentResponse::missing(),
    };
    Ok(HttpResponse::Ok().json(response))
}

#[post("/admin/weeks")]
pub async fn save_content(
    state: web::Data<AppState>,
    request: web::Json<SaveContentRequest>,
) -> Result<HttpResponse, AppError> {
    state.content_service.save_content(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Content saved successfully")))
}

#[get("/content/simulado")]
pub async fn get_weekly_exam(
    state: web::Data<AppState>,
    query: web::Query<WeeklyExamQuery>,
) -> Result<HttpResponse, AppError> {
    let questions = state.exam_service.assemble_weekly_exam(query.week_id).await?;
    Ok(HttpResponse::Ok().json(ExamResponse::new(questions)))
}

#[get("/content/concursim-exam")]
pub async fn get_module_exam(
    state: web::Data<AppState>,
    query: web::Query<ModuleExamQuery>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .exam_service
        .assemble_module_exam(query.module_id)
        .await?;
    Ok(HttpResponse::Ok().json(ExamResponse::new(questions)))
}
