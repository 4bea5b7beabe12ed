use actix_web::{get, HttpResponse};

pub mod content_handler;
pub mod progress_handler;

pub use content_handler::{get_content, get_module_exam, get_weekly_exam, save_content};
pub use progress_handler::{get_progress, record_lesson, save_progress};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
