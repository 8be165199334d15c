use actix_web::{web, HttpResponse};

use crate::handlers::question_handlers;
use crate::models::question::QuestionSource;

/// Named route paths used as navigation targets by the pages.
pub struct Routes;

impl Routes {
    pub fn new_question() -> String {
        "/questions/new".to_string()
    }

    pub fn show_question(id: i64) -> String {
        format!("/questions/{id}")
    }

    /// Question list at `page`; a non-empty filter is carried in the query string.
    pub fn questions(page: i64, filter: &str) -> String {
        let page = page.to_string();
        let query = if filter.is_empty() {
            serde_urlencoded::to_string([("page", page.as_str())])
        } else {
            serde_urlencoded::to_string([("page", page.as_str()), ("filter", filter)])
        };
        match query {
            Ok(q) => format!("/questions?{q}"),
            Err(_) => format!("/questions?page={page}"),
        }
    }
}

/// Register the question pages against a concrete question source.
/// `/questions/new` must be registered before `/questions/{id}`.
pub fn configure<S: QuestionSource>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/questions"))
            .finish()
    }))
    .route("/questions", web::get().to(question_handlers::list::<S>))
    .route("/questions/new", web::get().to(question_handlers::new_form))
    .route("/questions", web::post().to(question_handlers::create::<S>))
    .route("/questions/{id}", web::get().to(question_handlers::show::<S>))
    .route("/api/questions", web::get().to(question_handlers::api_list::<S>));
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../templates/errors/404.html"))
}
