use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::question::QuestionSource;
use crate::models::question::listing::{self, QuestionsList};
use crate::templates_structs::{PageContext, QuestionListTemplate};

/// `page` is kept as raw text so a malformed value falls back to the first
/// page instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
    filter: Option<String>,
}

async fn load<S: QuestionSource>(source: &S, query: &ListQuery) -> Result<QuestionsList, AppError> {
    let page = listing::parse_page(query.page.as_deref());
    let filter = query.filter.as_deref().unwrap_or("");

    let fetched = source.fetch_page(listing::page_args(page)).await?;
    log::debug!(
        "questions page {page}: fetched {} of {}, has_more={}",
        fetched.questions.len(),
        fetched.count,
        fetched.has_more
    );

    Ok(QuestionsList::build(page, fetched, filter))
}

/// GET /questions
/// One page of questions, narrowed by the optional `filter` substring.
pub async fn list<S: QuestionSource>(
    source: web::Data<S>,
    config: web::Data<Config>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let list = load(source.get_ref(), &query).await?;

    let ctx = PageContext::build(&config, "Questions");
    render(QuestionListTemplate { ctx, list })
}

/// GET /api/questions
/// Same listing as JSON.
pub async fn api_list<S: QuestionSource>(
    source: web::Data<S>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let list = load(source.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(list))
}
