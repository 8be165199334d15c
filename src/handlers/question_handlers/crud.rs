use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::errors::{AppError, render};
use crate::models::question::{QuestionForm, QuestionSource};
use crate::models::question::listing::QuestionCard;
use crate::routes::Routes;
use crate::templates_structs::{PageContext, QuestionDetailTemplate, QuestionFormTemplate};

const FORM_CHOICES: usize = 3;

fn form_template(config: &Config, form: &QuestionForm, errors: Vec<String>) -> QuestionFormTemplate {
    QuestionFormTemplate {
        ctx: PageContext::build(config, "New Question"),
        text: form.text.clone(),
        choices: vec![form.choice_1.clone(), form.choice_2.clone(), form.choice_3.clone()],
        errors,
    }
}

/// GET /questions/{id}
pub async fn show<S: QuestionSource>(
    source: web::Data<S>,
    config: web::Data<Config>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let question = source.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&config, &question.text);
    let tmpl = QuestionDetailTemplate {
        ctx,
        card: QuestionCard::from_question(question),
        back_href: Routes::questions(0, ""),
    };
    render(tmpl)
}

/// GET /questions/new
pub async fn new_form(config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    let tmpl = QuestionFormTemplate {
        ctx: PageContext::build(&config, "New Question"),
        text: String::new(),
        choices: vec![String::new(); FORM_CHOICES],
        errors: vec![],
    };
    render(tmpl)
}

/// POST /questions
/// Invalid input re-renders the form with its errors; success redirects to the new question.
pub async fn create<S: QuestionSource>(
    source: web::Data<S>,
    config: web::Data<Config>,
    form: web::Form<QuestionForm>,
) -> Result<HttpResponse, AppError> {
    let new = match form.to_new_question() {
        Ok(new) => new,
        Err(errors) => return render(form_template(&config, &form, errors)),
    };

    let id = source.create(&new).await?;

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", Routes::show_question(id)))
        .finish())
}
