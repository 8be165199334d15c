use askama::Template;

use crate::models::question::listing::{QuestionCard, QuestionsList};
use super::PageContext;

#[derive(Template)]
#[template(path = "questions/list.html")]
pub struct QuestionListTemplate {
    pub ctx: PageContext,
    pub list: QuestionsList,
}

#[derive(Template)]
#[template(path = "questions/detail.html")]
pub struct QuestionDetailTemplate {
    pub ctx: PageContext,
    pub card: QuestionCard,
    pub back_href: String,
}

#[derive(Template)]
#[template(path = "questions/form.html")]
pub struct QuestionFormTemplate {
    pub ctx: PageContext,
    pub text: String,
    pub choices: Vec<String>,
    pub errors: Vec<String>,
}
