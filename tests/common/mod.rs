//! Shared test infrastructure: an in-memory question source and an app
//! factory wired the same way `main` wires the Postgres store.

#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::{App, web};

use polls::config::Config;
use polls::errors::AppError;
use polls::models::question::{
    Choice, NewQuestion, PageArgs, Question, QuestionPage, QuestionSource,
};
use polls::routes;

/// Questions held in memory, kept sorted by id. Records every page request.
#[derive(Default)]
pub struct MemoryQuestions {
    questions: Mutex<Vec<Question>>,
    requests: Mutex<Vec<PageArgs>>,
}

impl MemoryQuestions {
    pub fn with(questions: Vec<Question>) -> Self {
        let mut questions = questions;
        questions.sort_by_key(|q| q.id);
        MemoryQuestions { questions: Mutex::new(questions), requests: Mutex::new(vec![]) }
    }

    pub fn requests(&self) -> Vec<PageArgs> {
        self.requests.lock().unwrap().clone()
    }

    pub fn all(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }
}

impl QuestionSource for MemoryQuestions {
    async fn fetch_page(&self, args: PageArgs) -> Result<QuestionPage, AppError> {
        self.requests.lock().unwrap().push(args);

        let all = self.questions.lock().unwrap().clone();
        let count = all.len() as i64;
        let questions = all
            .into_iter()
            .skip(args.skip as usize)
            .take(args.take as usize)
            .collect();

        Ok(QuestionPage { questions, has_more: args.skip.saturating_add(args.take) < count, count })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        Ok(self.questions.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn create(&self, new: &NewQuestion) -> Result<i64, AppError> {
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let choices = new
            .choices
            .iter()
            .enumerate()
            .map(|(i, text)| Choice { id: i as i64 + 1, text: text.clone(), votes: 0 })
            .collect();
        questions.push(Question { id, text: new.text.clone(), choices });
        Ok(id)
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn choice(id: i64, text: &str, votes: i64) -> Choice {
    Choice { id, text: text.to_string(), votes }
}

pub fn question(id: i64, text: &str, choices: Vec<Choice>) -> Question {
    Question { id, text: text.to_string(), choices }
}

/// `n` questions with ids 1..=n and no choices.
pub fn numbered_questions(n: i64) -> Vec<Question> {
    (1..=n).map(|i| question(i, &format!("Question {i}"), vec![])).collect()
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/polls_test".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Build the app around `source`, as `main` does for the Postgres store.
pub fn app(
    source: web::Data<MemoryQuestions>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(source)
        .app_data(web::Data::new(test_config()))
        .configure(routes::configure::<MemoryQuestions>)
        .default_service(web::to(routes::not_found))
}
