use std::future::Future;

use sqlx::PgPool;

use crate::errors::AppError;
use super::queries;
use super::types::{NewQuestion, PageArgs, Question, QuestionPage};

/// Data collaborator behind the question pages.
///
/// Handlers are generic over this trait so the Postgres store can be swapped
/// for an in-memory one in tests.
pub trait QuestionSource: Send + Sync + 'static {
    fn fetch_page(&self, args: PageArgs) -> impl Future<Output = Result<QuestionPage, AppError>> + Send;

    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Question>, AppError>> + Send;

    fn create(&self, new: &NewQuestion) -> impl Future<Output = Result<i64, AppError>> + Send;
}

/// Postgres-backed question source.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionSource for PgQuestionStore {
    async fn fetch_page(&self, args: PageArgs) -> Result<QuestionPage, AppError> {
        queries::find_paginated(&self.pool, args).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        queries::find_by_id(&self.pool, id).await
    }

    async fn create(&self, new: &NewQuestion) -> Result<i64, AppError> {
        queries::create(&self.pool, new).await
    }
}
