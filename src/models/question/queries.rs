use std::collections::HashMap;

use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
}

#[derive(sqlx::FromRow)]
struct ChoiceRow {
    id: i64,
    question_id: i64,
    text: String,
    votes: i64,
}

/// Load the choices of every given question in one round trip, grouped by question id.
async fn choices_for(pool: &PgPool, question_ids: &[i64]) -> Result<HashMap<i64, Vec<Choice>>, AppError> {
    if question_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, ChoiceRow>(
        "SELECT id, question_id, text, votes FROM choices \
         WHERE question_id = ANY($1) \
         ORDER BY id ASC",
    )
    .bind(question_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<Choice>> = HashMap::new();
    for row in rows {
        grouped.entry(row.question_id).or_default().push(Choice {
            id: row.id,
            text: row.text,
            votes: row.votes,
        });
    }
    Ok(grouped)
}

pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Fetch one window of questions with their choices.
/// `has_more` is true when rows exist past `skip + take`.
pub async fn find_paginated(pool: &PgPool, args: PageArgs) -> Result<QuestionPage, AppError> {
    let skip = args.skip.max(0);
    let take = args.take.max(0);
    let total = count(pool).await?;

    let rows = sqlx::query_as::<_, QuestionRow>(
        "SELECT id, text FROM questions ORDER BY id ASC LIMIT $1 OFFSET $2",
    )
    .bind(take)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut choices = choices_for(pool, &ids).await?;

    let questions = rows
        .into_iter()
        .map(|row| Question {
            choices: choices.remove(&row.id).unwrap_or_default(),
            id: row.id,
            text: row.text,
        })
        .collect();

    Ok(QuestionPage {
        questions,
        has_more: skip.saturating_add(take) < total,
        count: total,
    })
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Question>, AppError> {
    let row = sqlx::query_as::<_, QuestionRow>("SELECT id, text FROM questions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let choices = sqlx::query_as::<_, Choice>(
        "SELECT id, text, votes FROM choices WHERE question_id = $1 ORDER BY id ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(Question { id: row.id, text: row.text, choices }))
}

/// Insert a question and its choices in one transaction. Returns the new question id.
pub async fn create(pool: &PgPool, new: &NewQuestion) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar("INSERT INTO questions (text) VALUES ($1) RETURNING id")
        .bind(&new.text)
        .fetch_one(&mut *tx)
        .await?;

    for choice in &new.choices {
        sqlx::query("INSERT INTO choices (question_id, text, votes) VALUES ($1, $2, 0)")
            .bind(id)
            .bind(choice)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    log::info!("Created question {id} with {} choices", new.choices.len());
    Ok(id)
}
