use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::question::{self, NewQuestion};

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub async fn init_pool(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Apply the schema. Every statement is idempotent, so this runs on each start.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

fn demo_questions() -> Vec<NewQuestion> {
    vec![
        NewQuestion {
            text: "What is your favorite color?".to_string(),
            choices: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
        },
        NewQuestion {
            text: "Cats or dogs?".to_string(),
            choices: vec!["Cats".to_string(), "Dogs".to_string()],
        },
        NewQuestion {
            text: "Which language should we use next?".to_string(),
            choices: vec![],
        },
    ]
}

/// Insert a few demo questions when the table is empty. Returns how many were created.
pub async fn seed_demo(pool: &PgPool) -> Result<usize, AppError> {
    if question::count(pool).await? > 0 {
        log::info!("Demo seed skipped: questions already present");
        return Ok(0);
    }

    let demo = demo_questions();
    for new in &demo {
        question::create(pool, new).await?;
    }
    log::info!("Seeded {} demo questions", demo.len());
    Ok(demo.len())
}
