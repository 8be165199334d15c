pub mod listing;
pub mod queries;
pub mod source;
pub mod types;

pub use queries::*;
pub use source::{PgQuestionStore, QuestionSource};
pub use types::*;
