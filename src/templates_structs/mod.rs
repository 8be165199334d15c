mod question;

pub use self::question::{QuestionDetailTemplate, QuestionFormTemplate, QuestionListTemplate};

use crate::config::Config;
use crate::routes::Routes;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.title`, etc.
pub struct PageContext {
    pub app_name: String,
    pub title: String,
    pub new_question_href: String,
}

impl PageContext {
    pub fn build(config: &Config, title: &str) -> Self {
        Self {
            app_name: config.app_name.clone(),
            title: title.to_string(),
            new_question_href: Routes::new_question(),
        }
    }
}
