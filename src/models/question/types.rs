use serde::{Deserialize, Serialize};

/// One selectable option under a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub text: String,
    pub votes: i64,
}

/// A poll question with its choices, ordered by choice id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub choices: Vec<Choice>,
}

/// Window requested from a question source: ascending ids, `take` rows after `skip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageArgs {
    pub skip: i64,
    pub take: i64,
}

/// One fetched window of questions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub has_more: bool,
    pub count: i64,
}

/// New question data for creation. Choice texts are already trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub choices: Vec<String>,
}

/// Form data from the "create question" form.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    pub text: String,
    #[serde(default)]
    pub choice_1: String,
    #[serde(default)]
    pub choice_2: String,
    #[serde(default)]
    pub choice_3: String,
}

impl QuestionForm {
    /// Validate and normalize into a `NewQuestion`. Blank choices are dropped.
    pub fn to_new_question(&self) -> Result<NewQuestion, Vec<String>> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(vec!["Question text is required".to_string()]);
        }
        let choices = [&self.choice_1, &self.choice_2, &self.choice_3]
            .into_iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        Ok(NewQuestion { text: text.to_string(), choices })
    }
}
