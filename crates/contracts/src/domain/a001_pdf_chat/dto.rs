use super::aggregate::NO_ANSWER_TEXT;
use serde::{Deserialize, Serialize};

pub const UPLOAD_PATH: &str = "/upload";
pub const ASK_PATH: &str = "/ask";

/// Multipart field name; every file goes under the same name.
pub const UPLOAD_FIELD: &str = "pdfs";

/// Тело запроса `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Ответ `POST /ask`. Поле `answer` может отсутствовать или быть `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

impl AskResponse {
    pub fn answered(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }

    /// Text to show in the transcript; empty or missing answers fall back.
    pub fn answer_text(&self) -> &str {
        match self.answer.as_deref() {
            Some(answer) if !answer.is_empty() => answer,
            _ => NO_ANSWER_TEXT,
        }
    }
}
