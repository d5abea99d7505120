use serde::{Deserialize, Serialize};

/// Тело запроса `POST /api/ask/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Вопрос в том виде, в каком его ввёл пользователь (без trim)
    pub question: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}
