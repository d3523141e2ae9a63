use thiserror::Error;

/// Ошибки HTTP-запросов к сервису документов.
///
/// Для пользователя все варианты означают одно и то же: "запрос не удался".
/// Различие доходит только до лога.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Failed to build request: {0}")]
    Build(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Classify an HTTP status; `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(RequestError::Status(status))
        }
    }
}
