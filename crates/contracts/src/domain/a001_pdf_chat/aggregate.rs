use serde::{Deserialize, Serialize};

pub const UPLOAD_FAILED_TEXT: &str = "Failed to upload files.";
pub const ASK_FAILED_TEXT: &str = "Failed to get an answer.";
pub const NO_ANSWER_TEXT: &str = "No answer received.";

/// Автор записи в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

impl Author {
    pub fn as_str(&self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Bot => "bot",
        }
    }
}

/// Запись в транскрипте. После создания не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    author: Author,
    text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            author: Author::Bot,
            text: text.into(),
        }
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

/// A file the user picked for upload, as shown in the upload list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Human-readable size for the upload list, e.g. "1.5 MB".
    pub fn display_size(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size_bytes {
            n if n < KB => format!("{} B", n),
            n if n < MB => format!("{:.1} KB", n as f64 / KB as f64),
            n => format!("{:.1} MB", n as f64 / MB as f64),
        }
    }
}
