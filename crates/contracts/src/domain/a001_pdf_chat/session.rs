//! Состояние сессии PDF-чата и чистые переходы.
//!
//! `ChatSession` хранит загруженные файлы, транскрипт и текущий ввод.
//! Все изменения идут через методы ниже; контроллеры только вызывают их
//! до и после сетевых запросов.

use super::aggregate::{ChatEntry, UploadedFile, ASK_FAILED_TEXT, UPLOAD_FAILED_TEXT};
use super::dto::AskResponse;
use crate::shared::error::RequestError;
use std::collections::VecDeque;

/// Result of submitting the pending question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, nothing changed.
    Rejected,
    /// No ask in flight: the caller must send this question now.
    Dispatch(String),
    /// Another ask is in flight; the question waits in the outbox.
    Queued,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    files: Vec<UploadedFile>,
    uploads_in_flight: usize,
    transcript: Vec<ChatEntry>,
    pending_question: String,
    outbox: VecDeque<String>,
    ask_in_flight: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn is_uploading(&self) -> bool {
        self.uploads_in_flight > 0
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub fn pending_question(&self) -> &str {
        &self.pending_question
    }

    pub fn is_asking(&self) -> bool {
        self.ask_in_flight
    }

    pub fn queued_questions(&self) -> usize {
        self.outbox.len()
    }

    pub fn set_pending_question(&mut self, text: impl Into<String>) {
        self.pending_question = text.into();
    }

    /// Начать загрузку: добавить файлы к уже выбранным.
    ///
    /// Returns `false` for an empty selection, which leaves the session
    /// untouched and must not produce a request.
    pub fn begin_upload(&mut self, files: Vec<UploadedFile>) -> bool {
        if files.is_empty() {
            return false;
        }
        self.files.extend(files);
        self.uploads_in_flight += 1;
        true
    }

    /// Завершить загрузку (успех или ошибка).
    pub fn finish_upload(&mut self, outcome: &Result<(), RequestError>) {
        self.uploads_in_flight = self.uploads_in_flight.saturating_sub(1);
        if outcome.is_err() {
            self.transcript.push(ChatEntry::bot(UPLOAD_FAILED_TEXT));
        }
    }

    /// Принять текущий вопрос.
    ///
    /// Order matters: the user entry is appended and the input cleared before
    /// the caller gets the question to send.
    pub fn submit_question(&mut self) -> Submission {
        if self.pending_question.trim().is_empty() {
            return Submission::Rejected;
        }
        let question = std::mem::take(&mut self.pending_question);
        self.transcript.push(ChatEntry::user(question.clone()));

        if self.ask_in_flight {
            self.outbox.push_back(question);
            Submission::Queued
        } else {
            self.ask_in_flight = true;
            Submission::Dispatch(question)
        }
    }

    /// Записать ответ на вопрос, отправленный последним.
    ///
    /// Appends exactly one bot entry and returns the next queued question,
    /// which the caller must send. `ask_in_flight` stays set in that case.
    pub fn finish_ask(&mut self, outcome: Result<AskResponse, RequestError>) -> Option<String> {
        let text = match &outcome {
            Ok(response) => response.answer_text(),
            Err(_) => ASK_FAILED_TEXT,
        };
        self.transcript.push(ChatEntry::bot(text));

        let next = self.outbox.pop_front();
        self.ask_in_flight = next.is_some();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pdf_chat::aggregate::{Author, NO_ANSWER_TEXT};

    fn files(names: &[&str]) -> Vec<UploadedFile> {
        names.iter().map(|n| UploadedFile::new(*n, 1)).collect()
    }

    fn names(session: &ChatSession) -> Vec<&str> {
        session.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_upload_set_accumulates_in_order() {
        let mut session = ChatSession::new();
        assert!(session.begin_upload(files(&["a.pdf", "b.pdf"])));
        session.finish_upload(&Ok(()));
        assert!(session.begin_upload(files(&["c.pdf", "a.pdf"])));
        session.finish_upload(&Ok(()));

        assert_eq!(names(&session), vec!["a.pdf", "b.pdf", "c.pdf", "a.pdf"]);
        assert!(!session.is_uploading());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut session = ChatSession::new();
        let before = session.clone();
        assert!(!session.begin_upload(Vec::new()));
        assert_eq!(session, before);
    }

    #[test]
    fn test_uploading_flag_spans_request() {
        let mut session = ChatSession::new();
        assert!(!session.is_uploading());
        session.begin_upload(files(&["c.pdf"]));
        assert!(session.is_uploading());
        session.finish_upload(&Err(RequestError::Status(500)));
        assert!(!session.is_uploading());

        assert_eq!(names(&session), vec!["c.pdf"]);
        assert_eq!(session.transcript(), &[ChatEntry::bot(UPLOAD_FAILED_TEXT)]);
    }

    #[test]
    fn test_overlapping_uploads_keep_flag_until_last_settles() {
        let mut session = ChatSession::new();
        session.begin_upload(files(&["a.pdf"]));
        session.begin_upload(files(&["b.pdf"]));
        session.finish_upload(&Ok(()));
        assert!(session.is_uploading());
        session.finish_upload(&Ok(()));
        assert!(!session.is_uploading());
    }

    #[test]
    fn test_blank_question_is_rejected() {
        for blank in ["", "   ", "\n\t "] {
            let mut session = ChatSession::new();
            session.set_pending_question(blank);
            assert_eq!(session.submit_question(), Submission::Rejected);
            assert!(session.transcript().is_empty());
            assert_eq!(session.pending_question(), blank);
            assert!(!session.is_asking());
        }
    }

    #[test]
    fn test_submit_appends_then_clears() {
        let mut session = ChatSession::new();
        session.set_pending_question("  What is X?\n");
        assert_eq!(
            session.submit_question(),
            Submission::Dispatch("  What is X?\n".to_string())
        );
        assert_eq!(session.pending_question(), "");
        assert_eq!(session.transcript(), &[ChatEntry::user("  What is X?\n")]);
        assert!(session.is_asking());
    }

    #[test]
    fn test_finish_ask_texts() {
        let cases = [
            (Ok(AskResponse::answered("X is Y")), "X is Y"),
            (Ok(AskResponse::default()), NO_ANSWER_TEXT),
            (Err(RequestError::Transport("offline".into())), ASK_FAILED_TEXT),
            (Err(RequestError::Status(502)), ASK_FAILED_TEXT),
        ];
        for (outcome, expected) in cases {
            let mut session = ChatSession::new();
            session.set_pending_question("What is X?");
            session.submit_question();
            assert_eq!(session.finish_ask(outcome), None);
            assert_eq!(
                session.transcript(),
                &[ChatEntry::user("What is X?"), ChatEntry::bot(expected)]
            );
            assert!(!session.is_asking());
        }
    }

    #[test]
    fn test_second_question_waits_for_first_answer() {
        let mut session = ChatSession::new();
        session.set_pending_question("first");
        assert_eq!(
            session.submit_question(),
            Submission::Dispatch("first".to_string())
        );
        session.set_pending_question("second");
        assert_eq!(session.submit_question(), Submission::Queued);
        assert_eq!(session.queued_questions(), 1);

        let next = session.finish_ask(Ok(AskResponse::answered("one")));
        assert_eq!(next.as_deref(), Some("second"));
        assert!(session.is_asking());

        assert_eq!(session.finish_ask(Ok(AskResponse::answered("two"))), None);
        assert!(!session.is_asking());

        let authors: Vec<_> = session
            .transcript()
            .iter()
            .map(|e| (e.author(), e.text()))
            .collect();
        assert_eq!(
            authors,
            vec![
                (Author::User, "first"),
                (Author::User, "second"),
                (Author::Bot, "one"),
                (Author::Bot, "two"),
            ]
        );
    }

    #[test]
    fn test_upload_failure_does_not_block_questions() {
        let mut session = ChatSession::new();
        session.begin_upload(files(&["a.pdf"]));
        session.set_pending_question("still there?");
        assert!(matches!(session.submit_question(), Submission::Dispatch(_)));
        session.finish_upload(&Err(RequestError::Status(500)));
        session.finish_ask(Ok(AskResponse::answered("yes")));

        assert_eq!(
            session.transcript(),
            &[
                ChatEntry::user("still there?"),
                ChatEntry::bot(UPLOAD_FAILED_TEXT),
                ChatEntry::bot("yes"),
            ]
        );
    }
}
