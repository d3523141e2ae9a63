//! Контроллеры загрузки файлов и вопросов.
//!
//! Both controllers are written against two seams so they run the same way in
//! the browser and in native tests:
//! - [`PdfChatBackend`]: the two HTTP calls (`/upload`, `/ask`)
//! - [`SessionStore`]: whoever owns the [`ChatSession`] (a Leptos signal in
//!   the UI, `Rc<RefCell<_>>` in tests)
//!
//! Failures never leave a controller: they end up as a bot entry in the
//! transcript and a line in the log.

use super::aggregate::UploadedFile;
use super::dto::{AskRequest, AskResponse};
use super::session::{ChatSession, Submission};
use crate::shared::error::RequestError;
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

/// Файл, выбранный пользователем
pub trait PickedFile {
    fn name(&self) -> String;
    fn size_bytes(&self) -> u64;
}

/// Удалённый сервис документов
#[async_trait(?Send)]
pub trait PdfChatBackend {
    type File: PickedFile;

    /// `POST /upload` with every file under the same multipart field.
    async fn upload(&self, files: &[Self::File]) -> Result<(), RequestError>;

    /// `POST /ask`
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, RequestError>;
}

/// Владелец состояния сессии.
///
/// `update_session` returns `None` when the state is gone (view torn down).
pub trait SessionStore {
    fn update_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R>;
}

impl SessionStore for Rc<RefCell<ChatSession>> {
    fn update_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Загрузить выбранные файлы.
///
/// An empty selection (cancelled dialog) changes nothing and sends nothing.
pub async fn upload_files<S, B>(store: &S, backend: &B, files: Vec<B::File>)
where
    S: SessionStore,
    B: PdfChatBackend + ?Sized,
{
    let picked: Vec<UploadedFile> = files
        .iter()
        .map(|f| UploadedFile::new(f.name(), f.size_bytes()))
        .collect();
    let count = picked.len();
    let total_bytes: u64 = picked.iter().map(|f| f.size_bytes).sum();

    let started = store
        .update_session(|s| s.begin_upload(picked))
        .unwrap_or(false);
    if !started {
        return;
    }

    let outcome = backend.upload(&files).await;
    match &outcome {
        Ok(()) => log::info!(
            "Files uploaded successfully ({} file(s), {} bytes)",
            count,
            total_bytes
        ),
        Err(e) => log::error!("Error uploading files: {}", e),
    }
    store.update_session(|s| s.finish_upload(&outcome));
}

/// Отправить текущий вопрос.
///
/// If another ask is in flight the question is queued, and the task that owns
/// the in-flight request sends it after appending the previous answer. So
/// answers land in the transcript in submission order.
pub async fn ask_question<S, B>(store: &S, backend: &B)
where
    S: SessionStore,
    B: PdfChatBackend + ?Sized,
{
    let mut question = match store.update_session(ChatSession::submit_question) {
        Some(Submission::Dispatch(question)) => question,
        Some(Submission::Queued) => {
            log::debug!("Question queued behind an in-flight ask");
            return;
        }
        Some(Submission::Rejected) | None => return,
    };

    loop {
        let outcome = backend.ask(&AskRequest::new(question)).await;
        if let Err(e) = &outcome {
            log::error!("Error asking question: {}", e);
        }
        match store.update_session(|s| s.finish_ask(outcome)).flatten() {
            Some(next) => question = next,
            None => break,
        }
    }
}
