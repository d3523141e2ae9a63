//! PDF Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: HTTP backend for `/upload` and `/ask`
//! - view_model.rs: PdfChatVm with the session signal
//! - view.rs: Main component PdfChatPage
//! - upload_panel.rs: file picker and list of uploaded PDFs
//! - transcript.rs: chat transcript

mod model;
mod transcript;
mod upload_panel;
mod view;
mod view_model;

pub use view::PdfChatPage;
