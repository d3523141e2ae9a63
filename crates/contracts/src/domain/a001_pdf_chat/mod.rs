//! PDF Chat: загрузка PDF и вопросы по ним.
//!
//! - aggregate.rs: записи чата и загруженные файлы
//! - dto.rs: DTO и пути эндпоинтов `/upload` и `/ask`
//! - session.rs: состояние сессии и переходы
//! - controller.rs: асинхронные контроллеры загрузки и вопросов

pub mod aggregate;
pub mod controller;
pub mod dto;
pub mod session;
