//! # quote-core
//!
//! Базовые типы и логика поиска для Quote Server / Quote Client.
//!
//! Этот крейт содержит:
//!
//! - [`types`] — цитата и её "прощающее" декодирование из JSON
//! - [`search`] — нормализация, режимы поиска и фильтр
//! - [`suggest`] — подсказки авторов и тегов (со счётчиками)
//! - [`browser`] — состояние браузера цитат одной сессии
//! - [`command`] — разбор строк ввода клиента
//! - [`error`] — типы ошибок, которые возвращают компоненты `quote-core`
//!
//! ## Быстрый пример: поиск по тегу
//!
//! ```rust
//! use quote_core::{Browser, Quote, SearchMode};
//!
//! let mut browser = Browser::new();
//! let ticket = browser.begin_fetch();
//! browser.complete_fetch::<String>(ticket, Ok(vec![
//!     Quote::new("Hope is a feathered thing", "Emily").with_tags(["hope", "birds"]),
//!     Quote::new("Be water", "Bruce").with_tags(["water", "hope"]),
//! ]));
//!
//! browser.switch_mode(SearchMode::Tag);
//! browser.input("hope");
//!
//! assert_eq!(browser.visible().len(), 2);
//! assert_eq!(browser.suggestions().labels(), vec!["hope (2 quotes)".to_string()]);
//! ```
//!
//! ## Пример: разбор ввода
//!
//! ```rust
//! use quote_core::command::{parse_input, Input};
//! use quote_core::SearchMode;
//!
//! assert_eq!(parse_input(":mode author").unwrap(), Input::SwitchMode(SearchMode::Author));
//! assert_eq!(parse_input(":pick 2").unwrap(), Input::Pick(1));
//! assert_eq!(parse_input("water").unwrap(), Input::Query("water".to_string()));
//! ```
//!
//! ## Дизайн
//!
//! `quote-core` задуман как “нулевая” зависимость для всех частей системы:
//! сервер, клиент, тесты. Поэтому здесь держим только чистые типы и
//! синхронные вычисления над снимком, без runtime/async и без сети.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Цитата и её декодирование.
pub mod types;

/// Нормализация, режимы поиска, фильтр.
pub mod search;

/// Подсказки авторов и тегов.
pub mod suggest;

/// Состояние браузера цитат.
pub mod browser;

/// Разбор строк ввода (`:mode tag`, `:pick 1`, ...).
pub mod command;

/// Ошибки `quote-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::QUOTES_PATH;

// --- Re-exports (публичный фасад API) ---

pub use crate::browser::{Browser, FetchTicket, Suggestions, View};
pub use crate::error::{BrowserError, CommandError};
pub use crate::search::{Search, SearchMode, filter_quotes, normalize};
pub use crate::suggest::{TagSuggestion, suggest_authors, suggest_tags};
pub use crate::types::Quote;
