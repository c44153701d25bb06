//! # token-core
//!
//! Разбор токенов вида `NUMBER_REMAINDER`, например `1511443755_2`.
//!
//! Этот крейт содержит:
//!
//! - [`parser`] — разбор и форматирование токенов
//! - [`lines`] — чтение списка токенов из текста/файла
//! - [`types`] — тип [`Token`]
//! - [`error`] — причины, по которым строка не является токеном
//!
//! ## Быстрый пример
//!
//! ```rust
//! use token_core::{parse, Token};
//!
//! assert_eq!(parse(Some("151144375_id")), Some(Token::new(151144375, "id")));
//! assert_eq!(parse(None), None);
//! assert_eq!(parse(Some("12345")), None);
//! ```
//!
//! ## Пример: строгий разбор
//!
//! ```rust
//! use token_core::{try_parse, TokenError};
//!
//! let t = try_parse("151175_13521").unwrap();
//! assert_eq!(t.number(), 151175);
//! assert_eq!(t.remainder(), "13521");
//! assert_eq!(t.to_string(), "151175_13521");
//!
//! let err = try_parse("12345").unwrap_err();
//! assert_eq!(err, TokenError::MissingSeparator("12345".into()));
//! ```
//!
//! ## Пример: чтение токенов
//!
//! ```rust
//! use token_core::lines::read_token_lines;
//! use std::io::Cursor;
//!
//! let input = "1_a\n# comment\n 2_b \n1_a\n";
//! let lines = read_token_lines(Cursor::new(input)).unwrap();
//! assert_eq!(lines, vec!["1_a".to_string(), "2_b".to_string(), "1_a".to_string()]);
//! ```
//!
//! ## Дизайн
//!
//! Только чистые функции: без состояния, без I/O (кроме чтения списка
//! строк в [`lines`]) и без логирования. `parse` никогда не падает,
//! `try_parse` объясняет отказ.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Разбор и форматирование токенов.
pub mod parser;

/// Чтение строк-токенов из текста и файлов.
pub mod lines;

/// Доменные типы.
pub mod types;

/// Ошибки `token-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::SEPARATOR;

// --- Re-exports (публичный фасад API) ---

pub use crate::error::TokenError;
pub use crate::parser::{format_token, parse, parse_all, try_parse};
pub use crate::types::Token;
