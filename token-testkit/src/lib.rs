//! # token-testkit
//!
//! Фикстуры и структурные проверки для тестов поверх `token-core`.
//! В продакшен-зависимости не подключается.
//!
//! - [`Design`] / [`DesignClient`] — плоская запись и фейковый клиент
//!   с зашитыми ответами
//! - [`FieldSet`] — перечисление полей записи для сравнения по именам
//! - [`assert_eq_ignoring_fields`] / [`assert_eq_using_fields`] —
//!   сравнение без части полей или только по части полей
//! - [`contains_exactly`] — "те же элементы в том же порядке" с отчётом
//!   о недостающих и лишних элементах
//! - [`as_clue`] — группировка проверок вокруг значения
//!
//! ## Пример
//!
//! ```rust
//! use token_testkit::{assert_eq_ignoring_fields, Design, DesignClient};
//!
//! let actual = DesignClient::new().request_design(1);
//! let expected = Design::new(2, 9, "Cat");
//!
//! // id у фейкового клиента всегда 1, остальное совпадает
//! assert_eq_ignoring_fields(&actual, &expected, &["id"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clue;
mod collection;
mod design;
mod error;
mod fields;

pub use clue::as_clue;
pub use collection::{ElementsMismatch, assert_contains_exactly, contains_exactly};
pub use design::{Design, DesignClient};
pub use error::CompareError;
pub use fields::{
    FieldMismatch, FieldSelector, FieldSet, assert_eq_ignoring_fields, assert_eq_using_fields,
    assert_fields_eq, diff_fields, selected_fields,
};
