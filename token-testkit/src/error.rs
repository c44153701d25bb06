use thiserror::Error;

use crate::collection::ElementsMismatch;

/// Ошибки сравнения записей
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Имя поля не объявлено у типа
    #[error("unknown field {field:?} for {type_name}")]
    UnknownField {
        /// тип записи
        type_name: &'static str,
        /// запрошенное имя
        field: String,
    },

    /// `Only(&[])`: сравнивать нечего
    #[error("no fields selected for {type_name}")]
    NoFieldsSelected {
        /// тип записи
        type_name: &'static str,
    },

    /// Коллекции не совпали
    #[error(transparent)]
    Elements(#[from] ElementsMismatch),
}
