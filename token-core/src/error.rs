use thiserror::Error;

/// Ошибки разбора токена. Во всех вариантах хранится исходная строка.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Во входе нет разделителя `_`
    #[error("missing separator '_' in {0:?}")]
    MissingSeparator(String),

    /// Разделитель встречается больше одного раза
    #[error("more than one separator '_' in {0:?}")]
    ExtraSeparator(String),

    /// Пустая числовая часть (вход начинается с `_`)
    #[error("empty number before separator in {0:?}")]
    EmptyNumber(String),

    /// Числовая часть не является целым числом
    #[error("invalid number in {0:?}")]
    InvalidNumber(String),

    /// Число не помещается в i64
    #[error("number out of i64 range in {0:?}")]
    NumberOverflow(String),
}

impl TokenError {
    /// Исходная строка, на которой упал разбор
    pub fn input(&self) -> &str {
        match self {
            Self::MissingSeparator(s)
            | Self::ExtraSeparator(s)
            | Self::EmptyNumber(s)
            | Self::InvalidNumber(s)
            | Self::NumberOverflow(s) => s,
        }
    }
}
