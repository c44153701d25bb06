use std::fmt;
use std::str::FromStr;

use crate::constants::SEPARATOR;
use crate::error::TokenError;
use crate::parser::try_parse;

/// Разобранный токен: число до разделителя и строка после него.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    number: i64,
    remainder: String,
}

impl Token {
    /// Собирает токен из готовых частей
    pub fn new(number: i64, remainder: impl Into<String>) -> Self {
        Self {
            number,
            remainder: remainder.into(),
        }
    }

    /// Числовая часть
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Остаток после разделителя, как есть
    pub fn remainder(&self) -> &str {
        &self.remainder
    }
}

/// Текстовый формат: NUMBER_REMAINDER
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.number, SEPARATOR, self.remainder)
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse(s)
    }
}
