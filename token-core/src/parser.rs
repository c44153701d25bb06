use std::num::IntErrorKind;

use crate::constants::SEPARATOR;
use crate::error::TokenError;
use crate::types::Token;

/// Разбирает необязательную строку вида `"1511443755_2"`.
///
/// Функция тотальная: `None` на входе даёт `None` на выходе,
/// любой некорректный вход тоже даёт `None`. Причину отказа
/// можно узнать через [`try_parse`].
pub fn parse(input: Option<&str>) -> Option<Token> {
    input.and_then(|s| try_parse(s).ok())
}

/// Строгий разбор строки `NUMBER_REMAINDER`.
///
/// Правила:
/// - ровно один разделитель `_`
/// - до разделителя целое число в диапазоне i64 (знак допускается)
/// - после разделителя что угодно, в том числе пустая строка
/// - пробелы не обрезаются
pub fn try_parse(input: &str) -> Result<Token, TokenError> {
    let (number_raw, remainder) = input
        .split_once(SEPARATOR)
        .ok_or_else(|| TokenError::MissingSeparator(input.to_string()))?;

    if remainder.contains(SEPARATOR) {
        return Err(TokenError::ExtraSeparator(input.to_string()));
    }

    if number_raw.is_empty() {
        return Err(TokenError::EmptyNumber(input.to_string()));
    }

    let number = number_raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            TokenError::NumberOverflow(input.to_string())
        }
        _ => TokenError::InvalidNumber(input.to_string()),
    })?;

    Ok(Token::new(number, remainder))
}

/// Разбирает пачку строк, сохраняя порядок входа.
pub fn parse_all<I, S>(inputs: I) -> Vec<(String, Result<Token, TokenError>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|s| {
            let s = s.as_ref();
            (s.to_string(), try_parse(s))
        })
        .collect()
}

/// Обратная операция к разбору: `format_token(7, "id") == "7_id"`
pub fn format_token(number: i64, remainder: &str) -> String {
    format!("{number}{SEPARATOR}{remainder}")
}
