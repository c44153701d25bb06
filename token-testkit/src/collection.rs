use thiserror::Error;

use crate::error::CompareError;
use crate::fields::{FieldSelector, FieldSet, key_of, selected_fields};

/// Отчёт о несовпадении коллекций. Элементы уже отрендерены.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.report())]
pub struct ElementsMismatch {
    /// ожидаемые элементы
    pub expected: Vec<String>,
    /// фактические элементы
    pub actual: Vec<String>,
    /// ожидались, но не найдены
    pub missing: Vec<String>,
    /// найдены, но не ожидались
    pub unexpected: Vec<String>,
}

fn block(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let body: Vec<String> = items.iter().map(|i| format!("  {i}")).collect();
    format!("[\n{}\n]", body.join(",\n"))
}

impl ElementsMismatch {
    fn report(&self) -> String {
        let mut out = format!(
            "Expecting: {} but was: {}",
            block(&self.expected),
            block(&self.actual)
        );

        match (self.missing.is_empty(), self.unexpected.is_empty()) {
            (true, true) => out.push_str("\nSame elements, different order"),
            (false, true) => {
                out.push_str(&format!("\nSome elements were missing: {}", block(&self.missing)))
            }
            (true, false) => out.push_str(&format!(
                "\nSome elements were unexpected: {}",
                block(&self.unexpected)
            )),
            (false, false) => out.push_str(&format!(
                "\nSome elements were missing: {} and some elements were unexpected: {}",
                block(&self.missing),
                block(&self.unexpected)
            )),
        }

        out
    }
}

/// Проверяет, что `actual` содержит ровно `expected` в том же порядке,
/// сравнивая элементы по выбранным полям.
pub fn contains_exactly<T: FieldSet>(
    actual: &[T],
    expected: &[T],
    selector: FieldSelector<'_>,
) -> Result<(), CompareError> {
    let fields = selected_fields::<T>(selector)?;

    let actual_keys: Vec<_> = actual.iter().map(|v| key_of(v, &fields)).collect();
    let expected_keys: Vec<_> = expected.iter().map(|v| key_of(v, &fields)).collect();

    if actual_keys == expected_keys {
        return Ok(());
    }

    // сопоставление как мультимножеств, порядок не важен
    let mut used = vec![false; actual.len()];
    let mut missing = Vec::new();

    for (e, e_key) in expected.iter().zip(&expected_keys) {
        let hit = actual_keys
            .iter()
            .enumerate()
            .find(|(i, a_key)| !used[*i] && *a_key == e_key)
            .map(|(i, _)| i);

        match hit {
            Some(i) => used[i] = true,
            None => missing.push(e.render()),
        }
    }

    let unexpected = actual
        .iter()
        .zip(&used)
        .filter(|(_, u)| !**u)
        .map(|(a, _)| a.render())
        .collect();

    Err(ElementsMismatch {
        expected: expected.iter().map(FieldSet::render).collect(),
        actual: actual.iter().map(FieldSet::render).collect(),
        missing,
        unexpected,
    }
    .into())
}

/// # Panics
///
/// Если коллекции не совпадают по выбранным полям или селектор некорректен.
#[track_caller]
pub fn assert_contains_exactly<T: FieldSet>(
    actual: &[T],
    expected: &[T],
    selector: FieldSelector<'_>,
) {
    if let Err(e) = contains_exactly(actual, expected, selector) {
        panic!("{e}");
    }
}
