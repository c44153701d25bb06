use std::fmt;

use token_core::Token;

use crate::design::Design;
use crate::error::CompareError;

/// Запись, поля которой можно перечислить и сравнить по имени.
pub trait FieldSet {
    /// Имя типа для отчётов
    const TYPE_NAME: &'static str;

    /// Имена полей в порядке объявления
    const FIELDS: &'static [&'static str];

    /// Значение поля в текстовом виде; `None` для неизвестного имени
    fn field_value(&self, name: &str) -> Option<String>;

    /// `Type(a=1, b=x)`
    fn render(&self) -> String {
        let parts: Vec<String> = Self::FIELDS
            .iter()
            .map(|f| format!("{f}={}", self.field_value(f).unwrap_or_default()))
            .collect();
        format!("{}({})", Self::TYPE_NAME, parts.join(", "))
    }
}

impl FieldSet for Design {
    const TYPE_NAME: &'static str = "Design";
    const FIELDS: &'static [&'static str] = &["id", "user_id", "name"];

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "user_id" => Some(self.user_id.to_string()),
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }
}

impl FieldSet for Token {
    const TYPE_NAME: &'static str = "Token";
    const FIELDS: &'static [&'static str] = &["number", "remainder"];

    fn field_value(&self, name: &str) -> Option<String> {
        match name {
            "number" => Some(self.number().to_string()),
            "remainder" => Some(self.remainder().to_string()),
            _ => None,
        }
    }
}

/// Какие поля участвуют в сравнении
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelector<'a> {
    /// все поля
    All,
    /// все, кроме перечисленных
    Ignoring(&'a [&'a str]),
    /// только перечисленные
    Only(&'a [&'a str]),
}

impl fmt::Display for FieldSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all fields"),
            Self::Ignoring(names) => write!(f, "ignoring [{}]", names.join(", ")),
            Self::Only(names) => write!(f, "only [{}]", names.join(", ")),
        }
    }
}

/// Расхождение по одному полю
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// имя поля
    pub field: &'static str,
    /// ожидаемое значение
    pub expected: String,
    /// фактическое значение
    pub actual: String,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected:<{}> but was:<{}>",
            self.field, self.expected, self.actual
        )
    }
}

/// Разворачивает селектор в список полей типа (в порядке объявления).
pub fn selected_fields<T: FieldSet>(
    selector: FieldSelector<'_>,
) -> Result<Vec<&'static str>, CompareError> {
    let names = match selector {
        FieldSelector::All => return Ok(T::FIELDS.to_vec()),
        FieldSelector::Ignoring(names) => names,
        FieldSelector::Only(names) => {
            if names.is_empty() {
                return Err(CompareError::NoFieldsSelected {
                    type_name: T::TYPE_NAME,
                });
            }
            names
        }
    };

    if let Some(unknown) = names
        .iter()
        .find(|n| !T::FIELDS.iter().any(|f| f == *n))
    {
        return Err(CompareError::UnknownField {
            type_name: T::TYPE_NAME,
            field: unknown.to_string(),
        });
    }

    let keep_listed = matches!(selector, FieldSelector::Only(_));
    Ok(T::FIELDS
        .iter()
        .copied()
        .filter(|f| names.contains(f) == keep_listed)
        .collect())
}

/// Значения выбранных полей, в том же порядке
pub(crate) fn key_of<T: FieldSet>(value: &T, fields: &[&'static str]) -> Vec<Option<String>> {
    fields.iter().map(|f| value.field_value(f)).collect()
}

/// Сравнивает две записи по выбранным полям.
/// Пустой результат означает совпадение.
pub fn diff_fields<T: FieldSet>(
    actual: &T,
    expected: &T,
    selector: FieldSelector<'_>,
) -> Result<Vec<FieldMismatch>, CompareError> {
    let fields = selected_fields::<T>(selector)?;

    let mismatches = fields
        .into_iter()
        .filter_map(|field| {
            let a = actual.field_value(field).unwrap_or_default();
            let e = expected.field_value(field).unwrap_or_default();
            (a != e).then(|| FieldMismatch {
                field,
                expected: e,
                actual: a,
            })
        })
        .collect();

    Ok(mismatches)
}

/// Текст в стиле "data class diff"
fn diff_report<T: FieldSet>(actual: &T, expected: &T, mismatches: &[FieldMismatch]) -> String {
    let mut out = format!("data class diff for {}\n", T::TYPE_NAME);
    for m in mismatches {
        out.push_str(&format!("└ {m}\n"));
    }
    out.push_str(&format!(
        "\nexpected:<{}> but was:<{}>",
        expected.render(),
        actual.render()
    ));
    out
}

#[track_caller]
fn assert_selected<T: FieldSet>(actual: &T, expected: &T, selector: FieldSelector<'_>) {
    match diff_fields(actual, expected, selector) {
        Ok(mismatches) if mismatches.is_empty() => {}
        Ok(mismatches) => panic!("{}", diff_report(actual, expected, &mismatches)),
        Err(e) => panic!("{e}"),
    }
}

/// Сравнение по всем полям с отчётом по каждому расхождению.
///
/// # Panics
///
/// Если хотя бы одно поле отличается.
#[track_caller]
pub fn assert_fields_eq<T: FieldSet>(actual: &T, expected: &T) {
    assert_selected(actual, expected, FieldSelector::All);
}

/// Сравнение по всем полям, кроме `ignored`.
///
/// # Panics
///
/// Если поле отличается или имя поля неизвестно.
#[track_caller]
pub fn assert_eq_ignoring_fields<T: FieldSet>(actual: &T, expected: &T, ignored: &[&str]) {
    assert_selected(actual, expected, FieldSelector::Ignoring(ignored));
}

/// Сравнение только по полям `used`.
///
/// # Panics
///
/// Если поле отличается, имя поля неизвестно или список пуст.
#[track_caller]
pub fn assert_eq_using_fields<T: FieldSet>(actual: &T, expected: &T, used: &[&str]) {
    assert_selected(actual, expected, FieldSelector::Only(used));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cat(id: i32) -> Design {
        Design::new(id, 9, "Cat")
    }

    #[test]
    fn selected_fields_follow_declaration_order() {
        assert_eq!(
            selected_fields::<Design>(FieldSelector::All).unwrap(),
            vec!["id", "user_id", "name"]
        );
        assert_eq!(
            selected_fields::<Design>(FieldSelector::Ignoring(&["id"])).unwrap(),
            vec!["user_id", "name"]
        );
        assert_eq!(
            selected_fields::<Design>(FieldSelector::Only(&["name", "user_id"])).unwrap(),
            vec!["user_id", "name"]
        );
    }

    #[test]
    fn selected_fields_rejects_unknown_and_empty() {
        assert_eq!(
            selected_fields::<Design>(FieldSelector::Ignoring(&["date_created"])),
            Err(CompareError::UnknownField {
                type_name: "Design",
                field: "date_created".into()
            })
        );
        assert_eq!(
            selected_fields::<Design>(FieldSelector::Only(&[])),
            Err(CompareError::NoFieldsSelected { type_name: "Design" })
        );
    }

    #[test]
    fn diff_fields_reports_only_differences() {
        let got = diff_fields(&cat(1), &cat(2), FieldSelector::All).unwrap();
        assert_eq!(
            got,
            vec![FieldMismatch {
                field: "id",
                expected: "2".into(),
                actual: "1".into(),
            }]
        );
        assert_eq!(got[0].to_string(), "id: expected:<2> but was:<1>");

        assert!(
            diff_fields(&cat(1), &cat(2), FieldSelector::Ignoring(&["id"]))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn render_uses_field_values() {
        assert_eq!(cat(1).render(), "Design(id=1, user_id=9, name=Cat)");
        assert_eq!(Token::new(7, "id").render(), "Token(number=7, remainder=id)");
    }

    #[test]
    fn diff_report_lists_fields_then_values() {
        let mismatches = diff_fields(&cat(1), &cat(2), FieldSelector::All).unwrap();
        let report = diff_report(&cat(1), &cat(2), &mismatches);
        assert_eq!(
            report,
            "data class diff for Design\n\
             └ id: expected:<2> but was:<1>\n\
             \n\
             expected:<Design(id=2, user_id=9, name=Cat)> but was:<Design(id=1, user_id=9, name=Cat)>"
        );
    }

    #[test]
    fn token_fields_compare() {
        let a = Token::new(15114437599, "12");
        let e = Token::new(15114437599, "1");
        assert_eq_ignoring_fields(&a, &e, &["remainder"]);
        assert_eq_using_fields(&a, &e, &["number"]);
    }

    #[test]
    #[should_panic(expected = "remainder: expected:<1> but was:<12>")]
    fn token_remainder_mismatch_panics() {
        assert_fields_eq(&Token::new(15114437599, "12"), &Token::new(15114437599, "1"));
    }
}
