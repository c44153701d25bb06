use std::fmt;

/// Плоская запись для демонстрации сравнений
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Design {
    /// идентификатор дизайна
    pub id: i32,
    /// владелец
    pub user_id: i32,
    /// название
    pub name: String,
}

impl Design {
    /// Конструктор
    pub fn new(id: i32, user_id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Design(id={}, user_id={}, name={})",
            self.id, self.user_id, self.name
        )
    }
}

/// Фейковый клиент с зашитыми данными.
///
/// Ответы специально не совпадают с "ожидаемыми" в демо-тестах:
/// `request_design` всегда отдаёт `id=1`, а у второго элемента
/// `all_designs` имя `Dogggg`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesignClient;

impl DesignClient {
    /// Новый клиент
    pub fn new() -> Self {
        Self
    }

    /// Запрос одного дизайна. Аргумент игнорируется.
    pub fn request_design(&self, _id: i32) -> Design {
        Design::new(1, 9, "Cat")
    }

    /// Все дизайны
    pub fn all_designs(&self) -> Vec<Design> {
        vec![Design::new(1, 9, "Cat"), Design::new(2, 4, "Dogggg")]
    }
}
