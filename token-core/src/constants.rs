/// Разделитель между числовой частью и остатком: `NUMBER_REMAINDER`
pub const SEPARATOR: char = '_';

/// Маркер комментария во входных файлах
pub(crate) const COMMENT_MARKER: char = '#';
