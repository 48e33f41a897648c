use std::fmt;
use std::str::FromStr;

use crate::error::CommandError;
use crate::types::Quote;

/// Нормализация перед любым сравнением: нижний регистр.
///
/// Отсутствующие значения уже превращены в `""` при декодировании [`Quote`].
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Измерение поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// По тексту
    #[default]
    Text,
    /// По автору
    Author,
    /// По тегу
    Tag,
}

impl SearchMode {
    /// Все режимы в порядке меню
    pub const ALL: [SearchMode; 3] = [SearchMode::Text, SearchMode::Author, SearchMode::Tag];

    /// Имя режима для ввода и вывода
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Text => "text",
            SearchMode::Author => "author",
            SearchMode::Tag => "tag",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        SearchMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| CommandError::UnknownMode(raw.to_string()))
    }
}

/// Активный поиск: режим и строка запроса одним значением.
///
/// Запрос существует только для текущего режима, поэтому при смене
/// режима "очищать остальные два" нечего.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// Подстрока в тексте
    Text(String),
    /// Подстрока в авторе
    Author(String),
    /// Точное совпадение с одним из тегов
    Tag(String),
}

impl Default for Search {
    fn default() -> Self {
        Search::empty(SearchMode::default())
    }
}

impl Search {
    /// Пустой запрос в режиме `mode`
    pub fn empty(mode: SearchMode) -> Self {
        Search::new(mode, String::new())
    }

    /// Запрос в режиме `mode`
    pub fn new(mode: SearchMode, query: impl Into<String>) -> Self {
        let query = query.into();
        match mode {
            SearchMode::Text => Search::Text(query),
            SearchMode::Author => Search::Author(query),
            SearchMode::Tag => Search::Tag(query),
        }
    }

    /// Режим
    pub fn mode(&self) -> SearchMode {
        match self {
            Search::Text(_) => SearchMode::Text,
            Search::Author(_) => SearchMode::Author,
            Search::Tag(_) => SearchMode::Tag,
        }
    }

    /// Строка запроса как введена
    pub fn query(&self) -> &str {
        match self {
            Search::Text(q) | Search::Author(q) | Search::Tag(q) => q,
        }
    }

    /// Заменить строку запроса, не меняя режим
    pub fn set_query(&mut self, query: impl Into<String>) {
        *self = Search::new(self.mode(), query);
    }

    /// Проходит ли цитата фильтр.
    ///
    /// Текст и автор сравниваются по подстроке, теги - только точным
    /// совпадением нормализованной строки.
    pub fn matches(&self, quote: &Quote) -> bool {
        self.matches_normalized(quote, &normalize(self.query()))
    }

    fn matches_normalized(&self, quote: &Quote, query: &str) -> bool {
        match self {
            Search::Text(_) => normalize(&quote.text).contains(query),
            Search::Author(_) => normalize(&quote.author).contains(query),
            Search::Tag(_) => quote.tags.iter().any(|t| normalize(t) == query),
        }
    }
}

/// Отфильтровать снимок, сохраняя исходный порядок
pub fn filter_quotes<'a>(snapshot: &'a [Quote], search: &Search) -> Vec<&'a Quote> {
    let query = normalize(search.query());
    snapshot
        .iter()
        .filter(|q| search.matches_normalized(q, &query))
        .collect()
}
