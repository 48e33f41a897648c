use std::fmt;

use log::{debug, error, info};

use crate::error::BrowserError;
use crate::search::{Search, SearchMode, filter_quotes};
use crate::suggest::{TagSuggestion, suggest_authors, suggest_tags};
use crate::types::Quote;

/// Подсказки текущего режима
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Suggestions {
    /// Подсказок нет
    #[default]
    None,
    /// Авторы (режим author)
    Authors(Vec<String>),
    /// Теги со счётчиками (режим tag)
    Tags(Vec<TagSuggestion>),
}

impl Suggestions {
    /// Число подсказок
    pub fn len(&self) -> usize {
        match self {
            Suggestions::None => 0,
            Suggestions::Authors(a) => a.len(),
            Suggestions::Tags(t) => t.len(),
        }
    }

    /// Подсказок нет
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Строки для отображения, в порядке выбора
    pub fn labels(&self) -> Vec<String> {
        match self {
            Suggestions::None => Vec::new(),
            Suggestions::Authors(a) => a.clone(),
            Suggestions::Tags(t) => t.iter().map(ToString::to_string).collect(),
        }
    }

    /// Значение, которое станет запросом при выборе подсказки
    fn value(&self, index: usize) -> Option<&str> {
        match self {
            Suggestions::None => None,
            Suggestions::Authors(a) => a.get(index).map(String::as_str),
            Suggestions::Tags(t) => t.get(index).map(|s| s.tag.as_str()),
        }
    }
}

/// Квитанция запроса снимка; ответ по устаревшей квитанции игнорируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Что показывать пользователю
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    /// Запрос снимка ещё в полёте
    Loading,
    /// Снимок загружен, но фильтр ничего не оставил (или снимок пуст)
    Empty,
    /// Отфильтрованные цитаты в порядке снимка
    Quotes(Vec<&'a Quote>),
}

/// Состояние браузера цитат одной сессии.
///
/// Снимок заменяется целиком только ответом на запрос; всё остальное -
/// производные от него и от активного [`Search`].
#[derive(Debug, Clone)]
pub struct Browser {
    snapshot: Vec<Quote>,
    loading: bool,
    fetch_generation: u64,
    search: Search,
    suggestions: Suggestions,
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser {
    /// Новая сессия: пустой снимок, режим text, состояние загрузки.
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            loading: true,
            fetch_generation: 0,
            search: Search::default(),
            suggestions: Suggestions::None,
        }
    }

    /// Начать загрузку снимка
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        self.loading = true;
        FetchTicket(self.fetch_generation)
    }

    /// Применить результат загрузки.
    ///
    /// Возвращает `false`, если квитанция устарела и ответ отброшен.
    /// Ошибка только логируется: снимок не меняется, загрузка завершается.
    pub fn complete_fetch<E: fmt::Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Quote>, E>,
    ) -> bool {
        if ticket.0 != self.fetch_generation {
            debug!("dropping stale fetch response #{}", ticket.0);
            return false;
        }

        self.loading = false;
        match result {
            Ok(quotes) => {
                info!("loaded {} quotes", quotes.len());
                self.snapshot = quotes;
            }
            Err(e) => {
                error!("fetch quotes error: {e}");
            }
        }
        true
    }

    /// Сменить режим: запрос и подсказки сбрасываются всегда.
    pub fn switch_mode(&mut self, mode: SearchMode) {
        self.search = Search::empty(mode);
        self.suggestions = Suggestions::None;
    }

    /// Ввод запроса в активном режиме.
    ///
    /// В режимах author/tag подсказки пересчитываются по всему снимку.
    pub fn input(&mut self, query: &str) {
        self.search.set_query(query);
        self.suggestions = match self.search.mode() {
            SearchMode::Text => Suggestions::None,
            SearchMode::Author => Suggestions::Authors(suggest_authors(&self.snapshot, query)),
            SearchMode::Tag => Suggestions::Tags(suggest_tags(&self.snapshot, query)),
        };
    }

    /// Выбрать подсказку (индекс с нуля): она становится запросом,
    /// список подсказок очищается.
    pub fn select_suggestion(&mut self, index: usize) -> Result<(), BrowserError> {
        let value = self
            .suggestions
            .value(index)
            .map(str::to_owned)
            .ok_or(BrowserError::NoSuchSuggestion {
                number: index + 1,
                available: self.suggestions.len(),
            })?;

        self.search.set_query(value);
        self.suggestions = Suggestions::None;
        Ok(())
    }

    /// Запрос снимка ещё в полёте
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Текущий снимок целиком
    pub fn snapshot(&self) -> &[Quote] {
        &self.snapshot
    }

    /// Активный поиск
    pub fn search(&self) -> &Search {
        &self.search
    }

    /// Активный режим
    pub fn mode(&self) -> SearchMode {
        self.search.mode()
    }

    /// Подсказки активного режима
    pub fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    /// Отфильтрованный список
    pub fn visible(&self) -> Vec<&Quote> {
        filter_quotes(&self.snapshot, &self.search)
    }

    /// Что показать: загрузка, пусто или список
    pub fn view(&self) -> View<'_> {
        if self.loading {
            return View::Loading;
        }

        let visible = self.visible();
        if visible.is_empty() {
            View::Empty
        } else {
            View::Quotes(visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<Quote> {
        vec![
            Quote::new("Hope is a feathered thing", "Emily").with_tags(["hope", "birds"]),
            Quote::new("Be water", "Bruce").with_tags(["water", "hope"]),
        ]
    }

    fn loaded() -> Browser {
        let mut b = Browser::new();
        let t = b.begin_fetch();
        assert!(b.complete_fetch::<String>(t, Ok(snapshot())));
        b
    }

    fn texts(b: &Browser) -> Vec<String> {
        b.visible().iter().map(|q| q.text.clone()).collect()
    }

    #[test]
    fn starts_loading_in_text_mode() {
        let b = Browser::new();
        assert!(b.is_loading());
        assert_eq!(b.view(), View::Loading);
        assert_eq!(b.mode(), SearchMode::Text);
        assert!(b.suggestions().is_empty());
    }

    #[test]
    fn empty_collection_yields_empty_view() {
        let mut b = Browser::new();
        let t = b.begin_fetch();
        b.complete_fetch::<String>(t, Ok(Vec::new()));

        assert!(!b.is_loading());
        assert!(b.visible().is_empty());
        assert_eq!(b.view(), View::Empty);
    }

    #[test]
    fn failed_fetch_degrades_to_empty_state() {
        let mut b = Browser::new();
        let t = b.begin_fetch();
        assert!(b.complete_fetch(t, Err("HTTP 500: boom")));

        assert!(!b.is_loading());
        assert!(b.snapshot().is_empty());
        assert_eq!(b.view(), View::Empty);
    }

    #[test]
    fn stale_fetch_response_is_ignored() {
        let mut b = Browser::new();
        let old = b.begin_fetch();
        let new = b.begin_fetch();

        assert!(!b.complete_fetch::<String>(old, Ok(snapshot())));
        assert!(b.is_loading());
        assert!(b.snapshot().is_empty());

        assert!(b.complete_fetch::<String>(new, Ok(Vec::new())));
        assert!(!b.is_loading());
    }

    #[test]
    fn tag_search_example_then_switch_to_author() {
        let mut b = loaded();

        b.switch_mode(SearchMode::Tag);
        b.input("hope");
        assert_eq!(texts(&b), vec!["Hope is a feathered thing", "Be water"]);
        assert_eq!(
            b.suggestions(),
            &Suggestions::Tags(vec![TagSuggestion {
                tag: "hope".into(),
                count: 2
            }])
        );

        b.switch_mode(SearchMode::Author);
        assert_eq!(b.search(), &Search::Author(String::new()));
        assert!(b.suggestions().is_empty());
        assert_eq!(b.visible().len(), 2);
    }

    #[test]
    fn switching_mode_always_resets() {
        for from in SearchMode::ALL {
            for to in SearchMode::ALL {
                let mut b = loaded();
                b.switch_mode(from);
                b.input("e");
                b.switch_mode(to);

                assert_eq!(b.search(), &Search::empty(to));
                assert!(b.suggestions().is_empty(), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn text_input_has_no_suggestions() {
        let mut b = loaded();
        b.input("water");
        assert!(b.suggestions().is_empty());
        assert_eq!(texts(&b), vec!["Be water"]);
    }

    #[test]
    fn author_suggestion_selection_sets_query_and_clears_list() {
        let mut b = loaded();
        b.switch_mode(SearchMode::Author);
        b.input("b");

        assert_eq!(b.suggestions(), &Suggestions::Authors(vec!["Bruce".into()]));

        b.select_suggestion(0).unwrap();
        assert_eq!(b.search(), &Search::Author("Bruce".into()));
        assert!(b.suggestions().is_empty());
        assert_eq!(texts(&b), vec!["Be water"]);
    }

    #[test]
    fn tag_suggestion_selection_uses_tag_string() {
        let mut b = loaded();
        b.switch_mode(SearchMode::Tag);
        b.input("BIR");
        assert_eq!(b.suggestions().labels(), vec!["birds (1 quote)"]);
        assert!(b.visible().is_empty());

        b.select_suggestion(0).unwrap();
        assert_eq!(b.search(), &Search::Tag("birds".into()));
        assert_eq!(texts(&b), vec!["Hope is a feathered thing"]);
    }

    #[test]
    fn selecting_missing_suggestion_fails_without_side_effects() {
        let mut b = loaded();
        b.switch_mode(SearchMode::Author);
        b.input("e");

        let err = b.select_suggestion(5).unwrap_err();
        assert_eq!(
            err,
            BrowserError::NoSuchSuggestion {
                number: 6,
                available: 2
            }
        );
        assert_eq!(b.search(), &Search::Author("e".into()));
        assert_eq!(b.suggestions().len(), 2);
    }
}
