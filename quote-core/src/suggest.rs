use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::search::normalize;
use crate::types::Quote;

/// Подсказка тега с числом цитат, в которых он встречается
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSuggestion {
    /// Нормализованный тег
    pub tag: String,
    /// Сколько цитат снимка его несут
    pub count: usize,
}

impl fmt::Display for TagSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "quote" } else { "quotes" };
        write!(f, "{} ({} {noun})", self.tag, self.count)
    }
}

/// Уникальные непустые авторы всего снимка, содержащие запрос.
///
/// Порядок - порядок первого появления; дубликаты сравниваются как есть,
/// без нормализации.
pub fn suggest_authors(snapshot: &[Quote], query: &str) -> Vec<String> {
    let query = normalize(query);
    let mut seen = HashSet::new();

    snapshot
        .iter()
        .map(|q| q.author.as_str())
        .filter(|a| !a.is_empty())
        .filter(|a| seen.insert(*a))
        .filter(|a| normalize(a).contains(&query))
        .map(str::to_owned)
        .collect()
}

/// Нормализованные теги всего снимка, содержащие запрос, со счётчиком цитат.
///
/// Счётчик не зависит от активного фильтра: это число цитат снимка с
/// таким тегом (повтор тега внутри одной цитаты считается один раз).
pub fn suggest_tags(snapshot: &[Quote], query: &str) -> Vec<TagSuggestion> {
    let query = normalize(query);
    let mut out: Vec<TagSuggestion> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for quote in snapshot {
        let mut seen_in_quote = HashSet::new();

        for tag in &quote.tags {
            let tag = normalize(tag);
            if !tag.contains(&query) || !seen_in_quote.insert(tag.clone()) {
                continue;
            }

            match index.entry(tag) {
                Entry::Occupied(e) => out[*e.get()].count += 1,
                Entry::Vacant(e) => {
                    out.push(TagSuggestion {
                        tag: e.key().clone(),
                        count: 1,
                    });
                    e.insert(out.len() - 1);
                }
            }
        }
    }

    out
}
