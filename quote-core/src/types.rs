use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Цитата в том виде, в котором её отдаёт хранилище.
///
/// Декодирование "прощающее": отсутствующие/`null`/нестроковые `text` и
/// `author` становятся пустой строкой, а `tags`, не являющиеся массивом,
/// превращаются в пустой список. Запись никогда не отбрасывается.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Непрозрачный идентификатор, используется только как ключ отображения
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Текст цитаты
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,

    /// Автор
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,

    /// Источник (книга, песня, ...), только префикс подписи
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,

    /// Теги в порядке хранилища
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,

    /// Остальные колонки таблицы, которые мы не интерпретируем
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    /// Цитата без id, источника и тегов
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Задать id
    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Задать источник
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Заменить теги
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Подпись: `"{source} by {author}"` либо `"by {author}"`
    pub fn byline(&self) -> String {
        match self.source.as_deref().filter(|s| !s.is_empty()) {
            Some(source) => format!("{source} by {}", self.author),
            None => format!("by {}", self.author),
        }
    }

    /// Ключ отображения: id как текст, а без id - позиция в снимке.
    pub fn display_key(&self, position: usize) -> String {
        match &self.id {
            None | Some(Value::Null) => position.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

fn lenient_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

// не-массив => пустой список, нестроковые элементы пропускаем
fn lenient_tags<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
