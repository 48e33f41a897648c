use anyhow::{Result, bail};
use clap::Parser;
use quote_core::{QUOTES_PATH, Search, SearchMode};

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

/// Quote Client - терминальный браузер цитат.
///
/// Коллекция загружается с quote-server один раз; дальше поиск по тексту,
/// автору или тегу идёт локально. Команды вводятся строками (`:help`).
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-client", version, about)]
pub(crate) struct Args {
    /// Базовый URL quote-server, например http://127.0.0.1:3000
    #[arg(long, default_value = DEFAULT_SERVER)]
    pub(crate) server: String,

    /// Режим поиска после загрузки: text, author или tag
    #[arg(long)]
    pub(crate) mode: Option<SearchMode>,

    /// Запрос после загрузки (в режиме --mode, по умолчанию text)
    #[arg(long)]
    pub(crate) query: Option<String>,

    /// Показать результат один раз и выйти, без чтения stdin
    #[arg(long)]
    pub(crate) once: bool,
}

impl Args {
    /// Валидация аргументов (server выглядит как http(s)://HOST[:PORT])
    pub(crate) fn validate(&self) -> Result<()> {
        let server = self.server.trim();
        if server.is_empty() {
            bail!("--server is empty");
        }
        if !(server.starts_with("http://") || server.starts_with("https://")) {
            bail!("--server must start with http:// or https:// (got: {server})");
        }
        Ok(())
    }

    pub(crate) fn quotes_url(&self) -> String {
        format!("{}{QUOTES_PATH}", self.server.trim().trim_end_matches('/'))
    }

    /// Поиск, который применяется сразу после загрузки снимка
    pub(crate) fn initial_search(&self) -> Option<Search> {
        match (self.mode, &self.query) {
            (None, None) => None,
            (mode, query) => Some(Search::new(
                mode.unwrap_or_default(),
                query.clone().unwrap_or_default(),
            )),
        }
    }
}
