use clap::Parser;
use std::net::SocketAddr;

use crate::config;

/// Quote Server - отдаёт всю коллекцию цитат по `GET /api/quotes`,
/// проксируя `select *` в хранилище.
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-server", version, about)]
pub(crate) struct Args {
    /// HTTP bind address, например 0.0.0.0:3000
    #[arg(long, env = "QUOTES_BIND", default_value = config::BIND_ADDR)]
    pub(crate) bind: SocketAddr,

    /// URL хранилища, например https://xyz.supabase.co
    #[arg(long, env = "SUPABASE_URL")]
    pub(crate) store_url: String,

    /// Ключ доступа к хранилищу
    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub(crate) store_key: String,

    /// Имя таблицы с цитатами
    #[arg(long, default_value = config::QUOTES_TABLE)]
    pub(crate) table: String,
}

impl Args {
    /// Валидация аргументов (URL похож на http(s)://..., ключ и таблица не пустые)
    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        let url = self.store_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("--store-url must start with http:// or https:// (got: {url})");
        }
        if self.store_key.trim().is_empty() {
            anyhow::bail!("--store-key is empty");
        }
        if self.table.trim().is_empty() {
            anyhow::bail!("--table is empty");
        }
        Ok(())
    }
}
