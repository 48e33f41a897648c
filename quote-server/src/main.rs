//! Точка входа `quote-server`.
//!
//! Жизненный цикл:
//! - парсинг CLI (URL и ключ хранилища можно передать через env)
//! - сборка HTTP-клиента к хранилищу
//! - `GET /api/quotes` до `Ctrl+C` / SIGTERM

mod cli;
mod config;
mod routes;
mod server;
mod store;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let store = store::SupabaseStore::new(&args.store_url, args.store_key.as_str(), &args.table)
        .context("build store client")?;

    info!(
        "Starting quote-server: bind={}, store={}",
        args.bind,
        store.endpoint()
    );

    server::serve(args.bind, Arc::new(store)).await
}
