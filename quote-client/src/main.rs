//! Точка входа `quote-client`.
//!
//! Жизненный цикл:
//! - парсинг CLI
//! - однократная загрузка коллекции с quote-server (в отдельном потоке)
//! - локальный поиск по строкам stdin: текст, автор, тег, подсказки
//! - корректная остановка по `Ctrl+C`, `:quit` или EOF

mod app;
mod cli;
mod fetch;
mod render;

use std::sync::{Arc, atomic::AtomicBool, atomic::Ordering};

use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/trace
    env_logger::init();

    let shutdown = Arc::new(AtomicBool::new(false));

    // Ctrl+C => ставим shutdown=true
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            shutdown.store(true, Ordering::Relaxed);
            info!("shutting down...");
        })?;
    }

    let args = cli::Args::parse();
    args.validate()?;

    info!(
        "Starting quote-client: url={}, once={}",
        args.quotes_url(),
        args.once
    );

    app::run(&args, shutdown)
}
