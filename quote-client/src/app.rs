use std::io::{self, BufRead, Write};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender};
use log::{debug, info, warn};
use quote_core::command::{Input, parse_input};
use quote_core::{Browser, FetchTicket, Quote, Search};

use crate::cli::Args;
use crate::fetch::{FetchError, fetch_quotes};
use crate::render::{render, render_help};

const TICK_RATE_MS: u64 = 200;

/// Всё, что меняет состояние браузера, приходит одним каналом
#[derive(Debug)]
pub(crate) enum Event {
    Fetched(FetchTicket, Result<Vec<Quote>, FetchError>),
    Line(String),
    InputClosed,
}

/// Что сделать после обработки события
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Render,
    Help,
    Error(String),
    Quit,
}

/// Главный цикл: один запрос коллекции, затем строки stdin до `:quit`,
/// EOF или `Ctrl+C`.
pub(crate) fn run(args: &Args, shutdown: Arc<AtomicBool>) -> anyhow::Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded();

    let mut browser = Browser::new();
    let initial = args.initial_search();

    let ticket = browser.begin_fetch();
    spawn_fetch(args.quotes_url(), ticket, tx.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &browser)?;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            info!("shutting down...");
            break;
        }

        let event = match rx.recv_timeout(Duration::from_millis(TICK_RATE_MS)) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let fetched = matches!(event, Event::Fetched(..));

        match handle_event(&mut browser, event, initial.as_ref()) {
            Flow::Render => render(&mut out, &browser)?,
            Flow::Help => render_help(&mut out)?,
            Flow::Error(msg) => {
                writeln!(out, "error: {msg}")?;
                out.flush()?;
            }
            Flow::Quit => break,
        }

        if fetched && !browser.is_loading() {
            if args.once {
                break;
            }
            // ввод читаем только когда снимок уже на месте
            spawn_stdin_reader(tx.clone());
        }
    }

    Ok(())
}

/// Применить событие к состоянию
pub(crate) fn handle_event(browser: &mut Browser, event: Event, initial: Option<&Search>) -> Flow {
    match event {
        Event::Fetched(ticket, result) => {
            if browser.complete_fetch(ticket, result) {
                if let Some(search) = initial {
                    apply_search(browser, search);
                }
            }
            Flow::Render
        }
        Event::Line(line) => match parse_input(&line) {
            Ok(input) => apply_input(browser, input),
            Err(e) => Flow::Error(e.to_string()),
        },
        Event::InputClosed => Flow::Quit,
    }
}

pub(crate) fn apply_input(browser: &mut Browser, input: Input) -> Flow {
    match input {
        Input::Query(query) => {
            browser.input(&query);
            Flow::Render
        }
        Input::SwitchMode(mode) => {
            browser.switch_mode(mode);
            Flow::Render
        }
        Input::Pick(index) => match browser.select_suggestion(index) {
            Ok(()) => Flow::Render,
            Err(e) => Flow::Error(e.to_string()),
        },
        Input::Help => Flow::Help,
        Input::Quit => Flow::Quit,
    }
}

fn apply_search(browser: &mut Browser, search: &Search) {
    browser.switch_mode(search.mode());
    if !search.query().is_empty() {
        browser.input(search.query());
    }
}

// не ждём: зависший запрос просто оставляет состояние загрузки
fn spawn_fetch(url: String, ticket: FetchTicket, tx: Sender<Event>) {
    thread::spawn(move || {
        let result = fetch_quotes(&url);
        if tx.send(Event::Fetched(ticket, result)).is_err() {
            debug!("event loop is gone; dropping fetch result");
        }
    });
}

// поток блокируется на read_line, поэтому его тоже не join-им
fn spawn_stdin_reader(tx: Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!("stdin read error: {e}");
                    break;
                }
            };
            if tx.send(Event::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::InputClosed);
    });
}
