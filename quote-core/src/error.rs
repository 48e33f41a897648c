use thiserror::Error;

/// Ошибки разбора строки ввода
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// `:` без имени команды
    #[error("missing command name")]
    MissingCommand,

    /// Неизвестная команда
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Команде нужен аргумент
    #[error("missing argument for :{0}")]
    MissingArgument(&'static str),

    /// Неизвестный режим поиска
    #[error("unknown search mode: {0} (expected text, author or tag)")]
    UnknownMode(String),

    /// Номер подсказки не число или ноль
    #[error("invalid suggestion number: {0}")]
    BadIndex(String),

    /// Лишние аргументы
    #[error("unexpected extra arguments")]
    ExtraArgs,
}

/// Ошибки переходов состояния браузера
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrowserError {
    /// Выбрана несуществующая подсказка
    #[error("no suggestion #{number} (available: {available})")]
    NoSuchSuggestion {
        /// Номер подсказки с единицы, как его ввёл пользователь
        number: usize,
        /// Сколько подсказок есть сейчас
        available: usize,
    },
}
