use crate::error::CommandError;
use crate::search::SearchMode;

/// Разобранная строка ввода клиента
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Новое значение запроса в активном режиме
    Query(String),
    /// `:mode <text|author|tag>`
    SwitchMode(SearchMode),
    /// `:pick <n>`, индекс уже с нуля
    Pick(usize),
    /// `:help`
    Help,
    /// `:quit` / `:q`
    Quit,
}

/// Парсит строку ввода.
///
/// Всё, что не начинается с `:`, - запрос целиком (пустая строка очищает
/// запрос). `:search <text>` позволяет искать строку, начинающуюся с `:`.
pub fn parse_input(line: &str) -> Result<Input, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Input::Query(line.to_string()));
    };

    // :search берёт хвост как есть, без split_whitespace
    if let Some(query) = rest.strip_prefix("search") {
        let mut chars = query.chars();
        match chars.next() {
            None => return Ok(Input::Query(String::new())),
            // один разделитель любого вида, остальное - часть запроса
            Some(c) if c.is_whitespace() => return Ok(Input::Query(chars.as_str().to_string())),
            Some(_) => {}
        }
    }

    let mut parts = rest.split_whitespace();
    let cmd = parts.next().ok_or(CommandError::MissingCommand)?;

    let input = match cmd {
        "mode" | "m" => {
            let raw = parts.next().ok_or(CommandError::MissingArgument("mode"))?;
            Input::SwitchMode(raw.parse()?)
        }
        "pick" | "p" => {
            let raw = parts.next().ok_or(CommandError::MissingArgument("pick"))?;
            let n: usize = raw
                .parse()
                .map_err(|_| CommandError::BadIndex(raw.to_string()))?;
            if n == 0 {
                return Err(CommandError::BadIndex(raw.to_string()));
            }
            Input::Pick(n - 1)
        }
        "help" | "h" => Input::Help,
        "quit" | "q" => Input::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    if parts.next().is_some() {
        return Err(CommandError::ExtraArgs);
    }

    Ok(input)
}
