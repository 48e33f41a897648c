/// Путь эндпоинта, отдающего всю коллекцию цитат
pub const QUOTES_PATH: &str = "/api/quotes";
