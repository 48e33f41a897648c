use std::io::{self, Write};

use quote_core::{Browser, Quote, View};

pub(crate) const HELP: &str = "\
commands:
  <text>            search in the current mode (empty line clears)
  :mode <m>         switch mode: text, author, tag (clears the search)
  :pick <n>         use suggestion n
  :search <text>    search for text that starts with ':'
  :help             this help
  :quit             exit";

/// Перерисовать экран браузера
pub(crate) fn render(out: &mut impl Write, browser: &Browser) -> io::Result<()> {
    let search = browser.search();
    writeln!(out, "== search by {}: {:?} ==", search.mode(), search.query())?;

    let suggestions = browser.suggestions().labels();
    if !suggestions.is_empty() {
        writeln!(out, "suggestions:")?;
        for (i, label) in suggestions.iter().enumerate() {
            writeln!(out, "  {}) {label}", i + 1)?;
        }
    }

    match browser.view() {
        View::Loading => writeln!(out, "Loading quotes...")?,
        View::Empty => writeln!(out, "No quotes found.")?,
        View::Quotes(quotes) => {
            for (i, quote) in quotes.into_iter().enumerate() {
                writeln!(out)?;
                render_quote(out, quote, i + 1)?;
            }
        }
    }

    out.flush()
}

// без id карточку подписываем номером в выдаче
fn render_quote(out: &mut impl Write, quote: &Quote, position: usize) -> io::Result<()> {
    writeln!(out, "#{}", quote.display_key(position))?;
    writeln!(out, "{}", quote.text)?;
    writeln!(out, "  {}", quote.byline())?;
    if !quote.tags.is_empty() {
        writeln!(out, "  Tags: {}", quote.tags.join(", "))?;
    }
    Ok(())
}

pub(crate) fn render_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::SearchMode;

    fn to_string(browser: &Browser) -> String {
        let mut buf = Vec::new();
        render(&mut buf, browser).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn loaded(quotes: Vec<Quote>) -> Browser {
        let mut b = Browser::new();
        let t = b.begin_fetch();
        b.complete_fetch::<String>(t, Ok(quotes));
        b
    }

    #[test]
    fn loading_state() {
        assert_eq!(
            to_string(&Browser::new()),
            "== search by text: \"\" ==\nLoading quotes...\n"
        );
    }

    #[test]
    fn empty_state() {
        assert_eq!(
            to_string(&loaded(Vec::new())),
            "== search by text: \"\" ==\nNo quotes found.\n"
        );
    }

    #[test]
    fn quote_cards_with_key_byline_and_tags() {
        let b = loaded(vec![
            Quote::new("Hope is a feathered thing", "Emily")
                .with_id(7)
                .with_source("Poems")
                .with_tags(["hope", "birds"]),
            Quote::new("Be water", "Bruce"),
        ]);

        assert_eq!(
            to_string(&b),
            "== search by text: \"\" ==\n\
             \n\
             #7\nHope is a feathered thing\n  Poems by Emily\n  Tags: hope, birds\n\
             \n\
             #2\nBe water\n  by Bruce\n"
        );
    }

    #[test]
    fn numbered_tag_suggestions() {
        let mut b = loaded(vec![
            Quote::new("a", "x").with_tags(["hope"]),
            Quote::new("b", "y").with_tags(["hope", "hopeless"]),
        ]);
        b.switch_mode(SearchMode::Tag);
        b.input("hop");

        let s = to_string(&b);
        assert!(s.starts_with(
            "== search by tag: \"hop\" ==\nsuggestions:\n  1) hope (2 quotes)\n  2) hopeless (1 quote)\n"
        ));
        assert!(s.ends_with("No quotes found.\n"));
    }
}
