//! Plain-text rendering of quotes and collection views.
use std::io::{self, Write};

use quote_store::{Category, Quote};

/// Title printed above the home view.
pub const DASHBOARD_TITLE: &str = "Quotes Dashboard";

/// Write one quote card.
pub fn write_card<W: Write>(out: &mut W, quote: &Quote) -> io::Result<()> {
    writeln!(out, "[#{}] \"{}\"", quote.id, quote.text)?;
    writeln!(out, "      - {}", quote.display_author())?;
    writeln!(out, "      Category: {}", quote.category.as_deref().unwrap_or(""))
}

/// Write the home view: a header line followed by one card per quote.
pub fn write_dashboard<W: Write>(
    out: &mut W,
    quotes: &[&Quote],
    query: Option<&str>,
) -> io::Result<()> {
    match query {
        Some(query) => writeln!(
            out,
            "{} (search: \"{}\", {} shown)",
            DASHBOARD_TITLE,
            query,
            quotes.len()
        )?,
        None => writeln!(out, "{} ({} quotes)", DASHBOARD_TITLE, quotes.len())?,
    }
    if quotes.is_empty() {
        return writeln!(out, "  (no quotes)");
    }
    for quote in quotes {
        write_card(out, quote)?;
    }
    Ok(())
}

/// Write the known category names, one per line.
pub fn write_categories<W: Write>(out: &mut W) -> io::Result<()> {
    for category in Category::all() {
        writeln!(out, "  {}", category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_store::{QuoteFields, QuoteStore};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn card_shows_unknown_for_missing_author() {
        let mut store = QuoteStore::new();
        let quote = store.add(QuoteFields::new("Anonymous wisdom.")).unwrap();

        let text = render(|out| write_card(out, &quote));

        assert_eq!(
            text,
            "[#1] \"Anonymous wisdom.\"\n      - Unknown\n      Category: \n"
        );
    }

    #[test]
    fn dashboard_mentions_active_query() {
        let store = QuoteStore::with_defaults();
        let quotes = store.search(Some("life"));

        let text = render(|out| write_dashboard(out, &quotes, Some("life")));

        assert!(text.starts_with("Quotes Dashboard (search: \"life\", 1 shown)\n"));
        assert!(text.contains("John Lennon"));
        assert!(!text.contains("Tony Robbins"));
    }

    #[test]
    fn empty_dashboard_says_so() {
        let text = render(|out| write_dashboard(out, &[], None));

        assert_eq!(text, "Quotes Dashboard (0 quotes)\n  (no quotes)\n");
    }

    #[test]
    fn categories_are_listed() {
        let text = render(|out| write_categories(out));

        assert_eq!(text, "  Motivation\n  Life\n  Happiness\n");
    }
}
