//! Positive quote popup.

use rand::seq::IndexedRandom;
use rand::Rng;

/// The fixed quote pool
pub const QUOTES: [&str; 15] = [
    "Believe you can and you're halfway there. - Theodore Roosevelt",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. - Winston Churchill",
    "You are never too old to set another goal or to dream a new dream. - C.S. Lewis",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It does not matter how slowly you go as long as you do not stop. - Confucius",
    "Everything you've ever wanted is on the other side of fear. - George Addair",
    "Believe in yourself. You are braver than you think, more talented than you know, and capable of more than you imagine. - Roy T. Bennett",
    "I learned that courage was not the absence of fear, but the triumph over it. - Nelson Mandela",
    "Your limitation\u{2014}it's only your imagination.",
    "Great things never come from comfort zones.",
    "Dream it. Wish it. Do it.",
    "Success doesn't just find you. You have to go out and get it.",
    "The harder you work for something, the greater you'll feel when you achieve it.",
    "Don't stop when you're tired. Stop when you're done.",
];

/// Wrap a quote in double quotation marks for display
pub fn quoted(quote: &str) -> String {
    format!("\"{}\"", quote)
}

/// Quote panel state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteBox {
    current: Option<&'static str>,
    visible: bool,
}

impl QuoteBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a quote uniformly at random and show the panel.
    pub fn show<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        // QUOTES is non-empty, so choose never returns None
        let quote = QUOTES.choose(rng).copied().unwrap_or(QUOTES[0]);
        self.current = Some(quote);
        self.visible = true;
        quote
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Text for the quote target, already wrapped in quotation marks
    pub fn display_text(&self) -> String {
        self.current.map(quoted).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn show_then_close() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut quotes = QuoteBox::new();
        assert!(!quotes.is_visible());

        let picked = quotes.show(&mut rng);
        assert!(quotes.is_visible());
        assert!(QUOTES.contains(&picked));
        assert_eq!(quotes.display_text(), format!("\"{}\"", picked));

        quotes.close();
        assert!(!quotes.is_visible());
        assert_eq!(quotes.display_text(), quoted(picked));
    }

    #[test]
    fn every_quote_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut quotes = QuoteBox::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(quotes.show(&mut rng));
        }
        assert_eq!(seen.len(), QUOTES.len());
    }

    #[test]
    fn display_text_is_quoted() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut quotes = QuoteBox::new();
        assert_eq!(quotes.display_text(), "");
        quotes.show(&mut rng);
        let text = quotes.display_text();
        assert!(text.starts_with('"') && text.ends_with('"'));
    }
}
