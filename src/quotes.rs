//! Hamlet quotations
//!
//! Scrolls carry the quote text; the HUD rotates through the full list.

use serde::Serialize;

use crate::consts::QUOTE_DISPLAY_SECS;

/// A quotation with a line of context for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub context: &'static str,
}

impl AsRef<str> for Quote {
    fn as_ref(&self) -> &str {
        self.quote
    }
}

/// Fixed, ordered quotation list. Act 1 scrolls read entries 7 and 8.
pub const HAMLET_QUOTES: &[Quote] = &[
    Quote {
        quote: "To be, or not to be, that is the question",
        context: "Hamlet contemplates life and death",
    },
    Quote {
        quote: "Something is rotten in the state of Denmark",
        context: "Marcellus senses corruption in the kingdom",
    },
    Quote {
        quote: "Neither a borrower nor a lender be",
        context: "Polonius gives advice to his son Laertes",
    },
    Quote {
        quote: "This above all: to thine own self be true",
        context: "Polonius on the importance of authenticity",
    },
    Quote {
        quote: "The lady doth protest too much, methinks",
        context: "Gertrude watching the play within the play",
    },
    Quote {
        quote: "Brevity is the soul of wit",
        context: "Polonius, ironically being long-winded",
    },
    Quote {
        quote: "There are more things in heaven and earth, Horatio",
        context: "Hamlet on the limits of knowledge",
    },
    Quote {
        quote: "Frailty, thy name is woman!",
        context: "Hamlet's disappointment with his mother",
    },
    Quote {
        quote: "O, what a rogue and peasant slave am I!",
        context: "Hamlet berates himself for inaction",
    },
    Quote {
        quote: "The play's the thing wherein I'll catch the conscience of the king",
        context: "Hamlet's plan to expose Claudius",
    },
];

/// Rotates the on-screen quote every few seconds
#[derive(Debug, Clone, Default)]
pub struct QuoteCycle {
    index: usize,
    timer: f32,
}

impl QuoteCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance by `dt` seconds over a list of `len` quotes.
    /// Returns true when the displayed quote changed.
    pub fn advance(&mut self, dt: f32, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.timer += dt;
        if self.timer > QUOTE_DISPLAY_SECS {
            self.timer = 0.0;
            self.index = (self.index + 1) % len;
            return true;
        }
        false
    }

    /// Currently displayed quote, if the list is non-empty
    pub fn current<'a>(&self, quotes: &'a [Quote]) -> Option<&'a Quote> {
        quotes.get(self.index % quotes.len().max(1))
    }
}
