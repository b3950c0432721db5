//! Memory matching game.
//!
//! Sixteen face-down cards hold eight symbols, two of each. The player flips
//! two cards; after [`EVALUATE_DELAY`] they either stay up as a match or turn
//! back over. Matching all eight pairs wins, announced after [`WIN_DELAY`].
//!
//! The game is driven in three steps so the component can put timers
//! between them:
//!
//! ```text
//! flip(a) -> Revealed
//! flip(b) -> PairComplete { moves }      // schedule evaluate()
//! evaluate() -> Matched { won, .. }     // schedule the win dialog if won
//!            | Mismatched
//! ```

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

/// Symbols dealt onto the board, each exactly twice.
pub const SYMBOLS: [&str; 8] = [
    "\u{1F60A}", // smiling face
    "\u{1F60E}", // sunglasses
    "\u{1F973}", // party face
    "\u{1F60D}", // heart eyes
    "\u{1F917}", // hugging face
    "\u{1F31F}", // glowing star
    "\u{1F389}", // party popper
    "\u{1F388}", // balloon
];

/// Number of pairs needed to win.
pub const PAIRS: u32 = SYMBOLS.len() as u32;

/// Text shown on a face-down card.
pub const FACE_DOWN: &str = "?";

/// Delay between the second flip and comparing the pair.
pub const EVALUATE_DELAY: Duration = Duration::from_millis(800);

/// Delay between the final match and the win announcement.
pub const WIN_DELAY: Duration = Duration::from_millis(500);

/// A single card on the board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub symbol: &'static str,
    /// Index in the shuffled deal
    pub position: usize,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    /// What the card shows right now
    pub fn label(&self) -> &'static str {
        if self.face_up {
            self.symbol
        } else {
            FACE_DOWN
        }
    }

    /// CSS class list for the card element
    pub fn class(&self) -> &'static str {
        match (self.face_up, self.matched) {
            (_, true) => "memory-card flipped matched",
            (true, false) => "memory-card flipped",
            (false, false) => "memory-card",
        }
    }
}

/// Why a flip was ignored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipRejection {
    /// Two cards are already waiting to be compared
    PairPending,
    /// The card is already showing its symbol
    AlreadyFaceUp,
    /// No card at that position
    OutOfRange,
}

/// Result of flipping a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Rejected(FlipRejection),
    /// First card of a pair revealed
    Revealed,
    /// Second card revealed; the pair is ready for `evaluate`
    PairComplete { moves: u32 },
}

/// Result of comparing a pending pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Symbols matched. `won` is true exactly once per game.
    Matched { matches: u32, won: bool },
    /// Symbols differed; both cards are face down again
    Mismatched,
}

/// Board and counters for one memory game
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryGame {
    cards: Vec<Card>,
    pending: Vec<usize>,
    moves: u32,
    matches: u32,
    win_signaled: bool,
    visible: bool,
}

impl MemoryGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a fresh shuffled board and reset the counters.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut symbols: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        symbols.shuffle(rng);

        self.cards = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card {
                symbol,
                position,
                face_up: false,
                matched: false,
            })
            .collect();
        self.pending.clear();
        self.moves = 0;
        self.matches = 0;
        self.win_signaled = false;
        self.visible = true;

        tracing::info!(cards = self.cards.len(), "memory game started");
    }

    /// Reveal the card at `position`.
    pub fn flip(&mut self, position: usize) -> FlipOutcome {
        if self.pending.len() >= 2 {
            return FlipOutcome::Rejected(FlipRejection::PairPending);
        }
        let Some(card) = self.cards.get_mut(position) else {
            return FlipOutcome::Rejected(FlipRejection::OutOfRange);
        };
        if card.face_up || card.matched {
            return FlipOutcome::Rejected(FlipRejection::AlreadyFaceUp);
        }

        card.face_up = true;
        self.pending.push(position);
        tracing::debug!(position, symbol = card.symbol, "card flipped");

        if self.pending.len() == 2 {
            self.moves += 1;
            FlipOutcome::PairComplete { moves: self.moves }
        } else {
            FlipOutcome::Revealed
        }
    }

    /// Compare the pending pair in flip order and clear it.
    ///
    /// Returns `None` if no complete pair is pending.
    pub fn evaluate(&mut self) -> Option<MatchOutcome> {
        let &[first, second] = self.pending.as_slice() else {
            return None;
        };
        self.pending.clear();

        let outcome = if self.cards[first].symbol == self.cards[second].symbol {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.matches += 1;

            let won = self.matches == PAIRS && !self.win_signaled;
            if won {
                self.win_signaled = true;
                tracing::info!(moves = self.moves, "memory game won");
            }
            MatchOutcome::Matched {
                matches: self.matches,
                won,
            }
        } else {
            self.cards[first].face_up = false;
            self.cards[second].face_up = false;
            MatchOutcome::Mismatched
        };

        tracing::debug!(?outcome, first, second, "pair evaluated");
        Some(outcome)
    }

    /// Hide the panel. The board is left as is.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Positions of face-up cards waiting for comparison, in flip order
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Message shown when the game is won
pub fn win_message(moves: u32) -> String {
    format!("Congratulations! You won in {} moves!", moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn started(seed: u64) -> MemoryGame {
        let mut game = MemoryGame::new();
        game.start(&mut StdRng::seed_from_u64(seed));
        game
    }

    /// Positions of two cards with different symbols
    fn mismatched_pair(game: &MemoryGame) -> (usize, usize) {
        let first = &game.cards()[0];
        let other = game
            .cards()
            .iter()
            .find(|c| c.symbol != first.symbol)
            .unwrap();
        (first.position, other.position)
    }

    /// Positions of the two cards carrying `symbol`
    fn pair_of(game: &MemoryGame, symbol: &str) -> (usize, usize) {
        let positions: Vec<usize> = game
            .cards()
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.position)
            .collect();
        (positions[0], positions[1])
    }

    #[test]
    fn new_game_is_empty_and_hidden() {
        let game = MemoryGame::new();
        assert!(game.cards().is_empty());
        assert!(!game.is_visible());
    }

    #[test]
    fn start_deals_face_down_board() {
        let game = started(1);
        assert_eq!(game.cards().len(), 16);
        assert!(game.is_visible());
        assert!(game.cards().iter().all(|c| !c.face_up && c.label() == FACE_DOWN));
        for (i, card) in game.cards().iter().enumerate() {
            assert_eq!(card.position, i);
        }
    }

    #[test]
    fn single_flip_does_not_count_a_move() {
        let mut game = started(2);
        assert_eq!(game.flip(0), FlipOutcome::Revealed);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.pending(), &[0]);
        assert_eq!(game.cards()[0].label(), game.cards()[0].symbol);
    }

    #[test]
    fn flipping_same_card_twice_is_rejected() {
        let mut game = started(3);
        game.flip(5);
        assert_eq!(game.flip(5), FlipOutcome::Rejected(FlipRejection::AlreadyFaceUp));
        assert_eq!(game.pending(), &[5]);
    }

    #[test]
    fn out_of_range_flip_is_rejected() {
        let mut game = started(3);
        assert_eq!(game.flip(16), FlipOutcome::Rejected(FlipRejection::OutOfRange));
        assert!(game.pending().is_empty());
    }

    #[test]
    fn third_flip_is_rejected_while_pair_pending() {
        let mut game = started(4);
        let (a, b) = mismatched_pair(&game);
        game.flip(a);
        assert_eq!(game.flip(b), FlipOutcome::PairComplete { moves: 1 });

        let third = (0..16).find(|p| *p != a && *p != b).unwrap();
        let before = game.clone();
        assert_eq!(game.flip(third), FlipOutcome::Rejected(FlipRejection::PairPending));
        assert_eq!(game, before);
    }

    #[test]
    fn mismatch_turns_both_back() {
        let mut game = started(5);
        let (a, b) = mismatched_pair(&game);
        game.flip(a);
        game.flip(b);
        assert_eq!(game.evaluate(), Some(MatchOutcome::Mismatched));
        assert!(!game.cards()[a].face_up);
        assert!(!game.cards()[b].face_up);
        assert!(game.pending().is_empty());
        assert_eq!(game.matches(), 0);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn match_keeps_both_revealed() {
        let mut game = started(6);
        let (a, b) = pair_of(&game, SYMBOLS[2]);
        game.flip(a);
        game.flip(b);
        assert_eq!(
            game.evaluate(),
            Some(MatchOutcome::Matched { matches: 1, won: false })
        );
        assert!(game.cards()[a].face_up && game.cards()[a].matched);
        assert!(game.cards()[b].face_up && game.cards()[b].matched);
        assert!(game.pending().is_empty());
        assert_eq!(game.flip(a), FlipOutcome::Rejected(FlipRejection::AlreadyFaceUp));
    }

    #[test]
    fn evaluate_without_pair_is_none() {
        let mut game = started(7);
        assert_eq!(game.evaluate(), None);
        game.flip(0);
        assert_eq!(game.evaluate(), None);
        assert_eq!(game.pending(), &[0]);
    }

    #[test]
    fn clearing_the_board_wins_once() {
        let mut game = started(8);
        let mut wins = 0;
        for symbol in SYMBOLS {
            let (a, b) = pair_of(&game, symbol);
            game.flip(a);
            game.flip(b);
            if let Some(MatchOutcome::Matched { won: true, .. }) = game.evaluate() {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(game.matches(), PAIRS);
        assert_eq!(game.moves(), 8);
        assert_eq!(win_message(game.moves()), "Congratulations! You won in 8 moves!");
        assert_eq!(game.evaluate(), None);
    }

    #[test]
    fn restart_resets_counters() {
        let mut game = started(9);
        let (a, b) = mismatched_pair(&game);
        game.flip(a);
        game.flip(b);
        game.start(&mut StdRng::seed_from_u64(10));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.matches(), 0);
        assert!(game.pending().is_empty());
        assert!(game.cards().iter().all(|c| !c.face_up));
    }

    #[test]
    fn close_keeps_board() {
        let mut game = started(11);
        game.flip(0);
        game.close();
        assert!(!game.is_visible());
        assert_eq!(game.pending(), &[0]);
        assert!(game.cards()[0].face_up);
    }

    #[test]
    fn card_classes() {
        let mut card = Card {
            symbol: SYMBOLS[0],
            position: 0,
            face_up: false,
            matched: false,
        };
        assert_eq!(card.class(), "memory-card");
        card.face_up = true;
        assert_eq!(card.class(), "memory-card flipped");
        card.matched = true;
        assert_eq!(card.class(), "memory-card flipped matched");
    }
}
