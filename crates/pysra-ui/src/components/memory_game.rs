//! Memory Game Widget
//!
//! Game card plus the `memory-area` panel holding the board and the move and
//! match counters. Pair comparison and the win dialog are delayed tasks;
//! starting a new game cancels both.

use dioxus::prelude::*;
use pysra_core::memory::{self, FlipOutcome, MatchOutcome, MemoryGame, EVALUATE_DELAY, WIN_DELAY};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use super::{use_scroll_target, use_timer_slot, Button, ButtonVariant, GamePanel, TimerSlot};

/// Game state plus the two delayed steps that act on it
#[derive(Clone, Copy, PartialEq)]
pub struct MemoryController {
    game: Signal<MemoryGame>,
    evaluation: TimerSlot,
    announcement: TimerSlot,
}

pub fn use_memory_controller() -> MemoryController {
    MemoryController {
        game: use_signal(MemoryGame::new),
        evaluation: use_timer_slot(),
        announcement: use_timer_slot(),
    }
}

impl MemoryController {
    /// Deal a new board. A pending comparison or win dialog from the
    /// previous game is cancelled first.
    pub fn start(&mut self) {
        self.evaluation.cancel();
        self.announcement.cancel();
        self.game.write().start(&mut rand::rng());
    }

    /// Flip a card and, once a pair is up, compare it after [`EVALUATE_DELAY`].
    pub fn flip(&mut self, position: usize) {
        let outcome = self.game.write().flip(position);
        let FlipOutcome::PairComplete { moves } = outcome else {
            return;
        };
        tracing::debug!(moves, "pair complete, evaluating");

        let mut game = self.game;
        let mut announcement = self.announcement;
        self.evaluation.after(EVALUATE_DELAY, move || {
            let outcome = game.write().evaluate();
            if let Some(MatchOutcome::Matched { won: true, .. }) = outcome {
                let moves = game.peek().moves();
                announcement.arm(async move {
                    tokio::time::sleep(WIN_DELAY).await;
                    announce_win(moves).await;
                });
            }
        });
    }

    pub fn close(&mut self) {
        self.game.write().close();
    }
}

#[component]
pub fn MemoryGameWidget() -> Element {
    let mut memory = use_memory_controller();
    let scroll = use_scroll_target();

    let start = move |_| {
        memory.start();
        scroll.scroll_into_view();
    };

    let close = move |_| memory.close();

    let mut flip = move |position: usize| memory.flip(position);

    let state = memory.game.read();

    rsx! {
        div { class: "game-card",
            div { class: "game-icon", "\u{1F9E0}" }
            h3 { "Memory Game" }
            p { "Match all eight pairs in as few moves as you can." }
            Button { onclick: start, "Play" }
        }

        GamePanel { id: "memory-area".to_string(), visible: state.is_visible(), scroll: scroll,
            div { class: "memory-stats",
                span { "Moves: " span { id: "moves", "{state.moves()}" } }
                span { "Matches: " span { id: "matches", "{state.matches()}" } }
            }
            div { id: "memory-game-board", class: "memory-game-board",
                for card in state.cards().iter() {
                    {
                        let position = card.position;
                        rsx! {
                            div {
                                key: "{position}",
                                class: card.class(),
                                "data-index": "{position}",
                                onclick: move |_| flip(position),
                                "{card.label()}"
                            }
                        }
                    }
                }
            }
            div { class: "panel-actions",
                Button { variant: ButtonVariant::Ghost, onclick: start, "New Game" }
                Button { variant: ButtonVariant::Secondary, onclick: close, "Close" }
            }
        }
    }
}

/// Blocking confirmation with the final move count.
async fn announce_win(moves: u32) {
    let message = memory::win_message(moves);
    let shown = tokio::task::spawn_blocking(move || {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Memory Game")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show()
    })
    .await;
    if let Err(e) = shown {
        tracing::error!("win dialog failed: {:?}", e);
    }
}
