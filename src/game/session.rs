use rand::rngs::StdRng;
use rand::SeedableRng;

use super::state::{GameState, Guess, RoundOutcome};
use super::words::WordSource;
use crate::error::GameError;

/// Input events the core understands, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GuessLetter(char),
    RestartRound,
    NewRound,
    Quit,
}

/// What changed after an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    Guessed(Guess),
    RoundOver(RoundOutcome),
    Restarted,
    NewRound,
    Quit,
}

/// Counters kept across rounds for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub played: u32,
    pub won: u32,
}

/// A play session: the word list, the current round, and the running score.
pub struct Session {
    words: WordSource,
    round: GameState,
    stats: Stats,
    rng: StdRng,
}

impl Session {
    pub fn new(words: WordSource) -> Result<Self, GameError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    pub fn with_rng(words: WordSource, mut rng: StdRng) -> Result<Self, GameError> {
        let round = GameState::new(&words, &mut rng)?;
        Ok(Session {
            words,
            round,
            stats: Stats::default(),
            rng,
        })
    }

    pub fn round(&self) -> &GameState {
        &self.round
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn apply(&mut self, event: GameEvent) -> Result<SessionUpdate, GameError> {
        match event {
            GameEvent::GuessLetter(letter) => {
                let guess = self.round.guess(letter)?;
                match self.round.outcome() {
                    Some(outcome) => {
                        self.record(&outcome);
                        Ok(SessionUpdate::RoundOver(outcome))
                    }
                    None => Ok(SessionUpdate::Guessed(guess)),
                }
            }
            GameEvent::RestartRound => {
                self.round.restart();
                tracing::info!("Round restarted");
                Ok(SessionUpdate::Restarted)
            }
            GameEvent::NewRound => {
                self.round.new_game(&self.words, &mut self.rng)?;
                tracing::info!("New round started");
                Ok(SessionUpdate::NewRound)
            }
            GameEvent::Quit => Ok(SessionUpdate::Quit),
        }
    }

    fn record(&mut self, outcome: &RoundOutcome) {
        self.stats.played += 1;
        if outcome.is_win() {
            self.stats.won += 1;
        }
        tracing::info!(
            "Round over ({}), word was {}. Won {} of {}",
            if outcome.is_win() { "won" } else { "lost" },
            outcome.word(),
            self.stats.won,
            self.stats.played
        );
    }
}
